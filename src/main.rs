use std::path::PathBuf;

use anyhow::bail;
use clap::{command, Arg, ArgAction};
use generator::generate;
use log::error;
use state::{State, CATEGORIES, DEFAULT_OUTPUT_FILE, DEFAULT_POSTS_DIR};

mod generator;
mod index_file;
mod metadata;
mod state;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .args([
            Arg::new("posts_dir")
                .help("Directory of markdown posts")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_POSTS_DIR),
            Arg::new("output_file")
                .help("Path of the generated JSON index. Existing file will be overwritten.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT_FILE),
            Arg::new("deny_skipped")
                .long("deny-skipped")
                .help("Fail when any markdown file was skipped")
                .action(ArgAction::SetTrue),
        ])
        .get_matches();

    let posts_dir: &PathBuf = matches.get_one("posts_dir").unwrap();
    let output_file: &PathBuf = matches.get_one("output_file").unwrap();
    if output_file.is_dir() {
        bail!("output_file must not be a directory.");
    }

    state::STATE
        .set(State {
            posts_dir: posts_dir.to_owned(),
            output_file: output_file.to_owned(),
            categories: CATEGORIES,
            deny_skipped: matches.get_flag("deny_skipped"),
        })
        .unwrap();

    let Some(report) = generate()? else {
        return Ok(());
    };

    if State::instance().deny_skipped && !report.skipped.is_empty() {
        for (name, reason) in report.skipped.iter() {
            error!("{name}: {reason}");
        }
        bail!("{} markdown file(s) were skipped.", report.skipped.len());
    }

    Ok(())
}
