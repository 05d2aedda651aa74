use std::path::Path;

use anyhow::Context;
use log::{error, info, warn};

use crate::{index_file::save_index, metadata, state::State};

use self::data::{BuildReport, Category, IndexData, Post, SkipReason};

pub(crate) mod data;
mod utils;

fn preprocess_file(file_path: &Path) -> anyhow::Result<Result<Post, SkipReason>> {
    let content = std::fs::read_to_string(file_path)?;
    let (metadata, _body) = metadata::parse(&content);

    let Some(metadata) = metadata.filter(|m| !m.is_empty()) else {
        return Ok(Err(SkipReason::NoFrontmatter));
    };
    let Some(title) = metadata.get_str("title") else {
        return Ok(Err(SkipReason::NoTitle));
    };

    let id = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Ok(Post {
        id,
        title,
        date: metadata.get_str("date").unwrap_or_default(),
        category: metadata.get_str("category").unwrap_or_default(),
        tags: metadata.get_list("tags").unwrap_or_default(),
        excerpt: metadata.get_str("excerpt").unwrap_or_default(),
    }))
}

/// Scans `posts_dir` and rewrites `output_file`.
///
/// Returns `None` when `posts_dir` is missing or not a directory; nothing is
/// written then.
pub(crate) fn build_index(
    posts_dir: &Path,
    output_file: &Path,
    categories: &[Category],
) -> anyhow::Result<Option<BuildReport>> {
    if !posts_dir.exists() {
        error!("posts directory does not exist: {posts_dir:?}");
        return Ok(None);
    }
    if !posts_dir.is_dir() {
        error!("posts directory is not a directory: {posts_dir:?}");
        return Ok(None);
    }

    let mut report = BuildReport::default();
    let mut posts = vec![];

    for path in utils::list_post_files(posts_dir)
        .with_context(|| format!("while listing {posts_dir:?}"))?
    {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        info!("processing {name}");

        match preprocess_file(&path).with_context(|| format!("while preprocessing {path:?}"))? {
            Ok(post) => {
                info!("  added: {}", post.title);
                posts.push(post);
            }
            Err(reason) => {
                warn!("  skipped {name}: {reason}");
                report.skipped.push((name, reason));
            }
        }
    }

    let index = IndexData {
        categories,
        posts: &posts,
    };
    save_index(output_file, &index).with_context(|| format!("while writing {output_file:?}"))?;

    report.posts = posts.len();
    if report.skipped.is_empty() {
        info!("{} posts -> {output_file:?}", report.posts);
    } else {
        info!(
            "{} posts -> {output_file:?} ({} skipped)",
            report.posts,
            report.skipped.len()
        );
    }

    Ok(Some(report))
}

pub(crate) fn generate() -> anyhow::Result<Option<BuildReport>> {
    let s = State::instance();
    build_index(&s.posts_dir, &s.output_file, s.categories)
}
