use std::{path::PathBuf, sync::OnceLock};

use crate::generator::data::Category;

pub(crate) const DEFAULT_POSTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/posts");
pub(crate) const DEFAULT_OUTPUT_FILE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/posts.json");

// edit here to change the category list
pub(crate) const CATEGORIES: &[Category] = &[
    Category {
        id: "daily",
        name: "일상",
    },
    Category { id: "ps", name: "PS" },
    Category {
        id: "books",
        name: "독서",
    },
    Category {
        id: "food",
        name: "미식",
    },
];

#[derive(Debug)]
pub(crate) struct State {
    pub posts_dir: PathBuf,
    pub output_file: PathBuf,
    pub categories: &'static [Category],

    pub deny_skipped: bool,
}

pub(super) static STATE: OnceLock<State> = OnceLock::new();

impl State {
    pub fn instance() -> &'static State {
        STATE.get().expect("state is initialized in main")
    }
}
