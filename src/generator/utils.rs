use std::{
    cmp::Ordering,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Descending by file name. Dated names thus come out newest first.
pub(super) fn sort_post_files(a: &PathBuf, b: &PathBuf) -> Ordering {
    b.file_name().cmp(&a.file_name())
}

/// Any name ending in `.md`, dot-files and a bare `.md` included.
fn is_markdown(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(".md")
}

pub(super) fn list_post_files(posts_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in std::fs::read_dir(posts_dir)? {
        let entry = entry?;
        if !entry.metadata()?.is_file() || !is_markdown(&entry.file_name()) {
            continue;
        }
        files.push(entry.path());
    }
    files.sort_by(sort_post_files);

    Ok(files)
}
