use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub excerpt: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct IndexData<'a> {
    pub categories: &'a [Category],
    pub posts: &'a [Post],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    NoFrontmatter,
    NoTitle,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoFrontmatter => f.write_str("no frontmatter"),
            SkipReason::NoTitle => f.write_str("no title"),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct BuildReport {
    pub posts: usize,
    pub skipped: Vec<(String, SkipReason)>,
}
