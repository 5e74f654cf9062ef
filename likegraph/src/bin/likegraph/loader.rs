//! File collaborators: seed posts and flagged-term lists.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;
use std::path::Path;

use likegraph::{CaseMode, FlaggedTerms, IdSource, Post, PostId};

/// Seed file layout: a list of `[[post]]` tables.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default, rename = "post")]
    posts: Vec<SeedPost>,
}

#[derive(Debug, Deserialize)]
struct SeedPost {
    id: Option<u64>,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    likes: Vec<String>,
}

/// Posts read from a seed file, plus the entries that failed validation.
#[derive(Debug, Default)]
pub struct Seed {
    pub posts: Vec<Post>,
    pub rejected: Vec<String>,
}

pub fn load_seed(path: &Path, ids: &mut impl IdSource) -> Result<Seed> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed(&content, ids).with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Builds every seed entry into a post; invalid entries are reported, not fatal.
pub fn parse_seed(content: &str, ids: &mut impl IdSource) -> Result<Seed> {
    let file: SeedFile = toml::from_str(content)?;
    let mut seed = Seed::default();

    for (index, entry) in file.posts.into_iter().enumerate() {
        let mut builder = Post::builder()
            .author(entry.author)
            .text(entry.text)
            .timestamp(entry.timestamp)
            .likes(entry.likes);
        if let Some(id) = entry.id {
            builder = builder.id(PostId(id));
        }
        match builder.build(ids) {
            Ok(post) => seed.posts.push(post),
            Err(err) => {
                warn!("skipping seed entry #{}: {err}", index + 1);
                seed.rejected.push(format!("entry #{}: {err}", index + 1));
            }
        }
    }

    Ok(seed)
}

pub fn load_terms(path: &Path, mode: CaseMode) -> Result<FlaggedTerms> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read terms file {}", path.display()))?;
    Ok(parse_terms(&content, mode))
}

/// One term per line; blank lines and `#` comments are skipped.
pub fn parse_terms(content: &str, mode: CaseMode) -> FlaggedTerms {
    let terms = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    FlaggedTerms::new(terms, mode)
}
