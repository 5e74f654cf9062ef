//! The post entity.
//!
//! A post is created once through [`PostBuilder`] and is only ever mutated by
//! adding likes. Identity is the id alone: two posts with the same id compare
//! equal whatever their content.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{GraphError, GraphResult, ValidationError};
use crate::id::IdSource;
use crate::types::{MAX_TEXT_CHARS, PostId};

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    id: PostId,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
    likes: BTreeSet<String>,
}

impl Post {
    pub fn builder() -> PostBuilder {
        PostBuilder::default()
    }

    /// Builds a post with no likes, drawing an id from `ids` when `id` is `None`.
    pub fn create(
        id: Option<PostId>,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        ids: &mut impl IdSource,
    ) -> GraphResult<Self> {
        let mut builder = Self::builder().author(author).text(text).timestamp(timestamp);
        builder.id = id;
        builder.build(ids)
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn likes(&self) -> &BTreeSet<String> {
        &self.likes
    }

    pub fn is_liked_by(&self, user: &str) -> bool {
        self.likes.contains(user)
    }

    /// Records a like from `user`.
    ///
    /// Returns `Ok(true)` when the like is new and `Ok(false)` when `user`
    /// already liked the post. Fails with [`GraphError::SelfLike`] when `user`
    /// is the author, leaving the likes untouched.
    pub fn add_like(&mut self, user: impl Into<String>) -> GraphResult<bool> {
        let user = user.into();
        if user == self.author {
            return Err(GraphError::SelfLike {
                post_id: self.id,
                user,
            });
        }
        Ok(self.likes.insert(user))
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let likes: Vec<&str> = self.likes.iter().map(String::as_str).collect();
        write!(
            f,
            "({}, {}, {:?}, {}, {{{}}})",
            self.id,
            self.author,
            self.text,
            self.timestamp.to_rfc3339(),
            likes.join(", ")
        )
    }
}

/// Staged construction of a [`Post`]; nothing is observable until
/// [`build`](PostBuilder::build) succeeds.
#[derive(Debug, Clone, Default)]
pub struct PostBuilder {
    id: Option<PostId>,
    author: Option<String>,
    text: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    likes: Vec<String>,
}

impl PostBuilder {
    pub fn id(mut self, id: impl Into<PostId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn like(mut self, user: impl Into<String>) -> Self {
        self.likes.push(user.into());
        self
    }

    pub fn likes<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likes.extend(users.into_iter().map(Into::into));
        self
    }

    /// Validates every field and produces the post.
    ///
    /// Field checks run before an id is drawn from `ids`; seeded likes are
    /// checked last against the self-like rule.
    pub fn build(self, ids: &mut impl IdSource) -> GraphResult<Post> {
        let author = self
            .author
            .filter(|author| !author.is_empty())
            .ok_or(ValidationError::MissingField("author"))?;
        let text = self.text.ok_or(ValidationError::MissingField("text"))?;
        let timestamp = self.timestamp.ok_or(ValidationError::MissingField("timestamp"))?;

        let length = text.chars().count();
        if length > MAX_TEXT_CHARS {
            return Err(ValidationError::TextTooLong {
                length,
                limit: MAX_TEXT_CHARS,
            }
            .into());
        }

        let mut post = Post {
            id: self.id.unwrap_or_else(|| ids.next_id()),
            author,
            text,
            timestamp,
            likes: BTreeSet::new(),
        };
        for user in self.likes {
            post.add_like(user)?;
        }
        Ok(post)
    }
}
