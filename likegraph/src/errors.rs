use thiserror::Error;

use crate::types::PostId;

/// Top-level error type returned by graph and post mutations.
///
/// Every variant is a logical failure: the operation that produced it left the
/// post and the graph exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A post could not be built because one of its fields is invalid.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The liker is the author of the post.
    #[error("user '{user}' cannot like their own post {post_id}")]
    SelfLike { post_id: PostId, user: String },

    /// Another post in the graph already carries this id.
    #[error("a post with id {0} already exists")]
    DuplicatePost(PostId),

    /// No post in the graph carries this id.
    #[error("no post with id {0}")]
    NoSuchPost(PostId),
}

/// Field-level failures raised while constructing a [`Post`](crate::Post) or
/// validating query input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text is {length} characters long, the limit is {limit}")]
    TextTooLong { length: usize, limit: usize },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Name of the offending field, for callers that report per-field issues.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TextTooLong { .. } => "text",
            Self::MissingField(field) => field,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
