//! likegraph core library.
//!
//! Posts carry likes; likes induce who-follows-whom. [`SocialGraph`] keeps the
//! forward and reverse follow indexes in step with its posts as they are
//! added, removed and liked, and [`ModeratedGraph`] layers term-based
//! flagging on top without touching that bookkeeping.
//!
//! The core performs no I/O: ids come from a caller-supplied [`IdSource`],
//! timestamps from the caller, and flagged terms from whatever loader the
//! application wires in.

pub mod analytics;
pub mod errors;
pub mod graph;
pub mod id;
pub mod moderation;
pub mod post;
pub mod types;

pub use analytics::{containing, followers_of, following_of, influencers_over, mentioned_users, written_by};
pub use errors::*;
pub use graph::SocialGraph;
pub use id::{IdSource, RandomIds, SequentialIds};
pub use moderation::{CaseMode, FlagPredicate, FlaggedTerms, ModeratedGraph};
pub use post::{Post, PostBuilder};
pub use types::{DEFAULT_INFLUENCER_THRESHOLD, FollowMap, MAX_TEXT_CHARS, PostId};
