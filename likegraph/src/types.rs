use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum post length, counted in Unicode scalar values.
pub const MAX_TEXT_CHARS: usize = 140;

/// Follower count a user must strictly exceed to be reported by
/// [`influencers_over`](crate::analytics::influencers_over) when no other
/// threshold is configured.
pub const DEFAULT_INFLUENCER_THRESHOLD: usize = 10;

/// Identifier of a post, unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// user -> set of users, used for both the following and the followers index.
///
/// Users mapped to an empty set never appear as keys.
pub type FollowMap = BTreeMap<String, BTreeSet<String>>;

/// Adds `to` under `from`, creating the entry on first use.
pub(crate) fn link(map: &mut FollowMap, from: &str, to: &str) -> bool {
    map.entry(from.to_string()).or_default().insert(to.to_string())
}

/// Removes `to` from the entry under `from`, dropping the entry once empty.
pub(crate) fn unlink(map: &mut FollowMap, from: &str, to: &str) -> bool {
    let Some(targets) = map.get_mut(from) else {
        return false;
    };
    let removed = targets.remove(to);
    if targets.is_empty() {
        map.remove(from);
    }
    removed
}
