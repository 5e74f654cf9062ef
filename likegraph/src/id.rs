use uuid::Uuid;

use crate::types::PostId;

/// Capability that hands out post identifiers.
///
/// Post construction never reaches for a hidden generator: callers pass the
/// source they want, so tests can pin ids down or force collisions.
pub trait IdSource {
    fn next_id(&mut self) -> PostId;
}

impl<F> IdSource for F
where
    F: FnMut() -> PostId,
{
    fn next_id(&mut self) -> PostId {
        self()
    }
}

/// Draws ids from the 64-bit space of a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> PostId {
        let (high, _) = Uuid::new_v4().as_u64_pair();
        PostId(high)
    }
}

/// Hands out consecutive ids starting from a fixed value.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> PostId {
        let id = PostId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
