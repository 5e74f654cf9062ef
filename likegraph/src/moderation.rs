//! Flagging of posts whose text matches caller-supplied terms.
//!
//! [`ModeratedGraph`] wraps a [`SocialGraph`] and forwards every mutation to
//! it; the only state it adds is the set of flagged post ids.

use std::collections::BTreeSet;

use log::debug;

use crate::errors::GraphResult;
use crate::graph::SocialGraph;
use crate::post::Post;
use crate::types::PostId;

/// Decides whether a post's text should be flagged.
pub trait FlagPredicate {
    fn is_flagged(&self, text: &str) -> bool;
}

impl<F> FlagPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn is_flagged(&self, text: &str) -> bool {
        self(text)
    }
}

/// Whether [`FlaggedTerms`] compares words exactly or ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Sensitive,
    Insensitive,
}

/// Immutable set of flagged terms matched against the words of a post.
///
/// Words are the runs of alphanumeric characters (plus `'` and `-`) in the
/// text, so punctuation next to a term does not hide it.
#[derive(Debug, Clone, Default)]
pub struct FlaggedTerms {
    terms: BTreeSet<String>,
    mode: CaseMode,
}

impl FlaggedTerms {
    pub fn new<I, S>(terms: I, mode: CaseMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(Into::into)
            .filter(|term: &String| !term.is_empty())
            .map(|term| match mode {
                CaseMode::Sensitive => term,
                CaseMode::Insensitive => term.to_lowercase(),
            })
            .collect();
        Self { terms, mode }
    }

    pub fn terms(&self) -> &BTreeSet<String> {
        &self.terms
    }

    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FlagPredicate for FlaggedTerms {
    fn is_flagged(&self, text: &str) -> bool {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
            .filter(|word| !word.is_empty())
            .any(|word| match self.mode {
                CaseMode::Sensitive => self.terms.contains(word),
                CaseMode::Insensitive => self.terms.contains(&word.to_lowercase()),
            })
    }
}

/// A [`SocialGraph`] that remembers which of its posts were flagged.
#[derive(Debug, Clone)]
pub struct ModeratedGraph<P> {
    graph: SocialGraph,
    predicate: P,
    flagged: BTreeSet<PostId>,
}

impl<P: FlagPredicate> ModeratedGraph<P> {
    pub fn new(predicate: P) -> Self {
        Self::from_graph(SocialGraph::new(), predicate)
    }

    /// Wraps an existing graph, flagging the posts it already holds.
    pub fn from_graph(graph: SocialGraph, predicate: P) -> Self {
        let flagged = graph
            .posts()
            .iter()
            .filter(|post| predicate.is_flagged(post.text()))
            .map(Post::id)
            .collect();
        Self {
            graph,
            predicate,
            flagged,
        }
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn into_inner(self) -> SocialGraph {
        self.graph
    }

    pub fn flagged(&self) -> &BTreeSet<PostId> {
        &self.flagged
    }

    pub fn is_flagged(&self, id: PostId) -> bool {
        self.flagged.contains(&id)
    }

    pub fn add_post(&mut self, post: Post) -> GraphResult<()> {
        let id = post.id();
        let hit = self.predicate.is_flagged(post.text());
        self.graph.add_post(post)?;
        if hit {
            debug!("flagged post {id}");
            self.flagged.insert(id);
        }
        Ok(())
    }

    pub fn remove_post(&mut self, id: PostId) -> GraphResult<Post> {
        let removed = self.graph.remove_post(id)?;
        if self.flagged.remove(&id) {
            debug!("unflagged removed post {id}");
        }
        Ok(removed)
    }

    /// Likes never change a post's text, so flags are untouched.
    pub fn like_post(&mut self, id: PostId, liker: &str) -> GraphResult<bool> {
        self.graph.like_post(id, liker)
    }
}
