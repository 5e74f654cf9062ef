//! The social graph: posts plus the two like-derived follow indexes.
//!
//! `following[u]` holds the authors whose posts `u` liked and `followers[a]`
//! holds the users who liked some post by `a`. Both are kept equal to
//! [`following_of`]/[`followers_of`] over the current posts after every
//! mutation, and no user is ever mapped to an empty set. Each mutation checks
//! its preconditions before touching any state, so a failed call leaves the
//! graph as it was.

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::analytics::{self, followers_of, following_of, merge_post};
use crate::errors::{GraphError, GraphResult};
use crate::post::Post;
use crate::types::{FollowMap, PostId, link, unlink};

#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialGraph {
    posts: Vec<Post>,
    following: FollowMap,
    followers: FollowMap,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by adding `posts` one at a time, in order.
    pub fn from_posts<I>(posts: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Post>,
    {
        let mut graph = Self::new();
        for post in posts {
            graph.add_post(post)?;
        }
        Ok(graph)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn following(&self) -> &FollowMap {
        &self.following
    }

    pub fn followers(&self) -> &FollowMap {
        &self.followers
    }

    /// Authors `user` follows; `None` when they follow nobody.
    pub fn following_for(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.following.get(user)
    }

    /// Users following `user`; `None` when nobody does.
    pub fn followers_for(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.followers.get(user)
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn position(&self, id: PostId) -> GraphResult<usize> {
        self.posts
            .iter()
            .position(|post| post.id() == id)
            .ok_or(GraphError::NoSuchPost(id))
    }

    /// Appends `post` and merges its likes into both indexes.
    ///
    /// Fails with [`GraphError::DuplicatePost`] if a post with the same id is
    /// already present.
    pub fn add_post(&mut self, post: Post) -> GraphResult<()> {
        if self.post(post.id()).is_some() {
            return Err(GraphError::DuplicatePost(post.id()));
        }
        merge_post(&post, &mut self.following, &mut self.followers);
        debug!(
            "added post {} by '{}' with {} like(s)",
            post.id(),
            post.author(),
            post.likes().len()
        );
        self.posts.push(post);
        Ok(())
    }

    /// Removes the post with `id` and returns it.
    ///
    /// A liker of the removed post keeps following its author only while some
    /// remaining post by that author still carries their like.
    pub fn remove_post(&mut self, id: PostId) -> GraphResult<Post> {
        let index = self.position(id)?;
        let removed = self.posts.remove(index);
        let author = removed.author();

        let still_liked_by: BTreeSet<&str> = self
            .posts
            .iter()
            .filter(|post| post.author() == author)
            .flat_map(|post| post.likes().iter().map(String::as_str))
            .collect();

        for liker in removed.likes() {
            if still_liked_by.contains(liker.as_str()) {
                continue;
            }
            trace!("'{liker}' no longer follows '{author}'");
            unlink(&mut self.following, liker, author);
            unlink(&mut self.followers, author, liker);
        }

        debug!("removed post {id} by '{author}'");
        Ok(removed)
    }

    /// Records a like from `liker` on the post with `id`.
    ///
    /// Returns whether the like was new. Liking a post twice is not an error.
    pub fn like_post(&mut self, id: PostId, liker: &str) -> GraphResult<bool> {
        let index = self.position(id)?;
        let post = &mut self.posts[index];
        let added = post.add_like(liker)?;
        if added {
            link(&mut self.following, liker, post.author());
            link(&mut self.followers, post.author(), liker);
            debug!("'{liker}' liked post {id} by '{}'", post.author());
        }
        Ok(added)
    }

    /// Users followed by more people than they follow, sorted by user id.
    pub fn influencers(&self) -> Vec<String> {
        analytics::influencers(&self.following, &self.followers)
    }

    /// Users with strictly more than `threshold` followers.
    pub fn influencers_over(&self, threshold: usize) -> Vec<String> {
        analytics::influencers_over(&self.followers, threshold)
    }

    pub fn written_by(&self, author: &str) -> Vec<&Post> {
        analytics::written_by(&self.posts, author)
    }

    pub fn containing<S: AsRef<str>>(&self, words: &[S]) -> Vec<&Post> {
        analytics::containing(&self.posts, words)
    }

    pub fn mentioned_users(&self) -> BTreeSet<String> {
        analytics::mentioned_users(&self.posts)
    }

    /// True when both indexes equal a from-scratch recomputation.
    pub fn is_consistent(&self) -> bool {
        self.following == following_of(&self.posts) && self.followers == followers_of(&self.posts)
    }
}

impl PartialEq for SocialGraph {
    /// Same posts by id, regardless of order, and each side's indexes match
    /// what the other side's posts imply.
    fn eq(&self, other: &Self) -> bool {
        let ids = |graph: &Self| graph.posts.iter().map(Post::id).collect::<BTreeSet<_>>();
        self.posts.len() == other.posts.len()
            && ids(self) == ids(other)
            && self.following == following_of(&other.posts)
            && self.followers == followers_of(&other.posts)
            && other.following == following_of(&self.posts)
            && other.followers == followers_of(&self.posts)
    }
}

impl Eq for SocialGraph {}

impl fmt::Display for SocialGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "posts:")?;
        for post in &self.posts {
            writeln!(f, "  {post}")?;
        }
        writeln!(f, "following:")?;
        for (user, authors) in &self.following {
            writeln!(f, "  {user} follows {}", join(authors))?;
        }
        writeln!(f, "followers:")?;
        for (author, fans) in &self.followers {
            writeln!(f, "  {author} followed by {}", join(fans))?;
        }
        Ok(())
    }
}

fn join(users: &BTreeSet<String>) -> String {
    let names: Vec<&str> = users.iter().map(String::as_str).collect();
    format!("{{{}}}", names.join(", "))
}
