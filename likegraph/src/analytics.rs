//! Pure queries over arbitrary post slices and follow maps.
//!
//! [`SocialGraph`](crate::SocialGraph) answers the same questions for its own
//! posts by delegating here, so the incrementally maintained indexes can
//! always be checked against a from-scratch recomputation.

use std::collections::BTreeSet;

use crate::post::Post;
use crate::types::{FollowMap, link};

/// Merges the edges contributed by one post into both indexes.
pub(crate) fn merge_post(post: &Post, following: &mut FollowMap, followers: &mut FollowMap) {
    for liker in post.likes() {
        link(following, liker, post.author());
        link(followers, post.author(), liker);
    }
}

/// For every user, the set of authors whose posts they liked.
pub fn following_of(posts: &[Post]) -> FollowMap {
    let mut following = FollowMap::new();
    for post in posts {
        for liker in post.likes() {
            link(&mut following, liker, post.author());
        }
    }
    following
}

/// For every author, the set of users who liked at least one of their posts.
pub fn followers_of(posts: &[Post]) -> FollowMap {
    let mut followers = FollowMap::new();
    for post in posts {
        for liker in post.likes() {
            link(&mut followers, post.author(), liker);
        }
    }
    followers
}

/// Users followed by more people than they follow.
///
/// Only keys of `followers` can qualify; a user missing from `following`
/// follows nobody. Output is sorted by user id.
pub fn influencers(following: &FollowMap, followers: &FollowMap) -> Vec<String> {
    followers
        .iter()
        .filter(|(user, fans)| fans.len() > following.get(*user).map_or(0, BTreeSet::len))
        .map(|(user, _)| user.clone())
        .collect()
}

/// Users whose follower set is strictly larger than `threshold`.
pub fn influencers_over(followers: &FollowMap, threshold: usize) -> Vec<String> {
    followers
        .iter()
        .filter(|(_, fans)| fans.len() > threshold)
        .map(|(user, _)| user.clone())
        .collect()
}

/// Posts by `author`, in their original order.
pub fn written_by<'a>(posts: &'a [Post], author: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.author() == author).collect()
}

/// Posts whose text contains at least one of `words` as a substring.
///
/// Each matching post appears once. Results follow post order, not the order
/// of `words`. The empty string is a substring of every text, so an empty word
/// matches every post.
pub fn containing<'a, S>(posts: &'a [Post], words: &[S]) -> Vec<&'a Post>
where
    S: AsRef<str>,
{
    posts
        .iter()
        .filter(|post| words.iter().any(|word| post.text().contains(word.as_ref())))
        .collect()
}

/// Distinct authors of `posts`.
pub fn mentioned_users(posts: &[Post]) -> BTreeSet<String> {
    posts.iter().map(|post| post.author().to_string()).collect()
}
