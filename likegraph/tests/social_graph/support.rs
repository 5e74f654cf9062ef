pub(crate) use chrono::{DateTime, Utc};
pub(crate) use likegraph::{
    GraphError, Post, PostId, SequentialIds, SocialGraph, ValidationError, followers_of, following_of,
};

pub(crate) fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("valid timestamp")
}

pub(crate) fn post(id: u64, author: &str, text: &str, likes: &[&str]) -> Post {
    Post::builder()
        .id(id)
        .author(author)
        .text(text)
        .timestamp(at(id as i64))
        .likes(likes.iter().copied())
        .build(&mut SequentialIds::default())
        .expect("valid post")
}

pub(crate) fn set(users: &[&str]) -> std::collections::BTreeSet<String> {
    users.iter().map(|user| user.to_string()).collect()
}

/// Asserts the maintained indexes equal a recomputation and mirror each other.
pub(crate) fn assert_consistent(graph: &SocialGraph) {
    assert_eq!(graph.following(), &following_of(graph.posts()));
    assert_eq!(graph.followers(), &followers_of(graph.posts()));

    for (user, authors) in graph.following() {
        assert!(!authors.is_empty(), "empty following entry for {user}");
        for author in authors {
            assert!(graph.followers()[author].contains(user));
        }
    }
    for (author, fans) in graph.followers() {
        assert!(!fans.is_empty(), "empty followers entry for {author}");
        for fan in fans {
            assert!(graph.following()[fan].contains(author));
        }
    }
}
