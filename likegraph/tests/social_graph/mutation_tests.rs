use crate::support::*;

#[test]
fn add_post_merges_likes_into_both_indexes() {
    let mut graph = SocialGraph::new();
    graph.add_post(post(1, "A", "first", &["B", "C"])).unwrap();
    graph.add_post(post(2, "B", "second", &["C"])).unwrap();

    assert_eq!(graph.following_for("C"), Some(&set(&["A", "B"])));
    assert_eq!(graph.followers_for("A"), Some(&set(&["B", "C"])));
    assert_eq!(graph.followers_for("C"), None);
    assert_consistent(&graph);
}

#[test]
fn duplicate_id_is_rejected_without_side_effects() {
    let mut graph = SocialGraph::from_posts([post(1, "A", "original", &["B"])]).unwrap();
    let before = graph.clone();

    let err = graph.add_post(post(1, "Z", "impostor", &["Y"])).unwrap_err();
    assert_eq!(err, GraphError::DuplicatePost(PostId(1)));
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.post(PostId(1)).unwrap().text(), "original");
    assert!(graph.following_for("Y").is_none());
    assert_eq!(graph, before);
}

#[test]
fn removing_shared_justification_keeps_remaining_edge() {
    let mut graph = SocialGraph::from_posts([
        post(1, "A", "one", &["X"]),
        post(2, "A", "two", &["X", "Y"]),
    ])
    .unwrap();

    let removed = graph.remove_post(PostId(2)).unwrap();
    assert_eq!(removed.id(), PostId(2));

    assert_eq!(graph.following_for("X"), Some(&set(&["A"])));
    assert!(graph.following_for("Y").is_none());
    assert_eq!(graph.followers_for("A"), Some(&set(&["X"])));
    assert_consistent(&graph);
}

#[test]
fn removing_last_post_of_author_drops_their_keys() {
    let mut graph = SocialGraph::from_posts([
        post(1, "A", "one", &["B"]),
        post(2, "B", "two", &["A"]),
    ])
    .unwrap();

    graph.remove_post(PostId(1)).unwrap();
    assert!(graph.followers_for("A").is_none());
    assert!(graph.following_for("B").is_none());
    assert_eq!(graph.following_for("A"), Some(&set(&["B"])));
    assert_consistent(&graph);
}

#[test]
fn removing_unknown_post_fails() {
    let mut graph = SocialGraph::from_posts([post(1, "A", "one", &["B"])]).unwrap();
    let before = graph.clone();
    assert_eq!(graph.remove_post(PostId(7)).unwrap_err(), GraphError::NoSuchPost(PostId(7)));
    assert_eq!(graph, before);
}

#[test]
fn add_then_remove_restores_the_graph() {
    let mut graph = SocialGraph::from_posts([
        post(1, "A", "one", &["B"]),
        post(2, "B", "two", &["C"]),
    ])
    .unwrap();
    let before = graph.clone();

    graph.add_post(post(3, "A", "three", &["B", "C", "D"])).unwrap();
    assert_ne!(graph, before);
    graph.remove_post(PostId(3)).unwrap();

    assert_eq!(graph, before);
    assert_eq!(graph.following(), before.following());
    assert_eq!(graph.followers(), before.followers());
}

#[test]
fn like_post_adds_single_edge() {
    let mut graph = SocialGraph::from_posts([post(1, "A", "one", &[])]).unwrap();
    assert!(graph.like_post(PostId(1), "B").unwrap());
    assert_eq!(graph.following_for("B"), Some(&set(&["A"])));
    assert_eq!(graph.followers_for("A"), Some(&set(&["B"])));
    assert_consistent(&graph);
}

#[test]
fn self_like_through_graph_is_rejected() {
    let mut graph = SocialGraph::from_posts([post(1, "A", "one", &[])]).unwrap();
    let err = graph.like_post(PostId(1), "A").unwrap_err();
    assert_eq!(
        err,
        GraphError::SelfLike {
            post_id: PostId(1),
            user: "A".to_string()
        }
    );
    assert!(graph.following().is_empty());
    assert!(graph.post(PostId(1)).unwrap().likes().is_empty());
}

#[test]
fn seeded_graph_matches_incremental_build() {
    let posts = vec![
        post(1, "A", "one", &["B"]),
        post(2, "B", "two", &["A", "C"]),
        post(3, "C", "three", &["A"]),
    ];
    let seeded = SocialGraph::from_posts(posts.clone()).unwrap();

    let mut incremental = SocialGraph::new();
    for p in posts {
        incremental.add_post(p).unwrap();
    }
    assert_eq!(seeded, incremental);
    assert_eq!(seeded.following(), incremental.following());
}

#[test]
fn seeding_with_duplicates_fails() {
    let result = SocialGraph::from_posts([post(1, "A", "one", &[]), post(1, "B", "two", &[])]);
    assert_eq!(result.unwrap_err(), GraphError::DuplicatePost(PostId(1)));
}

#[test]
fn equality_ignores_post_order() {
    let left = SocialGraph::from_posts([post(1, "A", "one", &["B"]), post(2, "B", "two", &["A"])]).unwrap();
    let right = SocialGraph::from_posts([post(2, "B", "two", &["A"]), post(1, "A", "one", &["B"])]).unwrap();
    assert_eq!(left, right);
    assert_ne!(left, SocialGraph::new());
}

#[test]
fn overlong_text_never_yields_a_post() {
    let result = Post::create(None, "A", "x".repeat(141), at(0), &mut SequentialIds::default());
    assert_eq!(
        result.unwrap_err(),
        GraphError::Validation(ValidationError::TextTooLong { length: 141, limit: 140 })
    );
}
