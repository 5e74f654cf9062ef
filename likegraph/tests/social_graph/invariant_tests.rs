use crate::support::*;
use proptest::prelude::*;

const USERS: &[&str] = &["ann", "ben", "cat", "dov", "eve"];

#[derive(Debug, Clone)]
enum Op {
    Add { id: u64, author: usize, likers: Vec<usize> },
    Remove { id: u64 },
    Like { id: u64, liker: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..12, 0..USERS.len(), prop::collection::vec(0..USERS.len(), 0..4))
            .prop_map(|(id, author, likers)| Op::Add { id, author, likers }),
        (0u64..12).prop_map(|id| Op::Remove { id }),
        (0u64..12, 0..USERS.len()).prop_map(|(id, liker)| Op::Like { id, liker }),
    ]
}

fn apply(graph: &mut SocialGraph, op: &Op) {
    match op {
        Op::Add { id, author, likers } => {
            let author = USERS[*author];
            let likers: Vec<&str> = likers.iter().map(|i| USERS[*i]).filter(|u| *u != author).collect();
            let had = graph.post(PostId(*id)).is_some();
            let before = graph.clone();
            let result = graph.add_post(post(*id, author, "generated", &likers));
            if had {
                assert_eq!(result.unwrap_err(), GraphError::DuplicatePost(PostId(*id)));
                assert_eq!(graph.following(), before.following());
            } else {
                result.unwrap();
            }
        }
        Op::Remove { id } => {
            let had = graph.post(PostId(*id)).is_some();
            assert_eq!(graph.remove_post(PostId(*id)).is_ok(), had);
        }
        Op::Like { id, liker } => {
            let before = graph.clone();
            let liker = USERS[*liker];
            match graph.like_post(PostId(*id), liker) {
                Ok(_) => {}
                Err(GraphError::NoSuchPost(_)) | Err(GraphError::SelfLike { .. }) => {
                    assert_eq!(graph.following(), before.following());
                    assert_eq!(graph.followers(), before.followers());
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }
}

proptest! {
    #[test]
    fn indexes_track_posts_under_any_sequence(ops in prop::collection::vec(op(), 0..40)) {
        let mut graph = SocialGraph::new();
        for op in &ops {
            apply(&mut graph, op);
            assert_consistent(&graph);
        }
    }

    #[test]
    fn add_then_remove_is_identity(
        ops in prop::collection::vec(op(), 0..20),
        author in 0..USERS.len(),
        likers in prop::collection::vec(0..USERS.len(), 0..5),
    ) {
        let mut graph = SocialGraph::new();
        for op in &ops {
            apply(&mut graph, op);
        }
        let before = graph.clone();
        let author = USERS[author];
        let likers: Vec<&str> = likers.iter().map(|i| USERS[*i]).filter(|u| *u != author).collect();

        graph.add_post(post(100, author, "fresh", &likers)).unwrap();
        graph.remove_post(PostId(100)).unwrap();
        prop_assert_eq!(&graph, &before);
        prop_assert_eq!(graph.following(), before.following());
        prop_assert_eq!(graph.followers(), before.followers());
    }
}
