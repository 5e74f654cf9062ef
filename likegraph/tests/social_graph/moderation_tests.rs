use crate::support::*;
use likegraph::{CaseMode, FlaggedTerms, ModeratedGraph};

fn terms() -> FlaggedTerms {
    FlaggedTerms::new(["scam", "spam"], CaseMode::Insensitive)
}

#[test]
fn flags_matching_posts_on_insert() {
    let mut moderated = ModeratedGraph::new(terms());
    moderated.add_post(post(1, "A", "totally legit", &[])).unwrap();
    moderated.add_post(post(2, "B", "this is a SCAM.", &["A"])).unwrap();

    assert_eq!(moderated.flagged().iter().copied().collect::<Vec<_>>(), vec![PostId(2)]);
    assert!(moderated.is_flagged(PostId(2)));
    assert_eq!(moderated.graph().following_for("A"), Some(&set(&["B"])));
    assert_consistent(moderated.graph());
}

#[test]
fn removal_discards_flag() {
    let mut moderated = ModeratedGraph::new(terms());
    moderated.add_post(post(1, "A", "spam spam", &[])).unwrap();
    moderated.remove_post(PostId(1)).unwrap();
    assert!(moderated.flagged().is_empty());
    assert!(moderated.graph().is_empty());
}

#[test]
fn failed_insert_does_not_flag() {
    let mut moderated = ModeratedGraph::new(terms());
    moderated.add_post(post(1, "A", "clean", &[])).unwrap();

    let err = moderated.add_post(post(1, "B", "spam", &[])).unwrap_err();
    assert_eq!(err, GraphError::DuplicatePost(PostId(1)));
    assert!(moderated.flagged().is_empty());
}

#[test]
fn failed_removal_keeps_flags() {
    let mut moderated = ModeratedGraph::new(terms());
    moderated.add_post(post(1, "A", "spam", &[])).unwrap();
    assert!(moderated.remove_post(PostId(9)).is_err());
    assert!(moderated.is_flagged(PostId(1)));
}

#[test]
fn wrapping_a_seeded_graph_flags_existing_posts() {
    let graph = SocialGraph::from_posts([
        post(1, "A", "scam alert", &[]),
        post(2, "B", "nice day", &["A"]),
    ])
    .unwrap();
    let moderated = ModeratedGraph::from_graph(graph.clone(), terms());

    assert!(moderated.is_flagged(PostId(1)));
    assert!(!moderated.is_flagged(PostId(2)));
    assert_eq!(moderated.into_inner(), graph);
}

#[test]
fn likes_pass_through_to_the_graph() {
    let mut moderated = ModeratedGraph::new(|text: &str| text.starts_with('!'));
    moderated.add_post(post(1, "A", "!loud", &[])).unwrap();
    assert!(moderated.like_post(PostId(1), "B").unwrap());
    assert!(moderated.is_flagged(PostId(1)));
    assert_eq!(moderated.graph().followers_for("A"), Some(&set(&["B"])));
}
