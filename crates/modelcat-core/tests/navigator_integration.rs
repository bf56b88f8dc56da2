//! Integration tests for catalog traversal and navigator state.

use modelcat_core::catalog::walk;
use modelcat_core::{
    collect_forest_models, collect_models, sample_forest, Forest, NavigatorSession, NodeKind,
    SelectionView, TreeNode,
};
use std::collections::HashSet;
use std::io::Write;

fn model(id: &str) -> TreeNode {
    TreeNode::new(id, id, NodeKind::Model)
}

/// Two repositories with a model that has children and a library directly
/// under a repository.
fn irregular_forest() -> Forest {
    Forest::new(vec![
        TreeNode::repository("r1", "R1").with_children([
            TreeNode::catalog("c1", "C1").with_children([
                TreeNode::library("l1", "L1").with_children([
                    model("m1"),
                    model("m2").with_child(model("m2-child")),
                ]),
                TreeNode::library("l2", "L2"),
            ]),
            TreeNode::library("l3", "L3").with_child(model("m3")),
        ]),
        TreeNode::repository("r2", "R2").with_child(
            TreeNode::catalog("c2", "C2").with_child(TreeNode::library("l4", "L4").with_child(model("m4"))),
        ),
    ])
    .unwrap()
}

fn ids(nodes: &[&TreeNode]) -> Vec<String> {
    nodes.iter().map(|n| n.id().to_string()).collect()
}

/// Models reachable from `node` without descending into models.
fn reachable_models(node: &TreeNode) -> usize {
    if node.is_model() {
        1
    } else {
        node.children.iter().map(reachable_models).sum()
    }
}

#[test]
fn collected_nodes_are_models_and_counts_match() {
    for forest in [sample_forest().unwrap(), irregular_forest()] {
        for (_, node) in walk(forest.roots()) {
            let models = collect_models(Some(node));
            assert!(models.iter().all(|m| m.kind() == NodeKind::Model));
            assert_eq!(models.len(), reachable_models(node), "node {}", node.id());
        }
    }
}

#[test]
fn roots_concatenate_to_every_model_once() {
    let forest = irregular_forest();
    let mut concatenated = Vec::new();
    for root in forest.roots() {
        concatenated.extend(collect_models(Some(root)));
    }
    assert_eq!(ids(&concatenated), vec!["m1", "m2", "m3", "m4"]);
    assert_eq!(ids(&concatenated), ids(&collect_forest_models(forest.roots())));

    let unique: HashSet<&str> = concatenated.iter().map(|n| n.id()).collect();
    assert_eq!(unique.len(), concatenated.len());
}

#[test]
fn collection_is_idempotent() {
    let forest = sample_forest().unwrap();
    let root = forest.find("repo-1");
    let first = collect_models(root);
    let second = collect_models(root);
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[test]
fn toggle_twice_restores_membership() {
    let mut session = NavigatorSession::new(sample_forest().unwrap());
    for id in ["repo-1", "lib-2", "model-4", "not-a-node"] {
        let before = session.is_expanded(id);
        session.toggle(id);
        assert_ne!(session.is_expanded(id), before);
        session.toggle(id);
        assert_eq!(session.is_expanded(id), before);
    }
}

#[test]
fn select_then_clear_matches_initial_state() {
    let mut session = NavigatorSession::new(sample_forest().unwrap());
    let initial = session.view();

    session.select(Some("cat-2")).unwrap();
    assert_eq!(session.listing().len(), 1);

    session.clear_selection();
    assert!(session.listing().is_empty());
    assert_eq!(session.view(), initial);
}

#[test]
fn selecting_catalog_lists_models_in_library_order() {
    let mut session = NavigatorSession::new(sample_forest().unwrap());
    session.select(Some("cat-1")).unwrap();

    let models = session.selected_models();
    assert_eq!(ids(&models), vec!["model-1", "model-2", "model-3", "model-4"]);
}

#[test]
fn selecting_model_yields_only_itself() {
    let mut session = NavigatorSession::new(sample_forest().unwrap());
    session.select(Some("model-3")).unwrap();
    assert_eq!(ids(&session.selected_models()), vec!["model-3"]);
    assert!(matches!(session.view(), SelectionView::Detail(_)));

    let mut session = NavigatorSession::new(irregular_forest());
    session.select(Some("m2")).unwrap();
    assert_eq!(ids(&session.selected_models()), vec!["m2"]);
}

#[test]
fn selecting_empty_library_yields_empty_listing() {
    let mut session = NavigatorSession::new(sample_forest().unwrap());
    session.select(Some("lib-4")).unwrap();

    assert!(session.selected_models().is_empty());
    assert_eq!(session.view(), SelectionView::Listing { rows: Vec::new() });
}

#[test]
fn selecting_twice_is_idempotent() {
    let mut session = NavigatorSession::new(sample_forest().unwrap());
    assert!(session.select(Some("lib-1")).unwrap());
    let view = session.view();
    assert!(!session.select(Some("lib-1")).unwrap());
    assert_eq!(session.view(), view);
}

#[test]
fn loads_forest_from_file() {
    let forest = sample_forest().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(forest.to_json_pretty().unwrap().as_bytes())
        .unwrap();

    let loaded = Forest::load(file.path()).unwrap();
    assert_eq!(loaded.roots(), forest.roots());
    assert_eq!(loaded.stats(), forest.stats());
}
