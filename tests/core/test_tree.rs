//! Project structure introspection

use crate::common::{create_test_services, TestRepo};
use sonar::core::types::{NodeType, ProjectNode};

fn names(node: &ProjectNode) -> Vec<&str> {
    node.children
        .as_ref()
        .map(|c| c.iter().map(|n| n.name.as_str()).collect())
        .unwrap_or_default()
}

#[test]
fn test_tree_default_depth() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let tree = services.explorer.get_project_structure(None);
    assert_eq!(tree.node_type, NodeType::Directory);

    // Sorted by name; excluded dirs and plain dotfiles hidden
    assert_eq!(
        names(&tree),
        vec![".env.example", "README.md", "assets", "backend", "docs", "frontend"]
    );

    let frontend = tree.child("frontend").unwrap();
    assert_eq!(names(frontend), vec!["app", "package.json"]);

    let songs = tree
        .child("backend")
        .and_then(|b| b.child("app"))
        .and_then(|a| a.child("api"))
        .and_then(|a| a.child("songs.py"))
        .unwrap();
    assert_eq!(songs.node_type, NodeType::File);
    assert!(songs.size.unwrap() > 0);
}

#[test]
fn test_tree_max_depth_one() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let tree = services.explorer.get_project_structure(Some(1));

    let backend = tree.child("backend").unwrap();
    let children = backend.children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].node_type, NodeType::Truncated);

    // Files at depth 1 are listed normally
    assert_eq!(tree.child("README.md").unwrap().node_type, NodeType::File);
}

#[test]
fn test_tree_max_depth_zero() {
    let repo = TestRepo::music_app();
    let services = create_test_services(repo.path());

    let tree = services.explorer.get_project_structure(Some(0));
    let children = tree.children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].node_type, NodeType::Truncated);
}

#[test]
fn test_tree_empty_directory_has_no_children() {
    let repo = TestRepo::music_app();
    std::fs::create_dir_all(repo.path().join("empty")).unwrap();
    let services = create_test_services(repo.path());

    let tree = services.explorer.get_project_structure(Some(1));
    let empty = tree.child("empty").unwrap();
    assert!(empty.children.as_ref().unwrap().is_empty());
}

#[test]
fn test_tree_serializes_type_tag() {
    let repo = TestRepo::with_files(&[("a.py", "x")]);
    let services = create_test_services(repo.path());

    let tree = services.explorer.get_project_structure(None);
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["type"], "directory");
    assert_eq!(json["children"][0]["type"], "file");
    assert_eq!(json["children"][0]["size"], 1);
}

fn contains_name(node: &ProjectNode, name: &str) -> bool {
    node.name == name
        || node
            .children
            .iter()
            .flatten()
            .any(|child| contains_name(child, name))
}

#[cfg(unix)]
#[test]
fn test_tree_does_not_follow_symlinks() {
    use std::os::unix::fs::symlink;

    let outside = TestRepo::with_files(&[("id_rsa_secret.txt", "k")]);
    let repo = TestRepo::music_app();
    symlink(outside.path(), repo.path().join("escape")).unwrap();
    symlink(repo.path(), repo.path().join("a")).unwrap();
    symlink(repo.path(), repo.path().join("b")).unwrap();
    let services = create_test_services(repo.path());

    let baseline = TestRepo::music_app();
    let expected = create_test_services(baseline.path())
        .explorer
        .get_project_structure(Some(32));

    let tree = services.explorer.get_project_structure(Some(32));

    assert!(!contains_name(&tree, "id_rsa_secret.txt"));
    assert!(tree.child("escape").is_none());
    assert!(tree.child("a").is_none() && tree.child("b").is_none());
    assert_eq!(names(&tree), names(&expected));
    assert_eq!(tree.file_count(), expected.file_count());
}
