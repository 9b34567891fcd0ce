use std::path::Path;

use pretty_assertions::assert_eq;

use crate::path::{project_path, resolve_project_path};

#[test]
fn project_root_contains_crates_dir() {
    let root = project_path().unwrap();
    assert!(root.join("crates").is_dir());
    assert!(root.join("Cargo.toml").is_file());
}

#[test]
fn relative_path_is_joined_onto_project_root() {
    let path = resolve_project_path(Path::new("crates/starknet_commit_infra_utils")).unwrap();

    assert!(path.is_absolute());
    assert!(path.join("Cargo.toml").is_file());
}

#[test]
fn missing_relative_path_still_resolves() {
    let path = resolve_project_path(Path::new("starknet/target/dev")).unwrap();
    assert_eq!(path, project_path().unwrap().join("starknet/target/dev"));
}

#[test]
fn absolute_path_is_kept() {
    let absolute = Path::new("/opt/artifacts");
    assert_eq!(resolve_project_path(absolute).unwrap(), absolute);
}
