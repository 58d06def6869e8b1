//! Integration tests for layered configuration

use super::test_utils::Sandbox;
use codesnap::config::{CodesnapConfig, ConfigLoader, WORKSPACE_CONFIG_FILE};

#[test]
fn test_workspace_file_changes_concat_lists() {
    let sandbox = Sandbox::new();
    sandbox.write(
        WORKSPACE_CONFIG_FILE,
        "[concat]\ninclude_dirs = [\"lib\", \"docs\"]\nexcluded_files = [\"secret.txt\"]\n",
    );

    let config = ConfigLoader::load(&sandbox.project).unwrap();

    assert_eq!(config.concat.include_dirs, vec!["lib", "docs"]);
    assert!(config.concat.file_exclusions().contains("secret.txt"));
    assert!(config.concat.file_exclusions().contains("00_project_concat.txt"));
    assert_eq!(config.tree, CodesnapConfig::default().tree);
}

#[test]
fn test_malformed_workspace_file_is_an_error() {
    let sandbox = Sandbox::new();
    sandbox.write(WORKSPACE_CONFIG_FILE, "[concat\nbroken = ");

    assert!(ConfigLoader::load(&sandbox.project).is_err());
}
