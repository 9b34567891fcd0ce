use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::command::{is_command_available, node_command};

#[tokio::test]
async fn node_command_runs_from_project_root() {
    let output = node_command("ls").unwrap().output().await.expect("Failed to run ls.");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.lines().any(|entry| entry == "crates"));
}

#[tokio::test]
async fn node_command_drops_cargo_variables() {
    let output = node_command("env").unwrap().output().await.expect("Failed to run env.");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.lines().any(|line| line.starts_with("CARGO_")));
}

#[rstest]
#[case::in_path("ls", true)]
#[case::not_in_path("surely-not-an-installed-binary", false)]
#[case::missing_file_path("./no/such/binary", false)]
fn command_availability(#[case] executable: &str, #[case] expected: bool) {
    assert_eq!(is_command_available(executable), expected);
}
