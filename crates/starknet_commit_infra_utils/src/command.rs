use std::env;
use std::path::Path;

use tokio::process::Command;

use crate::path::project_path;

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

/// A command for a dev node process. It runs from the project root, is killed when its
/// [`tokio::process::Child`] is dropped, and does not inherit cargo's `CARGO_*` variables.
pub fn node_command(executable: &str) -> std::io::Result<Command> {
    let mut command = Command::new(executable);
    command.current_dir(project_path()?).kill_on_drop(true);
    for (key, _) in env::vars_os().filter(|(key, _)| key.to_string_lossy().starts_with("CARGO_")) {
        command.env_remove(key);
    }
    Ok(command)
}

/// Whether `executable` can be spawned: an existing file if it is a path, otherwise a file in one
/// of the `PATH` directories.
pub fn is_command_available(executable: &str) -> bool {
    let as_path = Path::new(executable);
    if as_path.components().count() > 1 {
        return as_path.is_file();
    }
    env::var_os("PATH")
        .is_some_and(|paths| env::split_paths(&paths).any(|dir| dir.join(executable).is_file()))
}
