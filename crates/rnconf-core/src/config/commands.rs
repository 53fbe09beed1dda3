//! Command list merging

use rnconf_schema::Command;

/// Merge root commands over dependency commands.
///
/// A root command replaces the dependency command with the same name at
/// that command's position; other root commands are appended in order.
pub fn merge_commands(root_commands: &[Command], dependency_commands: Vec<Command>) -> Vec<Command> {
    let mut merged = dependency_commands;
    for command in root_commands {
        match merged.iter_mut().find(|existing| existing.name == command.name) {
            Some(existing) => *existing = command.clone(),
            None => merged.push(command.clone()),
        }
    }
    merged
}
