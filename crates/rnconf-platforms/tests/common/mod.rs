#![allow(dead_code)]

use async_trait::async_trait;
use rnconf_platforms::{CommandOutput, CommandRunner, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Answers `xcodebuild -list -json -project <path>` from canned output keyed
/// by the project path, and records every invocation.
#[derive(Default)]
pub struct FakeXcodebuild {
    outputs: HashMap<String, CommandOutput>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeXcodebuild {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: impl Into<String>, stdout: &str) -> Self {
        self.outputs.insert(
            project.into(),
            CommandOutput {
                success: true,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    pub fn with_failure(mut self, project: impl Into<String>, stderr: &str) -> Self {
        self.outputs.insert(
            project.into(),
            CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeXcodebuild {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        assert_eq!(program, "xcodebuild");
        self.calls.lock().unwrap().push(args.to_vec());

        let project = args.last().cloned().unwrap_or_default();
        Ok(self.outputs.get(&project).cloned().unwrap_or(CommandOutput {
            success: true,
            stdout: "{}".to_string(),
            stderr: String::new(),
        }))
    }
}
