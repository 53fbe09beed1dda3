//! Command definitions contributed by packages
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "commands": [
//!     {
//!       "name": "foo-command",
//!       "description": "Runs foo",
//!       "func": "foo/bin/run",
//!       "options": [{ "name": "--option", "description": "Custom option" }],
//!       "examples": [{ "desc": "Run with option", "cmd": "foo-command --option" }]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command that a dispatcher can expose. Identity is the `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque handler reference; interpreted by the dispatcher, never by the resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<CommandExample>,
}

impl Command {
    /// Create a command with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            func: None,
            options: Vec::new(),
            examples: Vec::new(),
        }
    }
}

/// A flag accepted by a [`Command`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// A usage example shown in help output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandExample {
    pub desc: String,
    pub cmd: String,
}
