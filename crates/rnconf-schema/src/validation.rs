//! Shape validation for untyped package configuration
//!
//! Validation never throws: every mismatch is collected into a
//! [`ValidationReport`] so callers decide whether a bad document is fatal
//! (root project) or only a warning (third-party dependency).
//!
//! Unknown top-level keys are ignored so newer config files keep loading.
//! Platform entries are opaque to the resolver, but the fields listed in
//! [`PLATFORM_FIELDS`] are type checked wherever a platform entry appears.

use serde_json::{Map, Value};
use std::fmt;

/// Which kind of document is being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    /// A dependency's own config file
    Dependency,
    /// The root project's config file; root-only sections are checked too
    Project,
}

/// A single shape mismatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending value, e.g. `dependency.platforms.ios.configurations`
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.path, self.message)
    }
}

/// All errors found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Expected type of a known platform field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    Bool,
    StringArray,
    ScriptPhases,
    /// A string or `null`
    NullableString,
    /// An array of strings or `null`
    NullableStringArray,
}

impl Shape {
    fn describe(self) -> &'static str {
        match self {
            Shape::String => "a string",
            Shape::Bool => "a boolean",
            Shape::StringArray => "an array of strings",
            Shape::ScriptPhases => "an array of script phase objects",
            Shape::NullableString => "a string or null",
            Shape::NullableStringArray => "an array of strings or null",
        }
    }
}

/// Platform fields whose types are known across the built-in platforms.
pub const PLATFORM_FIELDS: &[(&str, Shape)] = &[
    ("sourceDir", Shape::String),
    ("podspecPath", Shape::String),
    ("version", Shape::String),
    ("configurations", Shape::StringArray),
    ("scriptPhases", Shape::ScriptPhases),
    ("automaticPodsInstallation", Shape::Bool),
    ("watchModeCommandParams", Shape::StringArray),
    ("assets", Shape::StringArray),
    ("packageImportPath", Shape::String),
    ("packageInstance", Shape::String),
    ("dependencyConfiguration", Shape::String),
    ("buildTypes", Shape::StringArray),
    ("libraryName", Shape::NullableString),
    ("componentDescriptors", Shape::NullableStringArray),
    ("cmakeListsPath", Shape::NullableString),
    ("appName", Shape::String),
    ("manifestPath", Shape::String),
    ("packageName", Shape::String),
    ("applicationId", Shape::String),
    ("mainActivity", Shape::String),
    ("unstable_reactLegacyComponentNames", Shape::StringArray),
];

const SCRIPT_PHASE_STRING_FIELDS: &[&str] = &["execution_position", "shell_path", "dependency_file"];
const SCRIPT_PHASE_LIST_FIELDS: &[&str] = &[
    "input_files",
    "output_files",
    "input_file_lists",
    "output_file_lists",
];

/// Validate an untyped config document.
pub fn validate(raw: &Value, kind: ConfigKind) -> ValidationReport {
    let mut validator = Validator::default();
    validator.document(raw, kind);
    ValidationReport {
        errors: validator.errors,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn mismatch(&mut self, path: &str, expected: &str, actual: &Value) {
        self.error(
            path,
            format!("must be {expected}, found {}", type_name(actual)),
        );
    }

    fn object<'a>(&mut self, path: &str, value: &'a Value) -> Option<&'a Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.mismatch(path, "an object", other);
                None
            }
        }
    }

    fn string(&mut self, path: &str, value: &Value) {
        if !value.is_string() {
            self.mismatch(path, "a string", value);
        }
    }

    fn optional_string(&mut self, map: &Map<String, Value>, path: &str, key: &str) {
        if let Some(value) = map.get(key) {
            self.string(&child(path, key), value);
        }
    }

    fn required_string(&mut self, map: &Map<String, Value>, path: &str, key: &str) {
        match map.get(key) {
            Some(value) => self.string(&child(path, key), value),
            None => self.error(&child(path, key), "is required"),
        }
    }

    fn string_array(&mut self, path: &str, value: &Value) {
        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        self.mismatch(&format!("{path}[{index}]"), "a string", item);
                    }
                }
            }
            other => self.mismatch(path, "an array of strings", other),
        }
    }

    /// Each element must be an object; returns `(element path, element)`.
    fn object_array<'a>(
        &mut self,
        path: &str,
        value: &'a Value,
    ) -> Vec<(String, &'a Map<String, Value>)> {
        let Value::Array(items) = value else {
            self.mismatch(path, "an array", value);
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let item_path = format!("{path}[{index}]");
                self.object(&item_path, item).map(|map| (item_path, map))
            })
            .collect()
    }

    fn document(&mut self, raw: &Value, kind: ConfigKind) {
        let Some(root) = self.object("", raw) else {
            return;
        };

        if let Some(dependency) = root.get("dependency") {
            self.dependency_section(dependency);
        }
        if let Some(platforms) = root.get("platforms") {
            self.platform_declarations(platforms);
        }
        if let Some(commands) = root.get("commands") {
            self.commands(commands);
        }

        if kind == ConfigKind::Dependency {
            return;
        }

        if let Some(project) = root.get("project")
            && let Some(map) = self.object("project", project)
        {
            for (platform, entry) in map {
                self.platform_entry(&child("project", platform), entry, true);
            }
        }
        if let Some(path) = root.get("reactNativePath") {
            self.string("reactNativePath", path);
        }
        if let Some(assets) = root.get("assets") {
            self.string_array("assets", assets);
        }
        if let Some(dependencies) = root.get("dependencies")
            && let Some(map) = self.object("dependencies", dependencies)
        {
            for (name, entry) in map {
                self.user_dependency(&child("dependencies", name), entry);
            }
        }
    }

    fn dependency_section(&mut self, value: &Value) {
        let Some(map) = self.object("dependency", value) else {
            return;
        };

        for (key, entry) in map {
            let path = child("dependency", key);
            match key.as_str() {
                "platforms" => self.platform_params(&path, entry),
                _ => self.error(&path, "is not allowed"),
            }
        }
    }

    fn user_dependency(&mut self, path: &str, value: &Value) {
        let Some(map) = self.object(path, value) else {
            return;
        };

        self.optional_string(map, path, "root");
        if let Some(platforms) = map.get("platforms") {
            self.platform_params(&child(path, "platforms"), platforms);
        }
    }

    /// `{platform: object | null}`
    fn platform_params(&mut self, path: &str, value: &Value) {
        if let Some(map) = self.object(path, value) {
            for (platform, entry) in map {
                self.platform_entry(&child(path, platform), entry, true);
            }
        }
    }

    fn platform_entry(&mut self, path: &str, value: &Value, nullable: bool) {
        if nullable && value.is_null() {
            return;
        }
        let Some(map) = self.object(path, value) else {
            return;
        };

        for (field, shape) in PLATFORM_FIELDS {
            let Some(field_value) = map.get(*field) else {
                continue;
            };
            let field_path = child(path, field);
            match shape {
                Shape::String => self.string(&field_path, field_value),
                Shape::StringArray => self.string_array(&field_path, field_value),
                Shape::Bool if !field_value.is_boolean() => {
                    self.mismatch(&field_path, shape.describe(), field_value)
                }
                Shape::Bool => {}
                Shape::ScriptPhases => self.script_phases(&field_path, field_value),
                Shape::NullableString | Shape::NullableStringArray if field_value.is_null() => {}
                Shape::NullableString => {
                    if !field_value.is_string() {
                        self.mismatch(&field_path, shape.describe(), field_value)
                    }
                }
                Shape::NullableStringArray => self.string_array(&field_path, field_value),
            }
        }
    }

    fn script_phases(&mut self, path: &str, value: &Value) {
        for (phase_path, phase) in self.object_array(path, value) {
            self.required_string(phase, &phase_path, "name");
            if !phase.contains_key("path") && !phase.contains_key("script") {
                self.error(&phase_path, "must define either \"path\" or \"script\"");
            }
            self.optional_string(phase, &phase_path, "path");
            self.optional_string(phase, &phase_path, "script");
            for key in SCRIPT_PHASE_STRING_FIELDS {
                self.optional_string(phase, &phase_path, key);
            }
            for key in SCRIPT_PHASE_LIST_FIELDS {
                if let Some(list) = phase.get(*key) {
                    self.string_array(&child(&phase_path, key), list);
                }
            }
            if let Some(flag) = phase.get("show_env_vars_in_log")
                && !flag.is_boolean()
            {
                self.mismatch(&child(&phase_path, "show_env_vars_in_log"), "a boolean", flag);
            }
        }
    }

    fn platform_declarations(&mut self, value: &Value) {
        let Some(map) = self.object("platforms", value) else {
            return;
        };

        for (name, declaration) in map {
            let path = child("platforms", name);
            if let Some(declaration) = self.object(&path, declaration) {
                self.required_string(declaration, &path, "implementation");
                self.optional_string(declaration, &path, "npmPackageName");
            }
        }
    }

    fn commands(&mut self, value: &Value) {
        for (path, command) in self.object_array("commands", value) {
            self.required_string(command, &path, "name");
            self.optional_string(command, &path, "description");
            self.optional_string(command, &path, "func");

            if let Some(options) = command.get("options") {
                for (option_path, option) in self.object_array(&child(&path, "options"), options) {
                    self.required_string(option, &option_path, "name");
                    self.optional_string(option, &option_path, "description");
                }
            }
            if let Some(examples) = command.get("examples") {
                for (example_path, example) in
                    self.object_array(&child(&path, "examples"), examples)
                {
                    self.required_string(example, &example_path, "desc");
                    self.required_string(example, &example_path, "cmd");
                }
            }
        }
    }
}
