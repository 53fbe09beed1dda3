//! Well-known file and directory names.

use std::path::Path;

/// Files and directories the resolver looks for inside a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile {
    /// The npm manifest (`package.json`)
    PackageJson,
    /// The installed packages directory (`node_modules`)
    NodeModules,
    /// JSON package config (`react-native.config.json`)
    ConfigJson,
    /// TOML package config (`react-native.config.toml`)
    ConfigToml,
    /// YAML package config (`react-native.config.yaml`)
    ConfigYaml,
    /// YAML package config, short extension (`react-native.config.yml`)
    ConfigYml,
}

impl ProjectFile {
    /// Config file names in lookup order; the first one present wins.
    pub const CONFIG_CANDIDATES: [ProjectFile; 4] = [
        ProjectFile::ConfigJson,
        ProjectFile::ConfigToml,
        ProjectFile::ConfigYaml,
        ProjectFile::ConfigYml,
    ];

    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::NodeModules => "node_modules",
            Self::ConfigJson => "react-native.config.json",
            Self::ConfigToml => "react-native.config.toml",
            Self::ConfigYaml => "react-native.config.yaml",
            Self::ConfigYml => "react-native.config.yml",
        }
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
