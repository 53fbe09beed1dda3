//! Native marker discovery for Android

use regex::Regex;
use rnconf_fs::{NormalizedPath, io};
use std::sync::LazyLock;
use walkdir::{DirEntry, WalkDir};

const MANIFEST_FILE: &str = "AndroidManifest.xml";
const MAIN_MANIFEST_SUFFIX: &str = "src/main/AndroidManifest.xml";
const BUILD_SCRIPTS: &[&str] = &["build.gradle", "build.gradle.kts"];
const SKIPPED_DIRS: &[&str] = &["build", "node_modules", "debug"];
const SOURCE_EXTENSIONS: &[&str] = &["java", "kt"];

static PACKAGE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+(\w+)[^{;]*?\b(?:ReactPackage|TurboReactPackage|BaseReactPackage)\b")
        .expect("valid regex")
});

static SOURCE_PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([\w.]+)\s*;?\s*$").expect("valid regex")
});

/// A class implementing `ReactPackage`, with the package its source declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageClass {
    pub name: String,
    pub source_package: Option<String>,
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

fn walk_files(root: &NormalizedPath) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root.to_native())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
}

/// Find the `AndroidManifest.xml` of a source directory.
///
/// A `src/main` manifest wins over any other; otherwise the first one found.
pub fn find_manifest(source_dir: &NormalizedPath) -> Option<NormalizedPath> {
    let manifests: Vec<NormalizedPath> = walk_files(source_dir)
        .filter(|entry| entry.file_name() == MANIFEST_FILE)
        .map(|entry| NormalizedPath::new(entry.path()))
        .collect();

    manifests
        .iter()
        .find(|path| path.as_str().ends_with(MAIN_MANIFEST_SUFFIX))
        .or_else(|| manifests.first())
        .cloned()
}

/// Read the first Gradle build script present in `dir`.
pub fn read_build_script(dir: &NormalizedPath) -> Option<String> {
    BUILD_SCRIPTS
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .and_then(|path| io::read_text(&path).ok())
}

/// Find the first class implementing `ReactPackage` in Java or Kotlin sources.
pub fn find_package_class(source_dir: &NormalizedPath) -> Option<PackageClass> {
    walk_files(source_dir)
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        })
        .find_map(|entry| {
            let path = NormalizedPath::new(entry.path());
            let source = io::read_text(&path).ok()?;
            let name = PACKAGE_CLASS.captures(&source)?[1].to_string();
            tracing::trace!(%path, class = %name, "Found ReactPackage implementation");
            Some(PackageClass {
                name,
                source_package: SOURCE_PACKAGE
                    .captures(&source)
                    .map(|caps| caps[1].to_string()),
            })
        })
}
