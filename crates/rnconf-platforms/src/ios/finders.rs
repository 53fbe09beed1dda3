//! Native marker discovery for iOS
//!
//! Every finder walks in lexicographic order so the same tree always yields
//! the same result.

use rnconf_fs::{NormalizedPath, io};
use walkdir::{DirEntry, WalkDir};

use super::xcode::XcodeProject;
use crate::Result;

/// Directories never searched for a Podfile
const PODFILE_EXCLUDED_DIRS: &[&str] = &["node_modules", "Pods", "Carthage", "vendor", "android"];

/// Find the podspec of a package.
///
/// Prefers `<dirname>.podspec`, otherwise the first podspec by name.
pub fn find_podspec(folder: &NormalizedPath) -> Result<Option<NormalizedPath>> {
    if !folder.is_dir() {
        return Ok(None);
    }

    let podspecs: Vec<String> = io::read_dir_sorted(folder)?
        .into_iter()
        .filter(|name| name.ends_with(".podspec"))
        .collect();

    let preferred = folder.file_name().map(|name| format!("{name}.podspec"));
    let chosen = preferred
        .filter(|name| podspecs.contains(name))
        .or_else(|| podspecs.into_iter().next());

    Ok(chosen.map(|name| folder.join(&name)))
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || PODFILE_EXCLUDED_DIRS.contains(&name))
}

/// Find the first `Podfile` below `root`.
pub fn find_podfile(root: &NormalizedPath) -> Option<NormalizedPath> {
    let mut podfiles = WalkDir::new(root.to_native())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == "Podfile")
        .map(|entry| NormalizedPath::new(entry.path()));

    let first = podfiles.next();
    if let Some(podfile) = &first
        && podfiles.next().is_some()
    {
        tracing::debug!(%podfile, "Multiple Podfiles found, using the first one");
    }
    first
}

/// Find the Xcode project in a source directory, preferring workspaces.
pub fn find_xcode_project(source_dir: &NormalizedPath) -> Result<Option<XcodeProject>> {
    if !source_dir.is_dir() {
        return Ok(None);
    }

    let names = io::read_dir_sorted(source_dir)?;
    let pick = |extension: &str| names.iter().find(|name| name.ends_with(extension));

    let project = match pick(".xcworkspace") {
        Some(name) => Some((name, true)),
        None => pick(".xcodeproj").map(|name| (name, false)),
    };

    Ok(project.map(|(name, is_workspace)| XcodeProject {
        name: name.clone(),
        path: source_dir.clone(),
        is_workspace,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_podspec_prefers_package_named_podspec() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("react-native-test");
        fs::create_dir(&pkg).unwrap();
        fs::write(pkg.join("Another.podspec"), "").unwrap();
        fs::write(pkg.join("react-native-test.podspec"), "").unwrap();

        let found = find_podspec(&NormalizedPath::new(&pkg)).unwrap().unwrap();
        assert_eq!(found.file_name(), Some("react-native-test.podspec"));
    }

    #[test]
    fn find_podspec_falls_back_to_first_by_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("B.podspec"), "").unwrap();
        fs::write(temp.path().join("A.podspec"), "").unwrap();

        let found = find_podspec(&NormalizedPath::new(temp.path())).unwrap().unwrap();
        assert_eq!(found.file_name(), Some("A.podspec"));
    }

    #[test]
    fn find_podspec_none_without_podspec() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        assert_eq!(find_podspec(&NormalizedPath::new(temp.path())).unwrap(), None);
    }

    #[test]
    fn find_podfile_skips_excluded_directories() {
        let temp = TempDir::new().unwrap();
        for dir in ["node_modules/lib/ios", "Pods", "ios"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
            fs::write(temp.path().join(dir).join("Podfile"), "").unwrap();
        }

        let podfile = find_podfile(&NormalizedPath::new(temp.path())).unwrap();
        assert!(podfile.as_str().ends_with("/ios/Podfile"));
    }

    #[test]
    fn find_xcode_project_prefers_workspace() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("App.xcodeproj")).unwrap();
        fs::create_dir(temp.path().join("App.xcworkspace")).unwrap();

        let project = find_xcode_project(&NormalizedPath::new(temp.path()))
            .unwrap()
            .unwrap();
        assert_eq!(project.name, "App.xcworkspace");
        assert!(project.is_workspace);
    }

    #[test]
    fn find_xcode_project_is_lexicographic() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Zeta.xcodeproj")).unwrap();
        fs::create_dir(temp.path().join("Alpha.xcodeproj")).unwrap();

        let project = find_xcode_project(&NormalizedPath::new(temp.path()))
            .unwrap()
            .unwrap();
        assert_eq!(project.name, "Alpha.xcodeproj");
        assert!(!project.is_workspace);
    }
}
