use rnconf_fs::NormalizedPath;
use rstest::rstest;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("foo\\bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("foo/bar");
    let joined = base.join("baz");
    assert_eq!(joined.as_str(), "foo/bar/baz");
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("foo/bar/baz");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "foo/bar");
}

#[test]
fn test_parent_of_top_level_is_root() {
    let path = NormalizedPath::new("/tmp");
    assert_eq!(path.parent().unwrap().as_str(), "/");
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("pkg/ReactNativeTest.podspec");
    assert_eq!(path.file_name(), Some("ReactNativeTest.podspec"));
    assert_eq!(path.extension(), Some("podspec"));
}

#[test]
fn test_hidden_file_has_no_extension() {
    let path = NormalizedPath::new("pkg/.gitignore");
    assert_eq!(path.extension(), None);
}

#[rstest]
#[case("/tmp/app", "./ios2", "/tmp/app/ios2")]
#[case("/tmp/app", "ios2", "/tmp/app/ios2")]
#[case("/tmp/app", "../shared/lib", "/tmp/shared/lib")]
#[case("/tmp/app", "/opt/ios", "/opt/ios")]
#[case("/tmp/app", "C:\\native\\ios", "C:/native/ios")]
#[case("/tmp/app/", "native-libs/./local-lib", "/tmp/app/native-libs/local-lib")]
fn test_resolve(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    let resolved = NormalizedPath::new(base).resolve(segment);
    assert_eq!(resolved.as_str(), expected);
}

#[rstest]
#[case("/tmp/app", true)]
#[case("C:/Users/app", true)]
#[case("//server/share", true)]
#[case("./ios", false)]
#[case("ios", false)]
fn test_is_absolute(#[case] path: &str, #[case] expected: bool) {
    assert_eq!(NormalizedPath::new(path).is_absolute(), expected);
}

#[test]
fn test_serializes_as_plain_string() {
    let path = NormalizedPath::new("/tmp/app/ios");
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, "\"/tmp/app/ios\"");

    let back: NormalizedPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}
