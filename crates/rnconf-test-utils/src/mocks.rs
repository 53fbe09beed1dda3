//! Canned file sets written into a [`crate::TestProject`].

/// The framework package, declaring the built-in `ios` and `android` platforms.
pub const REACT_NATIVE: &[(&str, &str)] = &[
    ("node_modules/react-native/package.json", r#"{"version": "0.0.1"}"#),
    (
        "node_modules/react-native/react-native.config.json",
        r#"{
  "platforms": {
    "ios": {"implementation": "ios"},
    "android": {"implementation": "android"}
  }
}"#,
    ),
];

/// A third-party platform package adding `os`, backed by the iOS provider.
pub const PLATFORM_OS: &[(&str, &str)] = &[
    ("node_modules/react-native-os/package.json", "{}"),
    (
        "node_modules/react-native-os/react-native.config.yaml",
        "platforms:\n  os:\n    implementation: ios\n    npmPackageName: react-native-os\n",
    ),
];

/// A dependency with a podspec and no config file.
pub const PODSPEC_LIBRARY: &[(&str, &str)] = &[
    ("node_modules/react-native-test/package.json", "{}"),
    ("node_modules/react-native-test/ReactNativeTest.podspec", ""),
];
