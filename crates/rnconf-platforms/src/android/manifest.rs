//! AndroidManifest.xml and Gradle build script parsing
//!
//! These are text scans, not full XML or Groovy parsers. They read the few
//! attributes the config needs and ignore everything else.

use regex::Regex;
use std::sync::LazyLock;

const MAIN_ACTION: &str = "android.intent.action.MAIN";

static MANIFEST_PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<manifest\b[^>]*?\bpackage\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

static ACTIVITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<activity\b([^>]*?)(?:/>|>(.*?)</activity>)").expect("valid regex")
});

static ANDROID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bandroid:name\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

static GRADLE_NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*namespace\s*=?\s*["']([^"']+)["']"#).expect("valid regex")
});

static GRADLE_APPLICATION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*applicationId\s*=?\s*["']([^"']+)["']"#).expect("valid regex")
});

/// The `package` attribute of the `<manifest>` element.
pub fn manifest_package(manifest: &str) -> Option<String> {
    MANIFEST_PACKAGE
        .captures(manifest)
        .map(|caps| caps[1].to_string())
}

/// Name of the first activity that handles `android.intent.action.MAIN`.
pub fn main_activity(manifest: &str) -> Option<String> {
    ACTIVITY
        .captures_iter(manifest)
        .filter(|caps| caps.get(2).is_some_and(|body| body.as_str().contains(MAIN_ACTION)))
        .find_map(|caps| {
            ANDROID_NAME
                .captures(&caps[1])
                .map(|name| name[1].to_string())
        })
}

/// The `namespace` declared in a Gradle build script.
pub fn gradle_namespace(build_script: &str) -> Option<String> {
    GRADLE_NAMESPACE
        .captures(build_script)
        .map(|caps| caps[1].to_string())
}

/// The `applicationId` declared in a Gradle build script.
pub fn gradle_application_id(build_script: &str) -> Option<String> {
    GRADLE_APPLICATION_ID
        .captures(build_script)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const APP_MANIFEST: &str = r#"
      <manifest xmlns:android="http://schemas.android.com/apk/res/android"
        xmlns:tools="http://schemas.android.com/tools"
        package="com.coinbase.android">
        <application android:name=".MainApplication">
          <activity android:name=".SplashActivity" android:exported="false" />
          <activity android:name=".MainActivity">
            <intent-filter>
              <action android:name="android.intent.action.MAIN" />
              <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
          </activity>
        </application>
      </manifest>
    "#;

    #[test]
    fn reads_manifest_package() {
        assert_eq!(
            manifest_package(APP_MANIFEST).as_deref(),
            Some("com.coinbase.android")
        );
    }

    #[test]
    fn manifest_without_package_attribute() {
        let manifest = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android"></manifest>"#;
        assert_eq!(manifest_package(manifest), None);
    }

    #[test]
    fn main_activity_skips_activities_without_main_action() {
        assert_eq!(main_activity(APP_MANIFEST).as_deref(), Some(".MainActivity"));
    }

    #[test]
    fn main_activity_none_when_no_launcher() {
        let manifest = r#"<manifest package="a.b"><activity android:name=".Other"></activity></manifest>"#;
        assert_eq!(main_activity(manifest), None);
    }

    #[rstest]
    #[case::groovy("android {\n    namespace \"com.example.lib\"\n}", Some("com.example.lib"))]
    #[case::kotlin_dsl("android {\n    namespace = \"com.example.lib\"\n}", Some("com.example.lib"))]
    #[case::single_quotes("android {\n  namespace 'com.example.lib'\n}", Some("com.example.lib"))]
    #[case::absent("android {\n  compileSdk 34\n}", None)]
    fn reads_gradle_namespace(#[case] script: &str, #[case] expected: Option<&str>) {
        assert_eq!(gradle_namespace(script).as_deref(), expected);
    }

    #[test]
    fn reads_gradle_application_id() {
        let script = "android {\n    defaultConfig {\n        applicationId \"com.example.app\"\n    }\n}";
        assert_eq!(
            gradle_application_id(script).as_deref(),
            Some("com.example.app")
        );
    }
}
