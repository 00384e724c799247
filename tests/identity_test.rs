//! Tests for invocation-identity derivation

use std::env;
use std::path::{Path, PathBuf};

use rstest::rstest;
use subcommander::identity::Identity;
use subcommander::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case("mytool", "MYTOOL")]
#[case("/usr/local/bin/mytool", "MYTOOL")]
#[case("MyTool", "MYTOOL")]
#[case("my tool", "MY_TOOL")]
fn given_invoked_name_when_deriving_then_env_vars_follow_convention(
    #[case] argv0: &str,
    #[case] prefix: &str,
) {
    // Act
    let id = Identity::derive(argv0, Path::new("/home/u"));

    // Assert
    assert_eq!(id.exec_path_env_var, format!("{prefix}_EXEC_PATH"));
    assert_eq!(id.context_env_var, format!("{prefix}_CONTEXT"));
    assert_eq!(id.main_env_var, format!("{prefix}_MAIN"));
    assert_eq!(id.name_env_var, format!("{prefix}_NAME"));
}

#[test]
fn given_symlinked_path_when_deriving_then_main_name_is_basename() {
    // Act
    let id = Identity::derive("/opt/tools/bin/widgetctl", Path::new("/home/u"));

    // Assert
    assert_eq!(id.main_name, "widgetctl");
    assert_eq!(id.rc_file, PathBuf::from("/home/u/.widgetctlrc"));
    assert_eq!(id.context_filename(), ".widgetctl.context");
}

#[test]
fn given_identity_when_exporting_then_main_and_name_vars_are_set() {
    // Arrange - name unique to this test to avoid env collisions
    let id = Identity::derive("identityexporttool", Path::new("/home/u"));

    // Act
    id.export();

    // Assert
    assert_eq!(
        env::var("IDENTITYEXPORTTOOL_MAIN").unwrap(),
        "identityexporttool"
    );
    assert_eq!(
        env::var("IDENTITYEXPORTTOOL_NAME").unwrap(),
        "identityexporttool"
    );
}
