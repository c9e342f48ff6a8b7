use confess_build::error::AppError;
use confess_build::profile::{self, PROFILES};

#[test]
fn lookup_ignores_case() {
    let lower = profile::lookup(Some("bot")).expect("bot should resolve");
    for name in ["BOT", "Bot", "bOt"] {
        let found = profile::lookup(Some(name)).expect("casing should not matter");
        assert_eq!(found, lower);
    }
    assert_eq!(lower.target, "confess");
    assert_eq!(lower.dockerfile(), "./Dockerfile.worker");
}

#[test]
fn missing_name_is_invalid() {
    let err = profile::lookup(None).expect_err("no profile should fail");
    assert!(matches!(err, AppError::InvalidProfile { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unknown_name_lists_choices_in_order() {
    let err = profile::lookup(Some("staging")).expect_err("staging is not a profile");
    assert!(matches!(err, AppError::InvalidProfile { .. }));
    assert_eq!(err.to_string(), "invalid profile. choose: bot, web");
}

#[test]
fn from_args_skips_program_name() {
    let web = profile::from_args(["confess-build", "WEB"]).expect("web should resolve");
    assert_eq!(web.target, "confess-web");

    let err = profile::from_args(["confess-build"]).expect_err("no profile should fail");
    assert!(matches!(err, AppError::InvalidProfile { .. }));

    let empty: [&str; 0] = [];
    assert!(profile::from_args(empty).is_err());
}

#[test]
fn repeated_lookups_leave_table_untouched() {
    let before: Vec<_> = PROFILES.to_vec();
    for _ in 0..3 {
        let first = profile::lookup(Some("web")).expect("web should resolve");
        let second = profile::lookup(Some("web")).expect("web should resolve");
        assert!(std::ptr::eq(first, second));
        let _ = profile::lookup(Some("nope"));
    }
    assert_eq!(PROFILES, before.as_slice());
    assert_eq!(profile::names().collect::<Vec<_>>(), ["bot", "web"]);
}
