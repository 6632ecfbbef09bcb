//! Unit tests for session configuration parsing.

use std::collections::HashMap;
use std::io::Write;

use mockable::MockEnv;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use super::*;

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temporary key file");
    file.write_all(&vec![b'a'; len]).expect("write key bytes");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path()
        .to_str()
        .expect("temporary path should be valid UTF-8")
        .to_owned()
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn release_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

fn release_vars(key: &NamedTempFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, path_of(key)),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

#[rstest]
fn release_accepts_complete_configuration(release_key: NamedTempFile) {
    let env = mock_env(release_vars(&release_key));
    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("release settings load");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
    assert_eq!(settings.ttl, Duration::hours(2));
    assert_eq!(
        key_fingerprint(&settings.key),
        key_fingerprint(&Key::derive_from(&[b'a'; SESSION_KEY_MIN_LEN]))
    );
}

#[rstest]
#[case::cookie_secure(COOKIE_SECURE_ENV)]
#[case::same_site(SAMESITE_ENV)]
#[case::allow_ephemeral(ALLOW_EPHEMERAL_ENV)]
fn release_rejects_missing_toggles(release_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&release_key);
    vars.remove(missing);
    let env = mock_env(vars);

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected missing {missing} to fail");
    };
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case("maybe")]
#[case("")]
fn release_rejects_invalid_cookie_secure(release_key: NamedTempFile, #[case] value: &str) {
    let mut vars = release_vars(&release_key);
    vars.insert(COOKIE_SECURE_ENV, value.to_owned());
    let env = mock_env(vars);

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected invalid cookie secure to fail");
    };
    assert!(matches!(
        err,
        SessionConfigError::InvalidEnv {
            name: COOKIE_SECURE_ENV,
            ..
        }
    ));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = key_file(SESSION_KEY_MIN_LEN - 1);
    let env = mock_env(release_vars(&short));

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected short key to fail");
    };
    assert!(matches!(err, SessionConfigError::KeyTooShort { .. }));
}

#[rstest]
fn release_rejects_ephemeral_keys(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "1".to_owned());
    let env = mock_env(vars);

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected ephemeral keys to be refused");
    };
    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_requires_a_readable_key(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/bloglist/session_key".to_owned());
    let env = mock_env(vars);

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected unreadable key to fail");
    };
    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn release_rejects_insecure_same_site_none(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());
    let env = mock_env(vars);

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected SameSite=None without Secure to fail");
    };
    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn debug_falls_back_to_defaults() {
    let env = mock_env(HashMap::from([(
        KEY_FILE_ENV,
        "/nonexistent/bloglist/session_key".to_owned(),
    )]));

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
    assert_eq!(settings.ttl, Duration::hours(2));
}

#[rstest]
#[case("0")]
#[case("-3")]
#[case("soon")]
fn ttl_must_be_positive_hours(release_key: NamedTempFile, #[case] value: &str) {
    let mut vars = release_vars(&release_key);
    vars.insert(TTL_HOURS_ENV, value.to_owned());
    let env = mock_env(vars);

    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("expected invalid TTL to fail");
    };
    assert!(matches!(
        err,
        SessionConfigError::InvalidEnv {
            name: TTL_HOURS_ENV,
            ..
        }
    ));
}

#[rstest]
fn ttl_override_is_applied(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(TTL_HOURS_ENV, "12".to_owned());
    let env = mock_env(vars);

    let settings = session_settings_from_env(&env, BuildMode::Release).expect("settings");
    assert_eq!(settings.ttl, Duration::hours(12));
}

#[rstest]
fn fingerprints_distinguish_keys() {
    let first = key_fingerprint(&Key::derive_from(&[b'a'; 64]));
    let second = key_fingerprint(&Key::derive_from(&[b'b'; 64]));

    assert_eq!(first.len(), FINGERPRINT_BYTES * 2);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(first, second);
}

#[rstest]
fn debug_replaces_short_keys_with_ephemeral_ones() {
    let short = key_file(8);
    let env = mock_env(HashMap::from([(KEY_FILE_ENV, path_of(&short))]));

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug settings");
    assert_ne!(
        key_fingerprint(&settings.key),
        key_fingerprint(&Key::derive_from(&[b'a'; SESSION_KEY_MIN_LEN]))
    );
}
