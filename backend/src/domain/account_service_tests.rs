//! Tests for the account service.

use std::sync::Arc;

use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then};

use super::*;
use crate::domain::ports::MockAccountRepository;
use crate::domain::{ErrorCode, Username};

fn stored_account(username: &str, password: &str) -> Account {
    let user = User::new(
        UserId::random(),
        Username::new(username).expect("valid username"),
    );
    Account::new(
        user,
        PasswordDigest::derive(password).expect("hashing succeeds"),
    )
}

fn credentials(username: &str, password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts(username, password).expect("valid credentials")
}

#[fixture]
fn registered() -> MockAccountRepository {
    let account = stored_account("test", "12345678");
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username()
        .returning(move |name| Ok((name == "test").then(|| account.clone())));
    repo
}

#[given("an account store holding user test")]
fn an_account_store_holding_user_test(
    registered: MockAccountRepository,
) -> AccountService<MockAccountRepository> {
    AccountService::new(Arc::new(registered))
}

#[then("the identity is bound to the username")]
fn the_identity_is_bound_to_the_username(result: Result<Identity, Error>) {
    let identity = result.expect("login succeeds");
    assert_eq!(identity.username().as_ref(), "test");
}

#[then("the login is rejected with the shared message")]
fn the_login_is_rejected_with_the_shared_message(result: Result<Identity, Error>) {
    let err = result.expect_err("login must fail");
    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn login_with_correct_password_binds_identity(registered: MockAccountRepository) {
    let service = an_account_store_holding_user_test(registered);
    let result = service.authenticate(&credentials("test", "12345678")).await;
    the_identity_is_bound_to_the_username(result);
}

#[rstest]
#[case::wrong_password("test", "wrong")]
#[case::unknown_user("nobody", "12345678")]
#[tokio::test]
async fn failed_logins_are_indistinguishable(
    registered: MockAccountRepository,
    #[case] username: &str,
    #[case] password: &str,
) {
    let service = an_account_store_holding_user_test(registered);
    let result = service.authenticate(&credentials(username, password)).await;
    the_login_is_rejected_with_the_shared_message(result);
}

#[rstest]
#[tokio::test]
async fn verify_reports_matches_without_side_effects(registered: MockAccountRepository) {
    let service = AccountService::new(Arc::new(registered));
    assert!(service.verify("test", "12345678").await.expect("lookup"));
    assert!(!service.verify("test", "1234567").await.expect("lookup"));
    assert!(!service.verify("ghost", "12345678").await.expect("lookup"));
}

#[tokio::test]
async fn register_stores_a_digest_not_the_password() {
    let mut repo = MockAccountRepository::new();
    repo.expect_insert()
        .withf(|account: &Account| {
            account.user().username().as_ref() == "test"
                && account.password().matches("12345678")
                && !format!("{:?}", account.password()).contains("12345678")
        })
        .times(1)
        .return_once(|_| Ok(()));
    let service = AccountService::new(Arc::new(repo));

    let registration = Registration::try_from_parts("test", "12345678").expect("valid");
    let user = service.register(&registration).await.expect("registered");
    assert_eq!(user.username().as_ref(), "test");
}

#[tokio::test]
async fn register_maps_duplicates() {
    let mut repo = MockAccountRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(AccountRepositoryError::duplicate_username("test")));
    let service = AccountService::new(Arc::new(repo));

    let registration = Registration::try_from_parts("test", "12345678").expect("valid");
    let err = service.register(&registration).await.expect_err("duplicate");
    assert_eq!(err.code(), ErrorCode::DuplicateUsername);
}

#[tokio::test]
async fn repository_failures_surface_as_internal_errors() {
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_username()
        .withf(|name: &str| name == "test")
        .times(1)
        .return_once(|_| Err(AccountRepositoryError::query("lock poisoned")));
    let service = AccountService::new(Arc::new(repo));

    let err = service
        .authenticate(&credentials("test", "12345678"))
        .await
        .expect_err("store failure");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

fn resuming_service(stored: &Account) -> AccountService<MockAccountRepository> {
    let stored = stored.clone();
    let mut repo = MockAccountRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok((stored.user().id() == id).then(|| stored.clone())));
    AccountService::new(Arc::new(repo))
}

#[tokio::test]
async fn resume_accepts_a_live_account() {
    let stored = stored_account("test", "12345678");
    let service = resuming_service(&stored);
    let claimed = Identity::for_user(stored.user());

    let resumed = service.resume(&claimed).await.expect("account still exists");
    assert_eq!(resumed, claimed);
}

#[rstest]
#[case::account_removed(None)]
#[case::name_reassigned(Some("other"))]
#[tokio::test]
async fn resume_rejects_identities_without_their_account(#[case] rename: Option<&str>) {
    let stored = stored_account("test", "12345678");
    let service = resuming_service(&stored);
    let claimed = match rename {
        Some(name) => Identity::new(
            stored.user().id().clone(),
            Username::new(name).expect("valid username"),
        ),
        None => Identity::for_user(stored_account("test", "12345678").user()),
    };

    let err = service.resume(&claimed).await.expect_err("stale identity");
    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), SESSION_EXPIRED_MESSAGE);
}
