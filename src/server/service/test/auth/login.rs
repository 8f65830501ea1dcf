use super::*;
use crate::server::service::attendance::AttendanceService;

fn login_params(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests logging in with valid credentials.
///
/// Verifies that a token is issued and an open attendance record is created.
///
/// Expected: Ok with a token for the user and one open attendance record
#[tokio::test]
async fn logs_in_and_records_attendance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let registered = service
        .register(register_params("Alice", "alice@example.com", "password123"))
        .await?;

    let session = service
        .login(login_params("Alice@Example.com", "password123"))
        .await?;

    assert_eq!(session.user.id, registered.user.id);
    assert_eq!(tokens.verify_access(&session.token)?.user_id()?, registered.user.id);

    let records = AttendanceService::new(db)
        .get_for_user(registered.user.id)
        .await?;
    assert_eq!(records.len(), 1);
    assert!(records[0].logout_at.is_none());

    Ok(())
}

/// Tests logging in with a wrong password or an unknown email.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    service
        .register(register_params("Alice", "alice@example.com", "password123"))
        .await?;

    let wrong_password = service
        .login(login_params("alice@example.com", "password124"))
        .await;
    let unknown_email = service
        .login(login_params("nobody@example.com", "password123"))
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in without a password.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_email_and_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let result = service.login(login_params("alice@example.com", "")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
