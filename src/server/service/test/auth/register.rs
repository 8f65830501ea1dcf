use super::*;

/// Tests that the first registered account becomes admin and later ones do not.
///
/// Expected: Ok with Role::Admin for the first user and Role::User for the second
#[tokio::test]
async fn first_user_becomes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let first = service
        .register(register_params("Alice", "alice@example.com", "password123"))
        .await?;
    let second = service
        .register(register_params("Bob", "bob@example.com", "password123"))
        .await?;

    assert_eq!(first.user.role, Role::Admin);
    assert_eq!(second.user.role, Role::User);
    assert_eq!(tokens.verify_access(&first.token)?.user_id()?, first.user.id);
    assert!(!tokens.verify_access(&second.token)?.is_admin());

    Ok(())
}

/// Tests that emails are trimmed and lowercased and passwords are hashed.
///
/// Expected: Ok with normalized email and an argon2 hash
#[tokio::test]
async fn normalizes_email_and_hashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let session = service
        .register(register_params("  Carol  ", " Carol@Example.COM ", "password123"))
        .await?;

    assert_eq!(session.user.name, "Carol");
    assert_eq!(session.user.email, "carol@example.com");
    assert!(session.user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests registration input validation.
///
/// Expected: Err(BadRequest) for missing fields, short name, short password and bad email
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let cases = [
        register_params("", "a@example.com", "password123"),
        register_params("Al", "a@example.com", "password123"),
        register_params("Alice", "not-an-email", "password123"),
        register_params("Alice", "a@example.com", "short"),
        register_params("Alice", "a@example.com", ""),
    ];

    for params in cases {
        let result = service.register(params).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests registering an email twice, differing only in case.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    service
        .register(register_params("Alice", "alice@example.com", "password123"))
        .await?;
    let result = service
        .register(register_params("Alice Two", "ALICE@example.com", "password456"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
