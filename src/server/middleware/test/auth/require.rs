use super::*;

/// Tests a valid token for an existing user.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer(&tokens.issue_access(&user)?);

    let authenticated = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}

/// Tests requests without a usable Authorization header.
///
/// Expected: Err(AuthError::MissingToken) for no header, another scheme, or an empty token
#[tokio::test]
async fn rejects_missing_or_malformed_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let mut empty = HeaderMap::new();
    empty.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));

    for headers in [HeaderMap::new(), basic, empty] {
        let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    Ok(())
}

/// Tests a garbage token and a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);
    let foreign = TokenService::new(
        "some-other-secret",
        Duration::from_secs(3600),
        Url::parse("http://localhost:3010").unwrap(),
    )
    .issue_access(&user)?;

    for token in ["not-a-jwt", foreign.as_str()] {
        let headers = bearer(token);
        let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    Ok(())
}

/// Tests a signed storage token presented as an access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_storage_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let headers = bearer(&tokens.sign_blob(
        "documents/a.txt",
        "text/plain",
        Duration::from_secs(60),
    )?);
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted afterwards.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer(&tokens.issue_access(&user)?);
    UserRepository::new(db).delete(user.id).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}
