use super::*;

/// Tests promoting and demoting a user by email.
///
/// Expected: Ok with the role changed each time
#[tokio::test]
async fn promotes_and_demotes() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db, &blobs, &tokens);
    let promoted = service.set_role(&user.email, Role::Admin).await?;
    assert!(promoted.is_admin());

    let demoted = service.set_role(&user.email, Role::User).await?;
    assert_eq!(demoted.role, Role::User);

    assert!(matches!(
        service.set_role("ghost@example.com", Role::Admin).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
