use super::*;

/// Tests who may download a document.
///
/// Expected: Ok for uploader, access-list member and admin; AccessDenied for a stranger
#[tokio::test]
async fn allows_uploader_shared_users_and_admins() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_document_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (uploader, grantee, document) = factory::helpers::create_shared_document(db).await?;
    blobs.put(&document.storage_path, b"contents").await?;
    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let stranger = User::from_entity(factory::create_user(db).await?);

    let service = DocumentService::new(db, &blobs, &tokens);

    for user in [
        User::from_entity(uploader),
        User::from_entity(grantee),
        admin,
    ] {
        let content = service.download(&user, document.id).await?;
        assert_eq!(content.bytes, b"contents");
        assert_eq!(content.name, document.name);
    }

    let result = service.download(&stranger, document.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests downloading an unknown document.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_document() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_document_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);

    let service = DocumentService::new(db, &blobs, &tokens);
    let result = service.download(&user, 12).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
