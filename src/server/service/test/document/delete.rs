use super::*;

/// Tests deleting a document as its uploader.
///
/// Expected: Ok with blob and record removed
#[tokio::test]
async fn deletes_blob_and_record() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_document_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let owner = User::from_entity(factory::create_user(db).await?);
    let document = factory::create_document(db, owner.id).await?;
    blobs.put(&document.storage_path, b"bytes").await?;

    let service = DocumentService::new(db, &blobs, &tokens);
    service.delete(&owner, document.id).await?;

    assert!(!blobs.exists(&document.storage_path).await?);
    assert!(DocumentRepository::new(db)
        .find_by_id(document.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a document whose blob is already gone.
///
/// Expected: Ok with the record removed
#[tokio::test]
async fn ignores_missing_blob() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_document_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let owner = User::from_entity(factory::create_user(db).await?);
    let document = factory::create_document(db, owner.id).await?;

    let service = DocumentService::new(db, &blobs, &tokens);
    service.delete(&owner, document.id).await?;

    assert!(DocumentRepository::new(db)
        .find_by_id(document.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that only the uploader or an admin may delete.
///
/// Expected: AccessDenied for another user, Ok for an admin
#[tokio::test]
async fn restricts_delete_to_owner_or_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_document_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (_, grantee, document) = factory::helpers::create_shared_document(db).await?;
    let admin = User::from_entity(factory::user::create_admin(db).await?);

    let service = DocumentService::new(db, &blobs, &tokens);
    let result = service
        .delete(&User::from_entity(grantee), document.id)
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.delete(&admin, document.id).await?;

    Ok(())
}
