use super::*;

/// Tests sharing a document and revoking the access again.
///
/// Expected: Ok with the access list updated and the target notified both times
#[tokio::test]
async fn shares_and_revokes_with_notifications() -> Result<(), AppError> {
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
    let target = factory::create_user(db).await?;
    let document = factory::create_document(db, owner.id).await?;

    let service = DocumentService::new(db, &blobs, &tokens);
    let shared = service
        .share(&owner, document.id, &target.email.to_uppercase())
        .await?;
    assert_eq!(shared.access.len(), 1);
    assert_eq!(shared.access[0].id, target.id);

    let revoked = service.revoke(&owner, document.id, &target.email).await?;
    assert!(revoked.access.is_empty());

    let titles: Vec<String> = NotificationService::new(db)
        .get_for_user(target.id)
        .await?
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert!(titles.contains(&"Document Shared".to_string()));
    assert!(titles.contains(&"Access Revoked".to_string()));

    Ok(())
}

/// Tests sharing with someone who already has access, including the uploader.
///
/// Expected: Err(BadRequest) in both cases
#[tokio::test]
async fn rejects_share_with_existing_access() -> Result<(), AppError> {
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
    let owner = User::from_entity(uploader.clone());

    let service = DocumentService::new(db, &blobs, &tokens);

    let again = service.share(&owner, document.id, &grantee.email).await;
    let to_self = service.share(&owner, document.id, &uploader.email).await;

    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert!(matches!(to_self, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests share and revoke error cases.
///
/// Expected: NotFound for unknown users and documents, BadRequest when revoking a
/// user without access, AccessDenied for non-owners
#[tokio::test]
async fn rejects_invalid_share_requests() -> Result<(), AppError> {
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
    let other = User::from_entity(factory::create_user(db).await?);
    let document = factory::create_document(db, owner.id).await?;

    let service = DocumentService::new(db, &blobs, &tokens);

    let unknown_user = service
        .share(&owner, document.id, "ghost@example.com")
        .await;
    let unknown_document = service.share(&owner, 999, &other.email).await;
    let not_on_list = service.revoke(&owner, document.id, &other.email).await;
    let not_owner = service.share(&other, document.id, &other.email).await;

    assert!(matches!(unknown_user, Err(AppError::NotFound(_))));
    assert!(matches!(unknown_document, Err(AppError::NotFound(_))));
    assert!(matches!(not_on_list, Err(AppError::BadRequest(_))));
    assert!(matches!(
        not_owner,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that shared documents show up for the grantee with their access list.
///
/// Expected: Ok with the document visible to the grantee, hidden from a stranger
#[tokio::test]
async fn lists_shared_documents() -> Result<(), AppError> {
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
    let stranger = User::from_entity(factory::create_user(db).await?);

    let service = DocumentService::new(db, &blobs, &tokens);
    let visible = service
        .get_visible(&User::from_entity(grantee.clone()), None)
        .await?;

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].document.id, document.id);
    assert_eq!(visible[0].uploader.id, uploader.id);
    assert_eq!(visible[0].access[0].email, grantee.email);
    assert!(service.get_visible(&stranger, None).await?.is_empty());

    Ok(())
}
