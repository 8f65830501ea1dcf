use super::*;

/// Tests recording an upload.
///
/// Verifies the metadata, the signed URL and the uploader notification.
///
/// Expected: Ok with stored document details and one "Document Uploaded" notification
#[tokio::test]
async fn creates_document_and_notifies_uploader() -> Result<(), AppError> {
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
    let folder = factory::create_folder(db, user.id).await?;
    let folder_id = folder.id.to_string();
    let upload = upload(
        &blobs,
        "documents/1-notes.txt",
        b"hello",
        Some(" Notes "),
        Some(&folder_id),
    )
    .await;

    let service = DocumentService::new(db, &blobs, &tokens);
    let details = service.create(&user, upload).await?;

    assert_eq!(details.document.name, "Notes");
    assert_eq!(details.document.size, 5);
    assert_eq!(details.document.mime_type, "text/plain");
    assert_eq!(details.document.folder_id, Some(folder.id));
    assert_eq!(details.uploader.id, user.id);
    assert!(details.access.is_empty());
    assert!(details
        .url
        .starts_with("http://localhost:3010/api/storage/documents/1-notes.txt?token="));

    let notifications = NotificationService::new(db).get_for_user(user.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Document Uploaded");

    Ok(())
}

/// Tests that the explicit document type overrides the file's content type.
///
/// Expected: Ok with the overriding mime type
#[tokio::test]
async fn prefers_explicit_document_type() -> Result<(), AppError> {
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
    let mut upload = upload(&blobs, "documents/2-a.md", b"# A", Some("A"), None).await;
    upload.document_type = Some("text/markdown".to_string());

    let service = DocumentService::new(db, &blobs, &tokens);
    let details = service.create(&user, upload).await?;

    assert_eq!(details.document.mime_type, "text/markdown");

    Ok(())
}

/// Tests rejected uploads clean up their blob.
///
/// Covers a missing name, an empty file, a malformed folder ID and an unknown folder.
///
/// Expected: Err(BadRequest) or Err(NotFound), and the blob removed each time
#[tokio::test]
async fn removes_blob_when_rejected() -> Result<(), AppError> {
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

    let missing_name = upload(&blobs, "documents/a", b"x", Some("  "), None).await;
    let result = service.create(&user, missing_name).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!blobs.exists("documents/a").await?);

    let empty = upload(&blobs, "documents/b", b"", Some("Empty"), None).await;
    let result = service.create(&user, empty).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!blobs.exists("documents/b").await?);

    let bad_folder = upload(&blobs, "documents/c", b"x", Some("C"), Some("abc")).await;
    let result = service.create(&user, bad_folder).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!blobs.exists("documents/c").await?);

    let unknown_folder = upload(&blobs, "documents/d", b"x", Some("D"), Some("999")).await;
    let result = service.create(&user, unknown_folder).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(!blobs.exists("documents/d").await?);

    Ok(())
}

/// Tests uploading a second document with an existing name.
///
/// Expected: Err(Conflict), the first blob kept and the second removed
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
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

    let first = upload(&blobs, "documents/first", b"1", Some("Report"), None).await;
    service.create(&user, first).await?;
    let second = upload(&blobs, "documents/second", b"2", Some("Report"), None).await;
    let result = service.create(&user, second).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(blobs.exists("documents/first").await?);
    assert!(!blobs.exists("documents/second").await?);

    Ok(())
}
