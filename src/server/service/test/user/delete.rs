use super::*;

/// Tests deleting a user with uploaded documents.
///
/// Verifies blobs and records of their documents are removed and the user row is gone.
///
/// Expected: Ok with no trace of the user's documents
#[tokio::test]
async fn removes_user_and_documents() -> Result<(), AppError> {
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
    let first = factory::create_document(db, user.id).await?;
    let second = factory::create_document(db, user.id).await?;
    blobs.put(&first.storage_path, b"1").await?;
    blobs.put(&second.storage_path, b"2").await?;

    let service = UserService::new(db, &blobs, &tokens);
    service.delete_by_email(&user.email.to_uppercase()).await?;

    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());
    assert!(!blobs.exists(&first.storage_path).await?);
    assert!(!blobs.exists(&second.storage_path).await?);
    assert_eq!(DocumentRepository::new(db).count().await?, 0);

    Ok(())
}

/// Tests that a failing document cleanup does not stop the deletion.
///
/// A directory sits where the first document's blob should be, so removing it fails
/// with an error other than "not found".
///
/// Expected: Ok with the user deleted and the other document's blob removed
#[tokio::test]
async fn continues_past_cleanup_failures() -> Result<(), AppError> {
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
    let broken = factory::document::DocumentFactory::new(db, user.id)
        .storage_path("documents/broken")
        .build()
        .await?;
    let healthy = factory::create_document(db, user.id).await?;
    blobs.put("documents/broken/inner", b"x").await?;
    blobs.put(&healthy.storage_path, b"ok").await?;

    let service = UserService::new(db, &blobs, &tokens);
    service.delete_by_email(&user.email).await?;

    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());
    assert!(!blobs.exists(&healthy.storage_path).await?);
    assert!(DocumentRepository::new(db)
        .find_by_id(broken.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests batch deletion.
///
/// Expected: Ok(count of matched users), unknown emails skipped
#[tokio::test]
async fn deletes_many_and_skips_unknown() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let keep = factory::create_user(db).await?;

    let service = UserService::new(db, &blobs, &tokens);
    let deleted = service
        .delete_many(&[a.email, "ghost@example.com".to_string(), b.email])
        .await?;

    assert_eq!(deleted, 2);
    let remaining: Vec<i32> = service.get_all().await?.iter().map(|u| u.id).collect();
    assert_eq!(remaining, vec![keep.id]);

    Ok(())
}

/// Tests batch deletion edge cases.
///
/// Expected: Err(BadRequest) for an empty list, Err(NotFound) when nothing matches
#[tokio::test]
async fn rejects_empty_or_unmatched_batches() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = UserService::new(db, &blobs, &tokens);

    assert!(matches!(
        service.delete_many(&[]).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .delete_many(&["ghost@example.com".to_string()])
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_by_email("ghost@example.com").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a user who cannot be deleted does not stop the rest of the batch.
///
/// A trigger aborts deletion of one user row, so that user's purge fails with a
/// database error.
///
/// Expected: Ok(count of the other users), locked user still present
#[tokio::test]
async fn batch_continues_past_failed_user() -> Result<(), AppError> {
    use sea_orm::ConnectionTrait;

    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let first = factory::create_user(db).await?;
    let locked = factory::create_user(db).await?;
    let last = factory::create_user(db).await?;
    db.execute_unprepared(&format!(
        "CREATE TRIGGER keep_user BEFORE DELETE ON \"user\" WHEN OLD.id = {} \
         BEGIN SELECT RAISE(ABORT, 'user is locked'); END;",
        locked.id
    ))
    .await?;

    let service = UserService::new(db, &blobs, &tokens);
    let deleted = service
        .delete_many(&[first.email, locked.email.clone(), last.email])
        .await?;

    assert_eq!(deleted, 2);
    let repo = UserRepository::new(db);
    assert!(repo.find_by_id(first.id).await?.is_none());
    assert!(repo.find_by_id(locked.id).await?.is_some());
    assert!(repo.find_by_id(last.id).await?.is_none());

    let only_locked = service.delete_many(&[locked.email]).await;
    assert!(matches!(only_locked, Err(AppError::DbErr(_))));

    Ok(())
}
