use super::*;

fn picture(key: &str, size: u64) -> StoredBlob {
    StoredBlob {
        key: key.to_string(),
        size,
        content_type: Some("image/png".to_string()),
    }
}

/// Tests replacing a profile picture.
///
/// Verifies the old blob is removed and a signed URL is produced for the new one.
///
/// Expected: Ok with the new key stored and the previous blob deleted
#[tokio::test]
async fn replaces_previous_picture() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);
    blobs.put("profile-pictures/1/old.png", b"old").await?;
    blobs.put("profile-pictures/1/new.png", b"new").await?;

    let service = UserService::new(db, &blobs, &tokens);
    let user = service
        .set_profile_picture(&user, picture("profile-pictures/1/old.png", 3))
        .await?;
    let user = service
        .set_profile_picture(&user, picture("profile-pictures/1/new.png", 3))
        .await?;

    assert_eq!(
        user.profile_picture_path.as_deref(),
        Some("profile-pictures/1/new.png")
    );
    assert!(!blobs.exists("profile-pictures/1/old.png").await?);
    assert!(blobs.exists("profile-pictures/1/new.png").await?);

    let url = service.profile_picture_url(&user)?.unwrap();
    assert!(url.contains("/api/storage/profile-pictures/1/new.png?token="));

    Ok(())
}

/// Tests uploading an empty picture.
///
/// Expected: Err(BadRequest) and the empty blob removed
#[tokio::test]
async fn rejects_empty_picture() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_storage()
        .build()
        .await
        .unwrap();
    let blobs = blob_store(&mut test);
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);
    blobs.put("profile-pictures/1/empty.png", b"").await?;

    let service = UserService::new(db, &blobs, &tokens);
    let result = service
        .set_profile_picture(&user, picture("profile-pictures/1/empty.png", 0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!blobs.exists("profile-pictures/1/empty.png").await?);
    assert!(service.profile_picture_url(&user)?.is_none());

    Ok(())
}
