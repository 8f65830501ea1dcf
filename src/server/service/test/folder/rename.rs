use super::*;

/// Tests renaming a folder as its creator and as another user.
///
/// Expected: Ok for the creator, AccessDenied for another user
#[tokio::test]
async fn renames_only_for_creator_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = User::from_entity(factory::create_user(db).await?);
    let other = User::from_entity(factory::create_user(db).await?);
    let admin = User::from_entity(factory::user::create_admin(db).await?);

    let service = FolderService::new(db);
    let folder = service.create(&creator, "Drafts").await?;

    let renamed = service
        .rename(&creator, folder.folder.id, "  Final  ")
        .await?;
    assert_eq!(renamed.folder.name, "Final");
    assert_eq!(renamed.creator.id, creator.id);

    let denied = service.rename(&other, folder.folder.id, "Mine").await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let by_admin = service.rename(&admin, folder.folder.id, "Audited").await?;
    assert_eq!(by_admin.folder.name, "Audited");

    Ok(())
}

/// Tests blank names and unknown folders.
///
/// Expected: Err(BadRequest) for blank names, Err(NotFound) for an unknown folder
#[tokio::test]
async fn rejects_blank_names_and_unknown_folders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let service = FolderService::new(db);

    assert!(matches!(
        service.create(&user, "   ").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.rename(&user, 42, "Name").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.get(42).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating and renaming folders onto a name already in use.
///
/// Expected: Ok for both, leaving two folders with the same name
#[tokio::test]
async fn allows_duplicate_folder_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let service = FolderService::new(db);
    let first = service.create(&user, "Reports").await?;
    let second = service.create(&user, "Reports").await?;
    assert_ne!(first.folder.id, second.folder.id);

    let third = service.create(&user, "Archive").await?;
    let renamed = service.rename(&user, third.folder.id, "Reports").await?;
    assert_eq!(renamed.folder.name, "Reports");

    let named_reports = service
        .get_all()
        .await?
        .into_iter()
        .filter(|folder| folder.folder.name == "Reports")
        .count();
    assert_eq!(named_reports, 3);

    Ok(())
}
