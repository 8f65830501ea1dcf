use super::*;

/// Tests creating a folder.
///
/// Expected: Ok with name and creator set
#[tokio::test]
async fn creates_folder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FolderRepository::new(db);
    let folder = repo.create("Contracts".to_string(), user.id).await?;

    assert_eq!(folder.name, "Contracts");
    assert_eq!(folder.created_by, user.id);
    assert_eq!(folder.created_at, folder.updated_at);

    Ok(())
}

/// Tests loading a folder with its creator.
///
/// Expected: Ok(Some) with the creator summary
#[tokio::test]
async fn finds_folder_with_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let folder = factory::create_folder(db, user.id).await?;

    let repo = FolderRepository::new(db);
    let found = repo.find_with_creator(folder.id).await?.unwrap();

    assert_eq!(found.folder.id, folder.id);
    assert_eq!(found.creator.email, user.email);
    assert!(repo.find_with_creator(folder.id + 1).await?.is_none());

    Ok(())
}
