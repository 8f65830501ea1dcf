use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a user cascades to their notifications, folders and access entries.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn cascades_to_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let document = factory::create_document(db, owner.id).await?;
    factory::grant_access(db, document.id, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_folder(db, user.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Folder::find().count(db).await?, 0);
    assert_eq!(entity::prelude::DocumentAccess::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Document::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
