use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(User)) with matching ID
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("bob@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("bob@example.com").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
