use super::*;

/// Tests promoting a user to admin.
///
/// Expected: Ok(Some(User)) with role Admin, persisted
#[tokio::test]
async fn grants_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, Role::Admin).await?.unwrap();

    assert_eq!(updated.role, Role::Admin);
    assert!(repo.find_by_id(user.id).await?.unwrap().is_admin());

    Ok(())
}

/// Tests demoting an admin back to a regular user.
///
/// Expected: Ok(Some(User)) with role User
#[tokio::test]
async fn revokes_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(admin.id, Role::User).await?.unwrap();

    assert_eq!(updated.role, Role::User);

    Ok(())
}

/// Tests setting the role of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_role(999, Role::Admin).await?;

    assert!(result.is_none());

    Ok(())
}
