use super::*;

/// Tests that all users are returned ordered by name.
///
/// Expected: Ok with users sorted alphabetically
#[tokio::test]
async fn returns_users_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|u| u.name).collect();

    assert_eq!(names, vec!["Bob", "Charlie", "alice"]);

    Ok(())
}

/// Tests fetching users by a list of IDs that includes an unknown ID.
///
/// Expected: Ok with only the existing users
#[tokio::test]
async fn find_by_ids_skips_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let mut ids: Vec<i32> = repo
        .find_by_ids(&[a.id, b.id, 999])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![a.id, b.id]);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
