use super::*;

/// Tests listing attendance for one user.
///
/// Expected: Ok with that user's records, newest login first
#[tokio::test]
async fn returns_records_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = AttendanceRepository::new(db);
    let first = repo.create(user.id, now - Duration::days(1)).await?;
    let second = repo.create(user.id, now).await?;
    repo.create(other.id, now).await?;

    let ids: Vec<i32> = repo
        .get_for_user(user.id)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
