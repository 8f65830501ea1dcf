use super::*;

/// Tests deleting a memo.
///
/// Expected: Ok(Some) with the removed memo, then gone from the list
#[tokio::test]
async fn deletes_and_returns_memo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Memo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let memo = factory::create_memo(db).await?;

    let repo = MemoRepository::new(db);
    let deleted = repo.delete(memo.id).await?.unwrap();

    assert_eq!(deleted.id, memo.id);
    assert_eq!(deleted.title, memo.title);
    assert!(repo.get_all().await?.is_empty());
    assert!(repo.delete(memo.id).await?.is_none());

    Ok(())
}
