use super::*;

/// Tests editing a memo.
///
/// Expected: Ok(Some) with replaced title and content
#[tokio::test]
async fn updates_memo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Memo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let memo = factory::create_memo(db).await?;

    let repo = MemoRepository::new(db);
    let updated = repo
        .update(memo.id, params("New title", "New body"))
        .await?
        .unwrap();

    assert_eq!(updated.id, memo.id);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "New body");
    assert_eq!(updated.created_at, memo.created_at);

    Ok(())
}

/// Tests editing a memo that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_memo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Memo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemoRepository::new(db);

    assert!(repo.update(9, params("a", "b")).await?.is_none());

    Ok(())
}
