use super::*;

/// Tests posting a memo.
///
/// Expected: Ok with title and content stored
#[tokio::test]
async fn creates_memo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Memo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemoRepository::new(db);
    let memo = repo.create(params("Holiday", "Office closed Friday")).await?;

    assert_eq!(memo.title, "Holiday");
    assert_eq!(memo.content, "Office closed Friday");

    Ok(())
}
