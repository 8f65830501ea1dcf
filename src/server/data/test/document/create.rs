use super::*;

fn param(name: &str, key: &str, uploader_id: i32) -> CreateDocumentParam {
    CreateDocumentParam {
        name: name.to_string(),
        size: 42,
        mime_type: "application/pdf".to_string(),
        storage_path: key.to_string(),
        uploader_id,
        folder_id: None,
    }
}

/// Tests inserting document metadata.
///
/// Expected: Ok with fields matching the input
#[tokio::test]
async fn creates_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = DocumentRepository::new(db);
    let document = repo
        .create(param("report.pdf", "documents/1-report.pdf", user.id))
        .await?;

    assert_eq!(document.name, "report.pdf");
    assert_eq!(document.size, 42);
    assert_eq!(document.mime_type, "application/pdf");
    assert_eq!(document.storage_path, "documents/1-report.pdf");
    assert_eq!(document.uploader_id, user.id);
    assert!(document.folder_id.is_none());

    Ok(())
}

/// Tests inserting a second document with an existing name.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = DocumentRepository::new(db);
    repo.create(param("same", "documents/a", user.id)).await?;
    let err = repo
        .create(param("same", "documents/b", user.id))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
