use super::*;

/// Tests listing folders across creators.
///
/// Expected: Ok with every folder ordered by name
#[tokio::test]
async fn lists_folders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::folder::FolderFactory::new(db, first.id)
        .name("Invoices")
        .build()
        .await?;
    factory::folder::FolderFactory::new(db, second.id)
        .name("Archive")
        .build()
        .await?;

    let repo = FolderRepository::new(db);
    let folders = repo.get_all_with_creator().await?;

    let names: Vec<&str> = folders.iter().map(|f| f.folder.name.as_str()).collect();
    assert_eq!(names, vec!["Archive", "Invoices"]);
    assert_eq!(folders[0].creator.id, second.id);
    assert_eq!(folders[1].creator.id, first.id);

    Ok(())
}
