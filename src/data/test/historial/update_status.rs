use super::*;

/// Tests replacing the status of an existing entry.
///
/// Expected: Ok(Some(Historial)) with the new status
#[tokio::test]
async fn updates_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    factory::create_historial(db, "student-1", &group.group_code).await?;

    let repo = HistorialRepository::new(db);
    let updated = repo
        .update_status("student-1", &group.group_code, HistorialStatus::Cancelled)
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().status, HistorialStatus::Cancelled);

    let found = repo.find("student-1", &group.group_code).await?.unwrap();
    assert_eq!(found.status, HistorialStatus::Cancelled);

    Ok(())
}

/// Tests updating an entry that was never added.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = HistorialRepository::new(db);
    let updated = repo
        .update_status("student-1", &group.group_code, HistorialStatus::Swapped)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
