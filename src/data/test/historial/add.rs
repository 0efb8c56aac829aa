use super::*;

/// Tests adding a historial entry for a student and group.
///
/// Expected: Ok(Historial) and the entry is readable afterwards
#[tokio::test]
async fn adds_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = HistorialRepository::new(db);
    let entry = repo
        .add("student-1", &group.group_code, HistorialStatus::OnGoing)
        .await?;

    assert_eq!(entry.student_id, "student-1");
    assert_eq!(entry.group_code, group.group_code);
    assert_eq!(entry.status, HistorialStatus::OnGoing);

    let found = repo.find("student-1", &group.group_code).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().status, HistorialStatus::OnGoing);

    Ok(())
}

/// Tests adding a second entry for the same student and group.
///
/// The pair is the primary key, so the insert must fail.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    factory::create_historial(db, "student-1", &group.group_code).await?;

    let repo = HistorialRepository::new(db);
    let result = repo
        .add("student-1", &group.group_code, HistorialStatus::OnGoing)
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that the same student may hold entries in different groups.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_entries_in_distinct_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;

    let repo = HistorialRepository::new(db);
    repo.add("student-1", &first.group_code, HistorialStatus::Swapped)
        .await?;
    repo.add("student-1", &second.group_code, HistorialStatus::OnGoing)
        .await?;

    assert!(repo.find("student-1", &first.group_code).await?.is_some());
    assert!(repo.find("student-1", &second.group_code).await?.is_some());

    Ok(())
}
