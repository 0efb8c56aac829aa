use super::*;

/// Tests updating enrollment when the expected count matches.
///
/// Verifies that only the enrollment column changes.
///
/// Expected: Ok(Some(Group)) with the new count
#[tokio::test]
async fn updates_when_expected_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::course_group::create_group_with_occupancy(db, 4, 5).await?;

    let repo = GroupRepository::new(db);
    let updated = repo.update_enrolled(&created.group_code, 4, 5).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.enrolled, 5);
    assert_eq!(updated.max_capacity, 5);
    assert_eq!(updated.professor_id, created.professor_id);

    Ok(())
}

/// Tests that a stale expected count leaves the group untouched.
///
/// Simulates a concurrent writer having changed the count since it was read.
///
/// Expected: Ok(None) and enrollment unchanged
#[tokio::test]
async fn skips_update_when_count_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::course_group::create_group_with_occupancy(db, 3, 5).await?;

    let repo = GroupRepository::new(db);
    let updated = repo.update_enrolled(&created.group_code, 2, 3).await?;

    assert!(updated.is_none());
    let current = repo.get_by_code(&created.group_code).await?.unwrap();
    assert_eq!(current.enrolled, 3);

    Ok(())
}

/// Tests updating a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let updated = repo.update_enrolled("NOPE-000", 0, 1).await?;

    assert!(updated.is_none());

    Ok(())
}
