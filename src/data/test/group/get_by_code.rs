use super::*;

/// Tests fetching an existing group by code.
///
/// Expected: Ok(Some(Group)) with matching capacity and enrollment
#[tokio::test]
async fn finds_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::course_group::CourseGroupFactory::new(db)
        .group_code("MATH-101-1")
        .max_capacity(5)
        .enrolled(4)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let group = repo.get_by_code(&created.group_code).await?;

    assert!(group.is_some());
    let group = group.unwrap();
    assert_eq!(group.group_code, "MATH-101-1");
    assert_eq!(group.max_capacity, 5);
    assert_eq!(group.enrolled, 4);

    Ok(())
}

/// Tests fetching a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CourseGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.get_by_code("NOPE-000").await?;

    assert!(group.is_none());

    Ok(())
}
