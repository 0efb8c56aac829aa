use super::*;

/// Tests resolving the faculty of a registered member.
///
/// Expected: Ok(Some(faculty_id))
#[tokio::test]
async fn returns_faculty_of_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db, "staff-1", "engineering").await?;

    let repo = MemberRepository::new(db);
    let faculty = repo.get_faculty("staff-1").await?;

    assert_eq!(faculty.as_deref(), Some("engineering"));

    Ok(())
}

/// Tests resolving the faculty of an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let faculty = repo.get_faculty("ghost").await?;

    assert!(faculty.is_none());

    Ok(())
}
