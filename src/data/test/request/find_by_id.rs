use super::*;

/// Tests finding an existing request by ID.
///
/// Expected: Ok(Some(Request))
#[tokio::test]
async fn finds_existing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db)
        .student_id("student-1")
        .cancellation("MATH-101-1")
        .build()
        .await?;

    let repo = RequestRepository::new(db);
    let found = repo.find_by_id(&created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.student_id, "student-1");
    assert_eq!(found.request_type, RequestType::Cancellation);
    assert_eq!(found.origin_group.as_deref(), Some("MATH-101-1"));

    Ok(())
}

/// Tests finding a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);
    let found = repo.find_by_id("missing").await?;

    assert!(found.is_none());

    Ok(())
}
