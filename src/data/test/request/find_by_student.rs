use super::*;

/// Tests that only the student's own requests are returned, most recent first.
///
/// Expected: Ok(Vec<Request>) with two requests ordered by creation time descending
#[tokio::test]
async fn returns_student_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = RequestFactory::new(db)
        .student_id("student-1")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = RequestFactory::new(db)
        .student_id("student-1")
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    RequestFactory::new(db)
        .student_id("student-2")
        .created_at(now)
        .build()
        .await?;

    let repo = RequestRepository::new(db);
    let requests = repo.find_by_student("student-1").await?;

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id, newer.id);
    assert_eq!(requests[1].id, older.id);

    Ok(())
}

/// Tests a student with no requests.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_student_without_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RequestFactory::new(db).student_id("student-2").build().await?;

    let repo = RequestRepository::new(db);
    let requests = repo.find_by_student("student-1").await?;

    assert!(requests.is_empty());

    Ok(())
}
