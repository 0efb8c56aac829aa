use super::*;

/// Tests creating a JOIN request.
///
/// Verifies that new requests start PENDING with equal timestamps and keep the fields
/// they were filed with.
///
/// Expected: Ok(Request) with status PENDING
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = RequestRepository::new(db);
    let request = repo
        .create(
            "request-1".to_string(),
            CreateRequestParams {
                student_id: "student-1".to_string(),
                request_type: RequestType::Join,
                origin_group: None,
                destination_group: Some("MATH-101-1".to_string()),
                faculty_id: Some("sciences".to_string()),
                description: "Schedule conflict".to_string(),
            },
            now,
        )
        .await?;

    assert_eq!(request.id, "request-1");
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.request_type, RequestType::Join);
    assert_eq!(request.destination_group.as_deref(), Some("MATH-101-1"));
    assert!(request.origin_group.is_none());
    assert_eq!(request.faculty_id.as_deref(), Some("sciences"));
    assert_eq!(request.description, "Schedule conflict");
    assert_eq!(request.created_at, request.updated_at);

    Ok(())
}

/// Tests creating two requests with the same ID.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RequestFactory::new(db).id("request-1").build().await?;

    let repo = RequestRepository::new(db);
    let result = repo
        .create(
            "request-1".to_string(),
            CreateRequestParams {
                student_id: "student-2".to_string(),
                request_type: RequestType::Exceptional,
                origin_group: None,
                destination_group: None,
                faculty_id: None,
                description: String::new(),
            },
            Utc::now(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
