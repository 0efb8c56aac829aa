use super::*;

/// Tests fetching with a role that does not exist.
///
/// Expected: Err(AppError::UnsupportedRole)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let (test, notifier, _) = setup().await;
    let db = test.db.as_ref().unwrap();
    let service = RequestService::new(db, &notifier);

    let result = service.fetch_requests("PROFESSOR", "user-1").await;

    assert!(matches!(result, Err(AppError::UnsupportedRole(_))));

    Ok(())
}

/// Tests that a student only sees their own requests, newest first.
///
/// Expected: the two requests of student-1 in creation order descending
#[tokio::test]
async fn student_sees_own_requests_newest_first() -> Result<(), DbErr> {
    let (test, notifier, _) = setup().await;
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = RequestFactory::new(db)
        .student_id("student-1")
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let newer = RequestFactory::new(db)
        .student_id("student-1")
        .status(RequestStatus::Rejected)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    RequestFactory::new(db)
        .student_id("student-2")
        .created_at(now)
        .build()
        .await?;

    let service = RequestService::new(db, &notifier);
    let requests = service.fetch_requests("student", "student-1").await.unwrap();

    let ids: Vec<_> = requests.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);

    Ok(())
}

/// Tests the administrative view combining all pending requests with the faculty queue.
///
/// A pending request owned by the caller's faculty is in both sets and is listed twice.
///
/// Expected: [owned pending, owned pending, foreign pending, owned accepted]
#[tokio::test]
async fn administrative_sees_pending_and_faculty_queue() -> Result<(), DbErr> {
    let (test, notifier, _) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::create_member(db, "staff-1", "engineering").await?;

    let now = Utc::now();
    let owned_pending = RequestFactory::new(db)
        .faculty_id("engineering")
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    let foreign_pending = RequestFactory::new(db)
        .faculty_id("law")
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let owned_accepted = RequestFactory::new(db)
        .faculty_id("engineering")
        .status(RequestStatus::Accepted)
        .created_at(now - Duration::minutes(3))
        .build()
        .await?;
    RequestFactory::new(db)
        .faculty_id("law")
        .status(RequestStatus::Rejected)
        .created_at(now)
        .build()
        .await?;

    let service = RequestService::new(db, &notifier);
    let requests = service
        .fetch_requests("ADMINISTRATIVE", "staff-1")
        .await
        .unwrap();

    let ids: Vec<_> = requests.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            owned_pending.id.as_str(),
            owned_pending.id.as_str(),
            foreign_pending.id.as_str(),
            owned_accepted.id.as_str(),
        ]
    );

    Ok(())
}

/// Tests the administrative view for a user who is not a faculty member.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn administrative_requires_membership() -> Result<(), DbErr> {
    let (test, notifier, _) = setup().await;
    let db = test.db.as_ref().unwrap();
    let service = RequestService::new(db, &notifier);

    let result = service.fetch_requests("ADMINISTRATIVE", "ghost").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that administrators see only EXCEPTIONAL requests.
///
/// Expected: the single exceptional request
#[tokio::test]
async fn administrator_sees_exceptional_requests() -> Result<(), DbErr> {
    let (test, notifier, _) = setup().await;
    let db = test.db.as_ref().unwrap();

    let exceptional = RequestFactory::new(db).exceptional().build().await?;
    RequestFactory::new(db).join("MATH-101-1").build().await?;
    RequestFactory::new(db).cancellation("MATH-101-1").build().await?;

    let service = RequestService::new(db, &notifier);
    let requests = service
        .fetch_requests("ADMINISTRATOR", "admin-1")
        .await
        .unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, exceptional.id);

    Ok(())
}
