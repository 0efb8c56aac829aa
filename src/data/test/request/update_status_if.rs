use super::*;

/// Tests committing a status change while the request still holds the expected status.
///
/// Expected: Ok(Some(Request)) with the new status
#[tokio::test]
async fn updates_when_status_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db)
        .status(RequestStatus::InReview)
        .build()
        .await?;

    let repo = RequestRepository::new(db);
    let updated = repo
        .update_status_if(
            &created.id,
            RequestStatus::InReview,
            RequestStatus::Accepted,
            Utc::now(),
        )
        .await?;

    assert_eq!(updated.map(|r| r.status), Some(RequestStatus::Accepted));

    Ok(())
}

/// Tests that a second answer cannot overwrite the first.
///
/// Both callers read PENDING; only the first commit succeeds.
///
/// Expected: second call returns Ok(None) and status stays ACCEPTED
#[tokio::test]
async fn rejects_stale_expected_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RequestFactory::new(db).build().await?;

    let repo = RequestRepository::new(db);
    let first = repo
        .update_status_if(
            &created.id,
            RequestStatus::Pending,
            RequestStatus::Accepted,
            Utc::now(),
        )
        .await?;
    let second = repo
        .update_status_if(
            &created.id,
            RequestStatus::Pending,
            RequestStatus::Rejected,
            Utc::now(),
        )
        .await?;

    assert!(first.is_some());
    assert!(second.is_none());
    let current = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(current.status, RequestStatus::Accepted);

    Ok(())
}
