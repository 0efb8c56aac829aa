use super::*;

/// Tests filtering requests by status.
///
/// Expected: Ok(Vec<Request>) containing only PENDING requests
#[tokio::test]
async fn returns_only_matching_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = RequestFactory::new(db).build().await?;
    RequestFactory::new(db)
        .status(RequestStatus::Accepted)
        .build()
        .await?;
    RequestFactory::new(db)
        .status(RequestStatus::Waiting)
        .build()
        .await?;

    let repo = RequestRepository::new(db);
    let requests = repo.find_by_status(RequestStatus::Pending).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, pending.id);

    Ok(())
}
