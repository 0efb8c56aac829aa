use super::*;

/// Tests counting all requests and requests by status.
///
/// Expected: total 4, pending 2, accepted 1, rejected 0
#[tokio::test]
async fn counts_total_and_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RequestFactory::new(db).build().await?;
    RequestFactory::new(db).build().await?;
    RequestFactory::new(db)
        .status(RequestStatus::Accepted)
        .build()
        .await?;
    RequestFactory::new(db)
        .status(RequestStatus::Cancelled)
        .build()
        .await?;

    let repo = RequestRepository::new(db);

    assert_eq!(repo.count().await?, 4);
    assert_eq!(repo.count_by_status(RequestStatus::Pending).await?, 2);
    assert_eq!(repo.count_by_status(RequestStatus::Accepted).await?, 1);
    assert_eq!(repo.count_by_status(RequestStatus::Rejected).await?, 0);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    Ok(())
}
