use super::*;

/// Tests filtering requests by type.
///
/// Expected: Ok(Vec<Request>) containing only EXCEPTIONAL requests in any status
#[tokio::test]
async fn returns_only_matching_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let open = RequestFactory::new(db)
        .exceptional()
        .created_at(now)
        .build()
        .await?;
    let closed = RequestFactory::new(db)
        .exceptional()
        .status(RequestStatus::Rejected)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    RequestFactory::new(db).join("MATH-101-1").build().await?;

    let repo = RequestRepository::new(db);
    let requests = repo.find_by_type(RequestType::Exceptional).await?;

    let ids: Vec<_> = requests.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![open.id.as_str(), closed.id.as_str()]);

    Ok(())
}
