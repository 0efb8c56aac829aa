use super::*;

/// Tests fetching a faculty's queue.
///
/// Verifies that requests of every status are included and unassigned or foreign
/// requests are not.
///
/// Expected: Ok(Vec<Request>) with the two engineering requests
#[tokio::test]
async fn returns_faculty_requests_in_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RequestFactory::new(db)
        .faculty_id("engineering")
        .build()
        .await?;
    RequestFactory::new(db)
        .faculty_id("engineering")
        .status(RequestStatus::Cancelled)
        .build()
        .await?;
    RequestFactory::new(db).faculty_id("law").build().await?;
    RequestFactory::new(db).build().await?;

    let repo = RequestRepository::new(db);
    let requests = repo.find_owned_by_faculty("engineering").await?;

    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|r| r.faculty_id.as_deref() == Some("engineering")));

    Ok(())
}
