//! Customers, jobs and crew against a live account.

use chrono::NaiveDate;

use super::common::{ctx, rest_client, session};
use serviceworks_api::client::ErrorClass;

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_crew_list() {
    let session = session().await;

    let crew = rest_client()
        .crew_list(&ctx(), &session.token)
        .await
        .expect("crew_list should succeed");

    assert!(!crew.is_empty());
    assert!(crew[0].employee_id > 0);
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_crew_list_bad_token() {
    let session = session().await;
    let bad_token = format!("{}a", session.token);

    let err = rest_client()
        .crew_list(&ctx(), &bad_token)
        .await
        .unwrap_err();

    assert_eq!(err.class(), Some(ErrorClass::InvalidCode));
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_time_ranges() {
    let session = session().await;

    let ranges = rest_client()
        .time_ranges(&ctx(), &session.token)
        .await
        .expect("time_ranges should succeed");

    assert!(!ranges.is_empty());
    assert!(!ranges[0].id.is_empty());
    assert!(!ranges[0].text.is_empty());
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_list_jobs_empty_range() {
    let session = session().await;
    let day = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();

    let jobs = rest_client()
        .list_jobs(&ctx(), &session.token, day, day)
        .await
        .expect("a range without jobs is not an error");

    assert!(jobs.is_empty());
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_search_customers_no_match() {
    let session = session().await;

    let customers = rest_client()
        .search_customers(&ctx(), &session.token, "zzqx-no-such-customer-zzqx")
        .await
        .expect("search_customers should succeed");

    assert!(customers.is_empty());
}
