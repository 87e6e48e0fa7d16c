//! Login and refresh against a live account.

use chrono::{Duration, Utc};

use super::common::{auth_client, credentials, ctx, session};
use serviceworks_api::auth::{FileTokenStorage, TokenStorage, REFRESH_INTERVAL_DAYS};
use serviceworks_api::client::{ErrorClass, ErrorKind};

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_login() {
    let session = session().await;

    assert!(session.token.len() > 10);
    assert!(!session.time_zone_name.is_empty());
    assert!(!session.company_id.is_empty());
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_login_wrong_password() {
    let creds = credentials().with_password("asdf");

    let err = auth_client().login(&ctx(), &creds).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidUserPassword));
    assert_eq!(err.class(), Some(ErrorClass::InvalidUserPassword));
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_refresh_token() {
    let session = session().await;

    let refreshed = auth_client()
        .refresh_token(&ctx(), &session.token)
        .await
        .expect("refresh should succeed for a fresh token");

    assert!(refreshed.token.len() > 10);
    assert_eq!(refreshed.company_id, session.company_id);
}

#[tokio::test]
#[ignore = "requires a ServiceWorks account"]
async fn test_resume_stored_session() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = FileTokenStorage::with_path(dir.path());
    let session = session().await;
    storage.save("live", &session).unwrap();

    let resumed = auth_client()
        .resume(&ctx(), &storage, "live", Utc::now())
        .await
        .unwrap();
    assert_eq!(resumed.as_ref(), Some(&session));

    let due = Utc::now() + Duration::days(REFRESH_INTERVAL_DAYS);
    assert!(storage.refresh_due("live", due).unwrap());

    let refreshed = auth_client()
        .resume(&ctx(), &storage, "live", due)
        .await
        .expect("a fresh token should refresh")
        .unwrap();
    assert_eq!(refreshed.company_id, session.company_id);
    assert!(!storage.refresh_due("live", Utc::now()).unwrap());
}
