//! Integration tests against a live muster backend.
//!
//! These require a reachable backend and real credentials and are ignored by
//! default. To run them, create a `.env` file in the muster-api directory
//! with:
//!
//! ```env
//! MUSTER_API_URL=https://recruitment.example.com/api
//! MUSTER_API_TOKEN=your-bearer-token
//! ```
//!
//! Then run: `cargo test -p muster-api -- --ignored`

use std::env;

use muster_api::ApiClient;
use muster_api::api::query::ListQuery;
use muster_api::session::SessionContext;

fn live_client() -> Option<ApiClient> {
    let _ = dotenvy::dotenv();

    let base_url = env::var("MUSTER_API_URL").ok()?;
    let token = env::var("MUSTER_API_TOKEN").ok()?;

    let session = SessionContext::new();
    session.sign_in_token(token);

    Some(
        ApiClient::builder()
            .base_url(base_url)
            .session(session)
            .build(),
    )
}

#[tokio::test]
#[ignore]
async fn test_list_institutes_live() {
    let Some(client) = live_client() else {
        eprintln!("Skipping: MUSTER_API_URL / MUSTER_API_TOKEN not set");
        return;
    };

    let page = client
        .list_institutes(&ListQuery::default())
        .await
        .expect("institutes listing failed");

    assert!(page.info.current_page >= 1);
    assert!(page.info.last_page >= 1);
    assert!(page.items.len() as u64 <= page.info.total.max(page.items.len() as u64));
}

#[tokio::test]
#[ignore]
async fn test_my_permissions_live() {
    let Some(client) = live_client() else {
        eprintln!("Skipping: MUSTER_API_URL / MUSTER_API_TOKEN not set");
        return;
    };

    let grants = client.my_permissions().await.expect("permission fetch failed");
    for grant in &grants {
        assert!(!grant.module.is_empty());
        assert!(!grant.action.is_empty());
    }
}
