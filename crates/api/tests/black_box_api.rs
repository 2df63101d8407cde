use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

use curio_accounts::users::UserRecord;
use curio_auth::claims::Claims;
use curio_infra::InMemoryUserStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str, store: Arc<InMemoryUserStore>) -> Self {
        // Same router as prod, bound to an ephemeral port, with the
        // test's seeded store injected in place of the real datastore.
        let app = curio_api::app::build_app(jwt_secret.to_string(), store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

const SECRET: &str = "test-secret";

fn mint_jwt(jwt_secret: &str, sub: &str, access_groups: &[&str]) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        username: sub.to_string(),
        email: format!("{sub}@example.org"),
        organization: None,
        access_groups: access_groups.iter().map(|g| g.to_string()).collect(),
        exp: (Utc::now() + ChronoDuration::minutes(10)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

fn account(id: &str, name: &str, groups: &[&str]) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.org"),
        organization: Some("Natural History Unit".to_string()),
        access_groups: groups.iter().map(|g| g.to_string()).collect(),
        password_hash: Some("stored-hash".to_string()),
        email_verified: true,
        created_at: Utc::now(),
    }
}

fn store_with(users: Vec<UserRecord>) -> Arc<InMemoryUserStore> {
    let store = Arc::new(InMemoryUserStore::new());
    for user in users {
        store.insert(user);
    }
    store
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn(SECRET, store_with(vec![])).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn(SECRET, store_with(vec![])).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let expired = {
        let claims = Claims {
            sub: "u-1".to_string(),
            access_groups: vec!["admin".to_string()],
            exp: (Utc::now() - ChronoDuration::hours(1)).timestamp(),
            ..Claims::default()
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    };
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(expired)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn whoami_echoes_token_claims() {
    let srv = TestServer::spawn(SECRET, store_with(vec![])).await;
    let token = mint_jwt(SECRET, "u-7", &["editor", "curator@nccp"]);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], "u-7");
    assert_eq!(body["accessGroups"], json!(["editor", "curator@nccp"]));
}

#[tokio::test]
async fn admin_assigns_curator_role() {
    let store = store_with(vec![account("u-1", "Rosa Vega", &[])]);
    let srv = TestServer::spawn(SECRET, store).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "user_id": "u-1", "role": "curator" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/collections/nccp/members", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], "u-1");
    assert!(users[0]["accessGroups"]
        .as_array()
        .unwrap()
        .contains(&json!("curator@nccp")));
}

#[tokio::test]
async fn duplicate_assignment_returns_the_membership_message() {
    let store = store_with(vec![account("u-1", "Rosa Vega", &["reviewer@nccp"])]);
    let srv = TestServer::spawn(SECRET, store).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "user_id": "u-1", "role": "curator" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Rosa Vega is already a member of the nccp collection"
    );
}

#[tokio::test]
async fn curator_grants_reviewer_only_in_own_collection() {
    let store = store_with(vec![
        account("u-1", "Rosa Vega", &[]),
        account("u-2", "Sam Ortiz", &[]),
    ]);
    let srv = TestServer::spawn(SECRET, store).await;
    let curator = mint_jwt(SECRET, "curator-1", &["curator@c5"]);

    let client = reqwest::Client::new();

    // Reviewer in the curator's own collection: allowed.
    let res = client
        .post(format!("{}/collections/c5/roles", srv.base_url))
        .bearer_auth(&curator)
        .json(&json!({ "user_id": "u-1", "role": "reviewer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Reviewer in another collection: denied.
    let res = client
        .post(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&curator)
        .json(&json!({ "user_id": "u-2", "role": "reviewer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Curator grants are admin-territory even inside the collection.
    let res = client
        .post(format!("{}/collections/c5/roles", srv.base_url))
        .bearer_auth(&curator)
        .json(&json!({ "user_id": "u-2", "role": "curator" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn edit_requires_existing_membership() {
    let store = store_with(vec![
        account("u-1", "Rosa Vega", &["curator@nccp"]),
        account("u-2", "Sam Ortiz", &[]),
    ]);
    let srv = TestServer::spawn(SECRET, store).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "user_id": "u-1", "role": "reviewer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .patch(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "user_id": "u-2", "role": "reviewer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Sam Ortiz is not a member of the nccp collection"
    );
}

#[tokio::test]
async fn remove_role_then_listing_shrinks() {
    let store = store_with(vec![account("u-1", "Rosa Vega", &["reviewer@nccp"])]);
    let srv = TestServer::spawn(SECRET, store).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/collections/nccp/roles/u-1", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/collections/nccp/reviewers", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["users"].as_array().unwrap().is_empty());

    // Nothing left to remove.
    let res = client
        .delete(format!("{}/collections/nccp/roles/u-1", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reviewer_listing_respects_curator_scope() {
    let store = store_with(vec![account("u-1", "Rosa Vega", &["reviewer@nccp"])]);
    let srv = TestServer::spawn(SECRET, store).await;

    let client = reqwest::Client::new();

    let own = mint_jwt(SECRET, "curator-1", &["curator@nccp"]);
    let res = client
        .get(format!("{}/collections/nccp/reviewers", srv.base_url))
        .bearer_auth(own)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["users"].as_array().unwrap().len(), 1);

    let other = mint_jwt(SECRET, "curator-2", &["curator@herbarium"]);
    let res = client
        .get(format!("{}/collections/nccp/reviewers", srv.base_url))
        .bearer_auth(other)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn curator_and_member_listings_are_admin_only() {
    let store = store_with(vec![account("u-1", "Rosa Vega", &["curator@nccp"])]);
    let srv = TestServer::spawn(SECRET, store).await;
    let curator = mint_jwt(SECRET, "curator-1", &["curator@nccp"]);

    let client = reqwest::Client::new();
    for path in ["curators", "members"] {
        let res = client
            .get(format!("{}/collections/nccp/{}", srv.base_url, path))
            .bearer_auth(&curator)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN, "path {path}");
    }
}

#[tokio::test]
async fn profile_excludes_credentials() {
    let store = store_with(vec![account("u-9", "Tess Nwosu", &["editor"])]);
    let srv = TestServer::spawn(SECRET, store).await;
    let token = mint_jwt(SECRET, "u-9", &["editor"]);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/users/me", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["name"], "Tess Nwosu");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("emailVerified").is_none());
}

#[tokio::test]
async fn admin_search_finds_accounts_by_name() {
    let store = store_with(vec![
        account("u-1", "Rosa Vega", &[]),
        account("u-2", "Sam Ortiz", &[]),
    ]);
    let srv = TestServer::spawn(SECRET, store).await;

    let client = reqwest::Client::new();

    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);
    let res = client
        .get(format!("{}/admin/users?q=vega", srv.base_url))
        .bearer_auth(admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Rosa Vega");

    let editor = mint_jwt(SECRET, "editor-1", &["editor"]);
    let res = client
        .get(format!("{}/admin/users?q=vega", srv.base_url))
        .bearer_auth(editor)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_body_fields_are_named() {
    let srv = TestServer::spawn(SECRET, store_with(vec![])).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("user_id"), "message: {message}");
    assert!(message.contains("role"), "message: {message}");
}

#[tokio::test]
async fn unknown_roles_are_rejected_even_for_admins() {
    let store = store_with(vec![account("u-1", "Rosa Vega", &[])]);
    let srv = TestServer::spawn(SECRET, store).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "user_id": "u-1", "role": "captain" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn mutating_an_unknown_account_is_not_found() {
    let srv = TestServer::spawn(SECRET, store_with(vec![])).await;
    let admin = mint_jwt(SECRET, "admin-1", &["admin"]);

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/collections/nccp/roles", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "user_id": "ghost", "role": "curator" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
