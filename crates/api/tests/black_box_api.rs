use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use rollcall_api::app::services::AppServices;
use rollcall_core::{User, UserId, UserPatch};
use rollcall_store::{StoreError, UserStore};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the real router over the in-memory store on an ephemeral port.
    async fn spawn() -> Self {
        Self::spawn_with(Arc::new(AppServices::in_memory())).await
    }

    async fn spawn_with(services: Arc<AppServices>) -> Self {
        let app = rollcall_api::app::build_app(services);
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

/// Store whose every operation fails, for exercising the 500 paths.
struct FailingUserStore;

#[async_trait::async_trait]
impl UserStore for FailingUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn insert(&self, _name: String, _rollno: i64) -> Result<User, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn upsert(&self, _id: UserId, _patch: UserPatch) -> Result<User, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }
}

async fn list_users(client: &reqwest::Client, base_url: &str) -> Vec<Value> {
    let res = client.get(base_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn list_on_empty_collection_is_an_empty_array() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.base_url.as_str()).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn created_user_appears_in_list() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/create", srv.base_url))
        .json(&json!({ "name": "Ada", "rollno": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "created");

    let users = list_users(&client, &srv.base_url).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Ada");
    assert_eq!(users[0]["rollno"], 1);
    assert!(users[0]["id"].is_string());
}

#[tokio::test]
async fn update_of_missing_id_creates_a_record_with_a_fresh_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let requested = UserId::new();
    let res = client
        .patch(format!("{}/update/{}", srv.base_url, requested))
        .json(&json!({ "name": "Ghost", "rollno": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let users = list_users(&client, &srv.base_url).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Ghost");
    assert_eq!(users[0]["rollno"], 7);
    // The store assigns its own id; the path id is not adopted.
    assert_ne!(users[0]["id"], json!(requested.to_string()));
}

#[tokio::test]
async fn partial_update_changes_only_the_named_field() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/create", srv.base_url))
        .json(&json!({ "name": "Ada", "rollno": 42 }))
        .send()
        .await
        .unwrap();
    let users = list_users(&client, &srv.base_url).await;
    let id = users[0]["id"].as_str().unwrap().to_string();

    let res = client
        .patch(format!("{}/update/{}", srv.base_url, id))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    // The body echoes the submitted patch only, not the stored record.
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "name": "X" }));

    let users = list_users(&client, &srv.base_url).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], json!(id));
    assert_eq!(users[0]["name"], "X");
    assert_eq!(users[0]["rollno"], 42);
}

#[tokio::test]
async fn create_failure_is_500_with_empty_body() {
    let services = Arc::new(AppServices::new(Arc::new(FailingUserStore)));
    let srv = TestServer::spawn_with(services).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/create", srv.base_url))
        .json(&json!({ "name": "Ada", "rollno": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn list_failure_is_500_with_error_text() {
    let services = Arc::new(AppServices::new(Arc::new(FailingUserStore)));
    let srv = TestServer::spawn_with(services).await;
    let client = reqwest::Client::new();

    let res = client.get(srv.base_url.as_str()).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "error");
}

#[tokio::test]
async fn update_failure_is_500_with_empty_body() {
    let services = Arc::new(AppServices::new(Arc::new(FailingUserStore)));
    let srv = TestServer::spawn_with(services).await;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/update/{}", srv.base_url, UserId::new()))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn concurrent_creates_both_succeed_and_both_appear() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let create = |name: &'static str, rollno: i64| {
        let client = client.clone();
        let url = format!("{}/create", srv.base_url);
        async move {
            client
                .post(url)
                .json(&json!({ "name": name, "rollno": rollno }))
                .send()
                .await
                .unwrap()
        }
    };

    let (a, b) = tokio::join!(create("Ada", 1), create("Grace", 2));
    assert_eq!(a.status(), StatusCode::OK);
    assert_eq!(b.status(), StatusCode::OK);

    let users = list_users(&client, &srv.base_url).await;
    assert_eq!(users.len(), 2);
    let names: Vec<&str> = users.iter().filter_map(|u| u["name"].as_str()).collect();
    assert!(names.contains(&"Ada"));
    assert!(names.contains(&"Grace"));
}

#[tokio::test]
async fn malformed_update_id_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .patch(format!("{}/update/not-a-uuid", srv.base_url))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn unknown_patch_field_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/create", srv.base_url))
        .json(&json!({ "name": "Ada", "rollno": 1 }))
        .send()
        .await
        .unwrap();
    let users = list_users(&client, &srv.base_url).await;
    let id = users[0]["id"].as_str().unwrap().to_string();

    // `id` is not in the allow-list of updatable fields.
    let res = client
        .patch(format!("{}/update/{}", srv.base_url, id))
        .json(&json!({ "id": UserId::new().to_string() }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_returns_ok() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}
