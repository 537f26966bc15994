//! Integration tests for the PESCE backend.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::{multipart, Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::auth::testing::ManualClock;
use crate::auth::AuthService;
use crate::config::{Config, LogFormat, DEFAULT_MAX_UPLOAD_BYTES};
use crate::db::{Repository, GALLERY_FILE, UPCOMING_EVENTS_FILE};
use crate::{create_router, AppState};

const ADMIN_USER: &str = "admin";
const ADMIN_PASSWORD: &str = "correct-horse";

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    token: String,
    clock: Arc<ManualClock>,
    data_dir: PathBuf,
    public_dir: PathBuf,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let public_dir = temp_dir.path().join("public");

        let config = Config {
            data_dir: data_dir.clone(),
            public_dir: public_dir.clone(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            admin_username: ADMIN_USER.to_string(),
            admin_password: Some(ADMIN_PASSWORD.to_string()),
            token_secret: Some("test-secret".to_string()),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        };

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let auth = Arc::new(AuthService::new(
            ADMIN_USER,
            Some(ADMIN_PASSWORD.to_string()),
            "test-secret",
            clock.clone(),
        ));

        crate::db::init_data_dir(&data_dir)
            .await
            .expect("Failed to init data dir");
        let state = AppState {
            repo: Arc::new(Repository::new(&data_dir)),
            auth,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let client = Client::new();
        let login: Value = client
            .post(format!("{}/api/auth/login", base_url))
            .json(&json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let token = login["data"]["token"].as_str().unwrap().to_string();

        TestFixture {
            client,
            base_url,
            token,
            clock,
            data_dir,
            public_dir,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn put(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .unwrap()
    }

    fn read_data_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.data_dir.join(name)).unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/health").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

// ==================== AUTH ====================

#[tokio::test]
async fn test_login_wrong_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": ADMIN_USER, "password": "nope" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_token_expires_after_three_hours() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let issued_at = body["data"]["issuedAt"].as_i64().unwrap();
    let expires_at = body["data"]["expiresAt"].as_i64().unwrap();
    assert_eq!(expires_at - issued_at, 3 * 60 * 60);
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // Verify immediately
    let resp = fixture
        .client
        .post(fixture.url("/api/auth/verify"))
        .json(&json!({ "token": token }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["username"], ADMIN_USER);
    assert_eq!(body["data"]["expiresAt"], expires_at);

    // Past expiry
    fixture.clock.advance(Duration::hours(3) + Duration::seconds(1));
    let resp = fixture
        .client
        .get(fixture.url("/api/auth/verify"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_verify_rejects_garbage_token() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/verify"))
        .json(&json!({ "token": "abc.def.ghi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .client
        .get(fixture.url("/api/auth/verify"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_mutations_require_token() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({ "title": "X", "date": "2024-01-01", "description": "Y" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .client
        .delete(fixture.url("/api/blogs/1"))
        .bearer_auth("forged")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Nothing was removed
    let resp = fixture.get("/api/blogs/1").await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_expired_token_cannot_mutate() {
    let fixture = TestFixture::new().await;
    fixture.clock.advance(Duration::hours(4));

    let resp = fixture
        .put("/api/settings", json!({ "siteTitle": "Changed" }))
        .await;
    assert_eq!(resp.status(), 401);
}

// ==================== EVENTS ====================

#[tokio::test]
async fn test_events_seeded_on_first_read() {
    let fixture = TestFixture::new().await;
    assert!(!fixture.data_dir.join(UPCOMING_EVENTS_FILE).exists());

    let resp = fixture.get("/api/events").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(!body["data"]["upcoming"].as_array().unwrap().is_empty());
    assert!(body["data"]["past"].is_array());

    assert!(fixture.data_dir.join(UPCOMING_EVENTS_FILE).exists());
}

#[tokio::test]
async fn test_create_event_generates_next_id() {
    let fixture = TestFixture::new().await;

    let body: Value = fixture.get("/api/events").await.json().await.unwrap();
    let max_id = body["data"]["upcoming"]
        .as_array()
        .unwrap()
        .iter()
        .chain(body["data"]["past"].as_array().unwrap())
        .filter_map(|e| e["id"].as_u64())
        .max()
        .unwrap_or(0);

    let resp = fixture
        .post(
            "/api/events",
            json!({ "title": "X", "date": "2024-01-01", "description": "Y" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_u64().unwrap();
    assert_eq!(id, max_id + 1);

    // Retrievable
    let resp = fixture.get(&format!("/api/events/{}", id)).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["title"], "X");
    assert_eq!(body["data"]["registrationRequired"], false);
}

#[tokio::test]
async fn test_create_event_in_empty_file_starts_at_one() {
    let fixture = TestFixture::new().await;
    std::fs::write(fixture.data_dir.join(UPCOMING_EVENTS_FILE), "[]").unwrap();
    std::fs::write(fixture.data_dir.join("past-events.json"), "[]").unwrap();

    let resp = fixture
        .post(
            "/api/events",
            json!({ "title": "X", "date": "2024-01-01", "description": "Y" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["id"], 1);
}

#[tokio::test]
async fn test_create_event_missing_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post("/api/events", json!({ "title": "X" })).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("date"));
    assert!(message.contains("description"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .bearer_auth(&fixture.token)
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_event_id_mismatch_writes_nothing() {
    let fixture = TestFixture::new().await;
    fixture.get("/api/events").await;
    let before = fixture.read_data_file(UPCOMING_EVENTS_FILE);

    let resp = fixture
        .put("/api/events/1", json!({ "id": 2, "title": "Hijack" }))
        .await;
    assert_eq!(resp.status(), 400);
    assert_eq!(fixture.read_data_file(UPCOMING_EVENTS_FILE), before);
}

#[tokio::test]
async fn test_update_event_merges_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .put("/api/events/1", json!({ "id": 1, "location": "Main Hall" }))
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["location"], "Main Hall");
    assert_eq!(body["data"]["title"], "Intro to Embedded Systems Workshop");
}

#[tokio::test]
async fn test_update_missing_event_is_not_found() {
    let fixture = TestFixture::new().await;

    let resp = fixture.put("/api/events/999", json!({ "title": "X" })).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_missing_event_leaves_collection() {
    let fixture = TestFixture::new().await;
    let before: Value = fixture.get("/api/events").await.json().await.unwrap();

    let resp = fixture.delete("/api/events/999").await;
    assert_eq!(resp.status(), 404);

    let after: Value = fixture.get("/api/events").await.json().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_event() {
    let fixture = TestFixture::new().await;

    let resp = fixture.delete("/api/events/2").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["id"], 2);

    let resp = fixture.get("/api/events/2").await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_move_event_to_past() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post("/api/events/move-to-past/1", json!({})).await;
    assert_eq!(resp.status(), 200);

    let body: Value = fixture.get("/api/events").await.json().await.unwrap();
    let upcoming = body["data"]["upcoming"].as_array().unwrap();
    let past = body["data"]["past"].as_array().unwrap();
    assert!(upcoming.iter().all(|e| e["id"] != 1));
    assert!(past.iter().any(|e| e["id"] == 1));

    // Already moved
    let resp = fixture.post("/api/events/move-to-past/1", json!({})).await;
    assert_eq!(resp.status(), 404);

    // Still reachable by id
    let resp = fixture.get("/api/events/1").await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_invalid_path_id_is_bad_request() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/api/events/not-a-number").await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}

// ==================== CHAPTERS ====================

#[tokio::test]
async fn test_chapter_crud() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post(
            "/api/chapters",
            json!({
                "id": "signal-processing",
                "name": "IEEE Signal Processing Society",
                "description": "DSP and communications",
                "projects": [{ "title": "SDR Receiver" }]
            }),
        )
        .await;
    assert_eq!(resp.status(), 201);

    // Duplicate slug
    let resp = fixture
        .post(
            "/api/chapters",
            json!({ "id": "signal-processing", "name": "Dup", "description": "Dup" }),
        )
        .await;
    assert_eq!(resp.status(), 409);

    let body: Value = fixture.get("/api/chapters").await.json().await.unwrap();
    assert_eq!(
        body["data"]["signal-processing"]["projects"][0]["title"],
        "SDR Receiver"
    );

    let resp = fixture
        .put(
            "/api/chapters/signal-processing",
            json!({ "id": "other", "name": "Renamed" }),
        )
        .await;
    assert_eq!(resp.status(), 400);

    let resp = fixture
        .put(
            "/api/chapters/signal-processing",
            json!({ "name": "Renamed" }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Renamed");
    assert_eq!(body["data"]["description"], "DSP and communications");

    let resp = fixture.delete("/api/chapters/signal-processing").await;
    assert_eq!(resp.status(), 200);
    let resp = fixture.get("/api/chapters/signal-processing").await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_create_chapter_requires_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post("/api/chapters", json!({ "name": "No slug" }))
        .await;
    assert_eq!(resp.status(), 400);
}

// ==================== BLOGS ====================

#[tokio::test]
async fn test_blog_crud() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post(
            "/api/blogs",
            json!({
                "title": "Hackathon Recap",
                "content": "<p>It was great.</p>",
                "author": "Web Team"
            }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let id = body["data"]["id"].as_u64().unwrap();
    assert_eq!(id, 2);
    assert_eq!(body["data"]["published"], true);
    assert!(!body["data"]["date"].as_str().unwrap().is_empty());

    let resp = fixture
        .put(&format!("/api/blogs/{}", id), json!({ "featured": true }))
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["featured"], true);
    assert_eq!(body["data"]["content"], "<p>It was great.</p>");

    let resp = fixture.delete(&format!("/api/blogs/{}", id)).await;
    assert_eq!(resp.status(), 200);
    let resp = fixture.delete(&format!("/api/blogs/{}", id)).await;
    assert_eq!(resp.status(), 404);
}

// ==================== GALLERY ====================

#[tokio::test]
async fn test_gallery_update_without_images() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post(
            "/api/gallery",
            json!({
                "title": "Robotics Expo",
                "category": "events",
                "images": ["/images/gallery/events/a.jpg", "/images/gallery/events/b.jpg"]
            }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("gallery-"));
    assert_eq!(body["data"]["thumbnail"], "/images/gallery/events/a.jpg");

    let resp = fixture
        .put(
            &format!("/api/gallery/{}", id),
            json!({ "title": "Robotics Expo 2024" }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let stored: Value = serde_json::from_str(&fixture.read_data_file(GALLERY_FILE)).unwrap();
    let item = stored
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == id.as_str())
        .unwrap();
    assert_eq!(item["images"], json!([]));
    assert_eq!(item["thumbnail"], "/images/gallery/events/a.jpg");
    assert_eq!(item["title"], "Robotics Expo 2024");
}

#[tokio::test]
async fn test_gallery_requires_title_and_category() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post("/api/gallery", json!({ "title": "x" })).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("category"));
}

// ==================== TEAM ====================

#[tokio::test]
async fn test_team_members_and_faculty() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post(
            "/api/team",
            json!({ "name": "Asha", "position": "Webmaster", "department": "CSE" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let member_id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(member_id.starts_with("member-"));

    let resp = fixture
        .post(
            "/api/team/faculty",
            json!({ "name": "Dr. Rao", "position": "Advisor" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let faculty_id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(faculty_id.starts_with("faculty-"));

    let resp = fixture
        .put(
            &format!("/api/team/members/{}", member_id),
            json!({ "position": "Vice Chair" }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = fixture.get("/api/team").await.json().await.unwrap();
    let member = body["data"]["members"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == member_id.as_str())
        .unwrap()
        .clone();
    assert_eq!(member["position"], "Vice Chair");
    assert_eq!(member["department"], "CSE");

    let resp = fixture
        .delete(&format!("/api/team/faculty/{}", faculty_id))
        .await;
    assert_eq!(resp.status(), 200);
    let resp = fixture.delete("/api/team/members/member-missing").await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_team_init_keeps_existing_data() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post("/api/team/init", json!({})).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["initialized"], false);
    assert!(!body["data"]["team"]["members"]
        .as_array()
        .unwrap()
        .is_empty());
}

// ==================== RESOURCES ====================

#[tokio::test]
async fn test_resource_crud() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post(
            "/api/resources",
            json!({
                "title": "Rust Book",
                "type": "book",
                "link": "https://doc.rust-lang.org/book/",
                "tags": ["rust"]
            }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 36);
    assert_eq!(body["data"]["type"], "book");

    let resp = fixture.get(&format!("/api/resources/{}", id)).await;
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .put(&format!("/api/resources/{}", id), json!({ "link": "" }))
        .await;
    assert_eq!(resp.status(), 400);

    let resp = fixture.delete(&format!("/api/resources/{}", id)).await;
    assert_eq!(resp.status(), 200);
}

// ==================== SETTINGS & CONTACT ====================

#[tokio::test]
async fn test_settings_update() {
    let fixture = TestFixture::new().await;

    let body: Value = fixture.get("/api/settings").await.json().await.unwrap();
    let mut settings = body["data"].clone();
    settings["membershipFee"] = json!("INR 1800");

    let resp = fixture.put("/api/settings", settings.clone()).await;
    assert_eq!(resp.status(), 200);

    let body: Value = fixture.get("/api/settings").await.json().await.unwrap();
    assert_eq!(body["data"], settings);

    let resp = fixture.put("/api/settings", json!({ "siteTitle": "" })).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_contact_update() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .put(
            "/api/contact",
            json!({
                "address": "New Campus Road",
                "email": "contact@example.org",
                "map": { "lat": 12.5, "lng": 76.9, "zoom": 14 }
            }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = fixture.get("/api/contact").await.json().await.unwrap();
    assert_eq!(body["data"]["address"], "New Campus Road");
    assert_eq!(body["data"]["map"]["zoom"], 14);

    let resp = fixture.put("/api/contact", json!({ "phone": "123" })).await;
    assert_eq!(resp.status(), 400);
}

// ==================== UPLOADS ====================

#[tokio::test]
async fn test_upload_gallery_image() {
    let fixture = TestFixture::new().await;

    let part = multipart::Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name("group-photo.png")
        .mime_str("image/png")
        .unwrap();
    let form = multipart::Form::new()
        .text("category", "Tech Fest")
        .part("file", part);

    let resp = fixture
        .client
        .post(fixture.url("/api/upload/gallery"))
        .bearer_auth(&fixture.token)
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    let path = body["data"]["path"].as_str().unwrap().to_string();
    assert!(path.starts_with("/images/gallery/tech-fest/"));
    assert!(path.ends_with("-group-photo.png"));
    assert_eq!(body["data"]["size"], 4);

    let on_disk = fixture.public_dir.join(path.trim_start_matches('/'));
    assert_eq!(std::fs::read(on_disk).unwrap(), vec![0x89, b'P', b'N', b'G']);

    // Served back as a static file
    let resp = fixture.get(&path).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_upload_team_rejects_unknown_folder() {
    let fixture = TestFixture::new().await;

    let part = multipart::Part::bytes(vec![1, 2, 3])
        .file_name("photo.jpg")
        .mime_str("image/jpeg")
        .unwrap();
    let form = multipart::Form::new()
        .text("type", "alumni")
        .part("file", part);

    let resp = fixture
        .client
        .post(fixture.url("/api/upload/team"))
        .bearer_auth(&fixture.token)
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_upload_without_file() {
    let fixture = TestFixture::new().await;

    let form = multipart::Form::new().text("type", "faculty");
    let resp = fixture
        .client
        .post(fixture.url("/api/upload/team"))
        .bearer_auth(&fixture.token)
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_upload_requires_token() {
    let fixture = TestFixture::new().await;

    let part = multipart::Part::bytes(vec![1, 2, 3]).file_name("photo.jpg");
    let form = multipart::Form::new().part("file", part);
    let resp = fixture
        .client
        .post(fixture.url("/api/upload/team"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}
