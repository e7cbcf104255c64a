mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_root_redirects_to_list() {
    let server = common::test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/urls");
}

#[tokio::test]
async fn test_anonymous_create_is_forbidden() {
    let server = common::test_server();

    let response = server
        .post("/urls/new")
        .form(&[("long_url", "http://example.com")])
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_anonymous_new_form_redirects_to_login() {
    let server = common::test_server();

    let response = server.get("/urls/new").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/login");
}

#[tokio::test]
async fn test_create_without_url_rerenders_form() {
    let server = common::test_server();
    let cookie = common::register(&server, "a@x.com", "pw1").await;

    let response = server
        .post("/urls/new")
        .add_header("cookie", cookie.as_str())
        .form(&[("long_url", "")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Enter a URL to shorten."));
}

#[tokio::test]
async fn test_create_and_show_link() {
    let server = common::test_server();
    let cookie = common::register(&server, "a@x.com", "pw1").await;

    let code = common::create_link(&server, &cookie, "http://example.com").await;
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let detail = server
        .get(&format!("/urls/{code}"))
        .add_header("cookie", cookie.as_str())
        .await;

    detail.assert_status_ok();
    let body = detail.text();
    assert!(body.contains("http://example.com"));
    // The owner sees the edit controls.
    assert!(body.contains("Update"));
}

#[tokio::test]
async fn test_unknown_code_renders_not_found_view() {
    let server = common::test_server();

    let response = server.get("/urls/nosuch").await;

    // A navigation dead end, not a protocol error.
    response.assert_status_ok();
    assert!(response.text().contains("no short URL with code"));
}

#[tokio::test]
async fn test_list_shows_only_own_links() {
    let server = common::test_server();
    let alice = common::register(&server, "alice@x.com", "pw1").await;
    let bob = common::register(&server, "bob@x.com", "pw2").await;

    let a1 = common::create_link(&server, &alice, "http://alice-one.com").await;
    let b1 = common::create_link(&server, &bob, "http://bob-one.com").await;
    let a2 = common::create_link(&server, &alice, "http://alice-two.com").await;

    let list = server.get("/urls").add_header("cookie", alice.as_str()).await;
    let body = list.text();

    assert!(body.contains(&a1));
    assert!(body.contains(&a2));
    assert!(!body.contains(&b1));

    // Insertion order is preserved.
    assert!(body.find(&a1).unwrap() < body.find(&a2).unwrap());
}

#[tokio::test]
async fn test_anonymous_list_shows_no_links() {
    let server = common::test_server();
    let cookie = common::register(&server, "a@x.com", "pw1").await;
    let code = common::create_link(&server, &cookie, "http://example.com").await;

    let list = server.get("/urls").await;

    list.assert_status_ok();
    assert!(!list.text().contains(&code));
}

#[tokio::test]
async fn test_update_by_owner() {
    let server = common::test_server();
    let cookie = common::register(&server, "a@x.com", "pw1").await;
    let code = common::create_link(&server, &cookie, "http://old.com").await;

    let response = server
        .post(&format!("/urls/{code}"))
        .add_header("cookie", cookie.as_str())
        .form(&[("long_url", "http://new.com")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("http://new.com"));

    let detail = server.get(&format!("/urls/{code}")).await;
    assert!(detail.text().contains("http://new.com"));
}

#[tokio::test]
async fn test_update_by_non_owner_is_forbidden_and_unapplied() {
    let server = common::test_server();
    let owner = common::register(&server, "owner@x.com", "pw1").await;
    let intruder = common::register(&server, "intruder@x.com", "pw2").await;
    let code = common::create_link(&server, &owner, "http://original.com").await;

    let response = server
        .post(&format!("/urls/{code}"))
        .add_header("cookie", intruder.as_str())
        .form(&[("long_url", "http://evil.com")])
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let detail = server.get(&format!("/urls/{code}")).await;
    assert!(detail.text().contains("http://original.com"));
}

#[tokio::test]
async fn test_update_unknown_code_is_not_found() {
    let server = common::test_server();
    let cookie = common::register(&server, "a@x.com", "pw1").await;

    let response = server
        .post("/urls/nosuch")
        .add_header("cookie", cookie.as_str())
        .form(&[("long_url", "http://x.com")])
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_by_owner() {
    let server = common::test_server();
    let cookie = common::register(&server, "a@x.com", "pw1").await;
    let code = common::create_link(&server, &cookie, "http://example.com").await;

    let response = server
        .post(&format!("/urls/{code}/delete"))
        .add_header("cookie", cookie.as_str())
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/urls");

    let detail = server.get(&format!("/urls/{code}")).await;
    assert!(detail.text().contains("no short URL with code"));
}

#[tokio::test]
async fn test_delete_by_non_owner_is_forbidden_and_unapplied() {
    let server = common::test_server();
    let owner = common::register(&server, "owner@x.com", "pw1").await;
    let intruder = common::register(&server, "intruder@x.com", "pw2").await;
    let code = common::create_link(&server, &owner, "http://example.com").await;

    let response = server
        .post(&format!("/urls/{code}/delete"))
        .add_header("cookie", intruder.as_str())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let detail = server.get(&format!("/urls/{code}")).await;
    assert!(detail.text().contains("http://example.com"));
}

#[tokio::test]
async fn test_export_dumps_whole_table() {
    let server = common::test_server();
    let alice = common::register(&server, "alice@x.com", "pw1").await;
    let bob = common::register(&server, "bob@x.com", "pw2").await;

    let a1 = common::create_link(&server, &alice, "http://alice.com").await;
    let b1 = common::create_link(&server, &bob, "http://bob.com").await;

    let response = server.get("/urls.json").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    // Insertion order, full records including owner ids.
    assert_eq!(items[0]["code"], a1.as_str());
    assert_eq!(items[0]["long_url"], "http://alice.com");
    assert!(items[0]["owner_id"].is_string());
    assert_eq!(items[1]["code"], b1.as_str());
}

/// End-to-end ownership scenario: register, create, inspect, log out, and
/// verify an anonymous delete attempt bounces off without touching the record.
#[tokio::test]
async fn test_full_ownership_scenario() {
    let server = common::test_server();

    let cookie = common::register(&server, "a@x.com", "pw1").await;
    let code = common::create_link(&server, &cookie, "http://example.com").await;

    let detail = server
        .get(&format!("/urls/{code}"))
        .add_header("cookie", cookie.as_str())
        .await;
    assert!(detail.text().contains("http://example.com"));

    server
        .post("/logout")
        .add_header("cookie", cookie.as_str())
        .await;

    let response = server.post(&format!("/urls/{code}/delete")).await;
    response.assert_status(StatusCode::FORBIDDEN);

    let detail = server.get(&format!("/urls/{code}")).await;
    assert!(detail.text().contains("http://example.com"));
}
