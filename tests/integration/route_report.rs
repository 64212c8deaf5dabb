//! End-to-end tests for `info()` / `text()` against a mock host server.
//!
//! Covers sorted structured output, auth resolution in all three modes
//! (explicit strategy, explicit disable, server-wide default), scope clause
//! composition, field omission, and error propagation.

use super::test_utils::{
    fixture_server, line_containing, scoped_server, AuthMode, FailingServer, SharedSink,
};
use routeview::error::RouteViewError;
use routeview::plugin::register_with_sink;
use routeview::route::{Label, ScopeRule};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_info_returns_rows_sorted_by_path() {
    let server = fixture_server(AuthMode::None);
    let reporter =
        register_with_sink(server, json!({ "showStart": false }), SharedSink::default()).unwrap();

    let info = reporter.info().unwrap();
    assert_eq!(info.len(), 1);
    let paths: Vec<&str> = info[0].routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/all",
            "/api",
            "/apost/{foo}/comment/{another}",
            "/hi",
            "/post/{id}"
        ]
    );
    assert_eq!(info[0].routes[0].description, "main index");
    assert_eq!(info[0].routes[0].method, "GET");
    assert_eq!(info[0].routes[5].method, "DELETE");
    assert_eq!(info[0].routes[2].description, "api routes");
}

#[test]
fn test_auth_omitted_entirely_when_flag_off() {
    let server = fixture_server(AuthMode::Strategy);
    let reporter =
        register_with_sink(server, json!({ "showStart": false }), SharedSink::default()).unwrap();

    let info = reporter.info().unwrap();
    let json = serde_json::to_value(&info).unwrap();
    for row in json[0]["routes"].as_array().unwrap() {
        let obj = row.as_object().unwrap();
        assert!(!obj.contains_key("auth"));
        assert!(!obj.contains_key("scope"));
    }
}

#[test]
fn test_explicit_strategy_and_explicit_disable() {
    let server = fixture_server(AuthMode::Strategy);
    let reporter = register_with_sink(
        server,
        json!({ "showAuth": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    let info = reporter.info().unwrap();
    let routes = &info[0].routes;
    // "/" has auth explicitly disabled.
    assert_eq!(routes[0].auth, Some(Label::None));
    for row in &routes[1..] {
        assert_eq!(row.auth, Some(Label::Value("findme".to_string())), "{}", row.path);
    }

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json[0]["routes"][0]["auth"], json!(false));
    assert_eq!(json[0]["routes"][4]["auth"], json!("findme"));
}

#[test]
fn test_server_default_strategy_is_inherited() {
    let server = fixture_server(AuthMode::ServerDefault);
    let reporter = register_with_sink(
        server,
        json!({ "showAuth": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    let info = reporter.info().unwrap();
    let routes = &info[0].routes;
    // Explicit disable still beats the server-wide default.
    assert_eq!(routes[0].auth, Some(Label::None));
    // Everything else inherits "findme".
    assert_eq!(routes[4].path, "/hi");
    assert_eq!(routes[4].auth, Some(Label::Value("findme".to_string())));
}

#[test]
fn test_no_effective_strategy_anywhere() {
    let server = fixture_server(AuthMode::None);
    let reporter = register_with_sink(
        server,
        json!({ "showAuth": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    for row in &reporter.info().unwrap()[0].routes {
        assert_eq!(row.auth, Some(Label::None), "{}", row.path);
    }
}

#[test]
fn test_scope_clause_composition() {
    let server = scoped_server(ScopeRule {
        required: vec!["tester1".to_string()],
        forbidden: vec!["tester3".to_string()],
        selection: vec!["tester2".to_string()],
    });
    let reporter = register_with_sink(
        server,
        json!({ "showScope": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    let info = reporter.info().unwrap();
    assert_eq!(
        info[0].routes[0].scope,
        Some(Label::Value("+tester1, !tester3, tester2".to_string()))
    );

    let text = reporter.text().unwrap();
    assert!(text.contains("+tester1, !tester3, tester2"));
}

#[test]
fn test_scope_none_when_rule_lists_empty() {
    let server = scoped_server(ScopeRule::default());
    let reporter = register_with_sink(
        server,
        json!({ "showScope": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    let info = reporter.info().unwrap();
    assert_eq!(info[0].routes[0].scope, Some(Label::None));
}

#[test]
fn test_text_with_auth_marks_unauthenticated_routes() {
    let server = fixture_server(AuthMode::Strategy);
    let reporter = register_with_sink(
        server,
        json!({ "showAuth": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    let text = reporter.text().unwrap();
    let index_line = line_containing(&text, &["none", "main index"]).expect("index row");
    assert!(index_line.find("none").unwrap() < index_line.find("main index").unwrap());
    assert!(line_containing(&text, &["findme", "api routes"]).is_some());
    assert!(line_containing(&text, &["/hi", "findme"]).is_some());
    assert!(line_containing(&text, &["DELETE", "post"]).is_some());
}

#[test]
fn test_text_without_auth_has_no_none_marker() {
    let server = fixture_server(AuthMode::None);
    let reporter =
        register_with_sink(server, json!({ "showStart": false }), SharedSink::default()).unwrap();

    let text = reporter.text().unwrap();
    assert!(line_containing(&text, &["none", "main index"]).is_none());
    assert!(text.contains("http://localhost:3000"));
}

#[test]
fn test_info_is_idempotent() {
    let server = fixture_server(AuthMode::Strategy);
    let reporter = register_with_sink(
        server,
        json!({ "showAuth": true, "showScope": true, "showStart": false }),
        SharedSink::default(),
    )
    .unwrap();

    let first = reporter.info().unwrap();
    let second = reporter.info().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_table_access_failure_propagates() {
    let server = Arc::new(FailingServer::default());
    let reporter =
        register_with_sink(server, json!({ "showStart": false }), SharedSink::default()).unwrap();

    assert!(matches!(
        reporter.info(),
        Err(RouteViewError::TableAccess(_))
    ));
    assert!(matches!(
        reporter.text(),
        Err(RouteViewError::TableAccess(_))
    ));
}
