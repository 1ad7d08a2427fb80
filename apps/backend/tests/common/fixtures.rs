//! Fixtures and request factories shared by the API tests.

use axum_test::TestServer;
use serde_json::{json, Map, Value};

use super::TestContext;

/// Register a user and return their bearer token.
pub async fn register(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": name }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

/// Create a collection and return its id.
pub async fn create_collection(server: &TestServer, token: &str, name: &str) -> String {
    let response = server
        .post("/api/collections")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(token),
        )
        .json(&json!({ "name": name }))
        .await;
    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

/// Seed `n` cards `(t0, d0) .. (tn, dn)` into a collection. The fixed
/// term/definition pairing lets tests reconstruct correct answers from
/// question halves alone.
pub async fn seed_cards(server: &TestServer, token: &str, collection_id: &str, n: usize) {
    for i in 0..n {
        let response = server
            .post("/api/cards")
            .add_header(
                axum::http::header::AUTHORIZATION,
                TestContext::auth_header_value(token),
            )
            .json(&json!({
                "collection_id": collection_id,
                "term": format!("t{i}"),
                "definition": format!("d{i}"),
            }))
            .await;
        assert_eq!(response.status_code(), 201);
    }
}

/// The term paired with a seeded definition ("d3" -> "t3").
pub fn term_for(definition: &str) -> String {
    definition.replacen('d', "t", 1)
}

/// Build correct answers for every question half of a generate response,
/// the way a client that knows the card pairing would.
pub fn correct_answers(exercises: &[Value]) -> Map<String, Value> {
    let mut answers = Map::new();
    for exercise in exercises {
        let id = exercise["id"].as_str().unwrap().to_string();
        let question = &exercise["question"];
        let answer = match question["kind"].as_str().unwrap() {
            "open" => json!({
                "kind": "open",
                "term": term_for(question["definition"].as_str().unwrap()),
            }),
            "choice" => json!({
                "kind": "choice",
                "term": term_for(question["definition"].as_str().unwrap()),
            }),
            "matching" => {
                let mut matches = Map::new();
                for definition in question["definitions"].as_array().unwrap() {
                    let definition = definition.as_str().unwrap();
                    matches.insert(definition.to_string(), json!(term_for(definition)));
                }
                json!({
                    "kind": "matching",
                    "matches": matches,
                    "group_id": question["group_id"],
                })
            }
            other => panic!("unexpected question kind {other}"),
        };
        answers.insert(id, answer);
    }
    answers
}

/// Generate-test request body.
pub fn generate_request(collection_id: &str, open: usize, choice: usize, matching: usize) -> Value {
    json!({
        "collection_id": collection_id,
        "open": open,
        "choice": choice,
        "matching": matching,
    })
}

/// Check-test request body.
pub fn check_request(test_id: &str, answers: Map<String, Value>) -> Value {
    json!({ "test_id": test_id, "answers": answers })
}
