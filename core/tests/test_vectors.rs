//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes call inputs, the expected request, a simulated
//! response, and either the expected result or the expected error kind. The
//! client is driven without a transport: `to_request` builds, the vector
//! supplies the response, `parse_response` decodes.

use std::fmt::Debug;

use likes_core::{
    parse_response, ApiClient, ApiError, Call, ClientConfig, HttpResponse, LikeType,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ApiClient<()> {
    ApiClient::new((), ClientConfig::new(BASE_URL))
}

fn like_type(input: &Value) -> LikeType {
    serde_json::from_value(input["type"].clone()).unwrap()
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check the request `call` builds and the outcome of parsing the case's
/// simulated response.
fn check_case<R>(case: &Value, call: Call<'_, (), R>)
where
    R: DeserializeOwned + PartialEq + Debug,
{
    let name = case["name"].as_str().unwrap();
    let expected_req = &case["expected_request"];

    // Verify build
    let req = call.to_request().unwrap();
    assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");

    let expected_headers: Vec<(String, String)> = expected_req["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");
    assert_eq!(req.body, expected_req["body"].as_str().unwrap(), "{name}: body");

    // Verify parse
    let response = simulated_response(case);
    let result = parse_response::<R>(call.method(), &response);

    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "Client" => {
                assert_eq!(err.status(), Some(response.status), "{name}: status");
                assert_eq!(
                    err.to_string(),
                    format!(
                        "Internal API server error. Wrong status code: {}. Content: {}",
                        response.status, response.body
                    ),
                    "{name}: message"
                );
            }
            "Decode" => assert!(matches!(err, ApiError::Decode { .. }), "{name}: expected Decode, got {err:?}"),
            "Parse" => assert!(matches!(err, ApiError::Parse(_)), "{name}: expected Parse, got {err:?}"),
            "Api" => assert!(matches!(err, ApiError::Api { .. }), "{name}: expected Api, got {err:?}"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    } else {
        let parsed = result.unwrap();
        let expected: R = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(parsed, expected, "{name}: parsed result");
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn add_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/add.json")) {
        let input = &case["input"];
        let mut call = c.likes().add(like_type(input), input["item_id"].as_i64().unwrap());
        if let Some(owner_id) = input["owner_id"].as_i64() {
            call = call.owner_id(owner_id);
        }
        if let Some(key) = input["access_key"].as_str() {
            call = call.access_key(key);
        }
        check_case(&case, call);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let input = &case["input"];
        let mut call = c.likes().delete(like_type(input), input["item_id"].as_i64().unwrap());
        if let Some(owner_id) = input["owner_id"].as_i64() {
            call = call.owner_id(owner_id);
        }
        check_case(&case, call);
    }
}

// ---------------------------------------------------------------------------
// GetList
// ---------------------------------------------------------------------------

#[test]
fn get_list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get_list.json")) {
        let input = &case["input"];
        let mut call = c.likes().get_list(like_type(input));
        if let Some(owner_id) = input["owner_id"].as_i64() {
            call = call.owner_id(owner_id);
        }
        if let Some(item_id) = input["item_id"].as_i64() {
            call = call.item_id(item_id);
        }
        check_case(&case, call);
    }
}

// ---------------------------------------------------------------------------
// IsLiked
// ---------------------------------------------------------------------------

#[test]
fn is_liked_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/is_liked.json")) {
        let input = &case["input"];
        let mut call = c.likes().is_liked(like_type(input), input["item_id"].as_i64().unwrap());
        if let Some(user_id) = input["user_id"].as_i64() {
            call = call.user_id(user_id);
        }
        if let Some(owner_id) = input["owner_id"].as_i64() {
            call = call.owner_id(owner_id);
        }
        check_case(&case, call);
    }
}
