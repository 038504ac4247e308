//! API gateway for the admin REST service.
//!
//! Single abstraction for talking to the backend: every request gets the
//! bearer token attached from localStorage, every GET accepts an external
//! abort signal, and every response is unwrapped from the
//! `{ success: bool, ... }` envelope. An aborted request is classified as
//! [`ApiError::Cancelled`], never as a processing failure.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::AbortSignal;

use crate::config::{API_BASE_URL, TOKEN_KEY};
use crate::core::error::ApiError;
use crate::utils::dom;

/// The stored bearer token, if the operator is logged in.
pub fn auth_token() -> Option<String> {
    let storage = dom::local_storage()?;
    storage.get_item(TOKEN_KEY).ok()?
}

fn full_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn classify(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Cancelled,
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

async fn unwrap_response(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    let body: Value = response.json().await.map_err(classify)?;
    unwrap_envelope(body)
}

/// Check the `{ success, ... }` envelope and hand back the full body.
///
/// `success: false` (or a missing flag) is an API-level error; the server's
/// `message` field is used as the error text when present.
pub fn unwrap_envelope(body: Value) -> Result<Value, ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(true) {
        Ok(body)
    } else {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request was not successful")
            .to_string();
        Err(ApiError::Api(message))
    }
}

/// Pull one named field out of an envelope body and decode it.
pub fn extract<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T, ApiError> {
    let value = body
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| ApiError::Decode(format!("response is missing '{}'", field)))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a whole envelope body into a typed payload.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET <base><path>` with optional abort signal.
pub async fn get(path: &str, signal: Option<&AbortSignal>) -> Result<Value, ApiError> {
    let response = with_auth(Request::get(&full_url(path)))
        .abort_signal(signal)
        .send()
        .await
        .map_err(classify)?;
    unwrap_response(response).await
}

/// `POST <base><path>` with a JSON body.
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = with_auth(Request::post(&full_url(path)))
        .json(body)
        .map_err(classify)?
        .send()
        .await
        .map_err(classify)?;
    unwrap_response(response).await
}

/// `PUT <base><path>` with a JSON body.
pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let response = with_auth(Request::put(&full_url(path)))
        .json(body)
        .map_err(classify)?
        .send()
        .await
        .map_err(classify)?;
    unwrap_response(response).await
}

/// `DELETE <base><path>`.
pub async fn delete(path: &str) -> Result<Value, ApiError> {
    let response = with_auth(Request::delete(&full_url(path)))
        .send()
        .await
        .map_err(classify)?;
    unwrap_response(response).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_envelope_success() {
        let body = json!({ "success": true, "sellers": [] });
        assert!(unwrap_envelope(body).is_ok());
    }

    #[test]
    fn test_envelope_failure_uses_server_message() {
        let err = unwrap_envelope(json!({ "success": false, "message": "bad token" }))
            .expect_err("should fail");
        assert_eq!(err.to_string(), "API error: bad token");
    }

    #[test]
    fn test_envelope_missing_flag_is_failure() {
        assert!(unwrap_envelope(json!({ "sellers": [] })).is_err());
    }

    #[test]
    fn test_extract_named_field() {
        let body = json!({ "success": true, "plans": [{ "_id": "p1", "name": "Basic",
            "price": 9.0, "durationDays": 30 }] });
        let plans: Vec<crate::models::Plan> = extract(body, "plans").expect("should extract");
        assert_eq!(plans[0].id, "p1");
    }

    #[test]
    fn test_extract_missing_field() {
        let err = extract::<Vec<String>>(json!({ "success": true }), "plans")
            .expect_err("should fail");
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
