//! HTTP Client Wrappers
//!
//! Frontend bindings to the backend `/todos` resource.

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::Serialize;
use std::fmt;

use crate::models::Todo;

/// Path of the todo collection, same-origin
const TODOS_ENDPOINT: &str = "/todos";

/// Classified transport failure, surfaced to the caller.
///
/// There is no retry and no recovery anywhere in the client; an error
/// aborts the operation that triggered the request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (DNS, connection, CORS, aborted)
    NetworkUnavailable(String),
    /// Server responded outside 200..300
    UnexpectedStatus(u16),
    /// Success status but the body did not decode as the expected JSON
    MalformedResponse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NetworkUnavailable(msg) => write!(f, "network unavailable: {}", msg),
            ApiError::UnexpectedStatus(status) => write!(f, "unexpected status: {}", status),
            ApiError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoBody<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
pub struct ToggleTodoBody {
    pub completed: bool,
}

// ========================
// Todo Operations
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let response = request::<()>(Method::GET, TODOS_ENDPOINT, None).await?;
    response
        .json()
        .await
        .map_err(|err| ApiError::MalformedResponse(err.to_string()))
}

pub async fn create_todo(title: &str) -> Result<(), ApiError> {
    // Response body is ignored; the caller refreshes the full list instead
    let body = CreateTodoBody { title };
    request(Method::POST, TODOS_ENDPOINT, Some(&body)).await?;
    Ok(())
}

pub async fn toggle_todo(id: u32, completed: bool) -> Result<(), ApiError> {
    let body = ToggleTodoBody { completed };
    request(Method::PATCH, &todo_endpoint(id), Some(&body)).await?;
    Ok(())
}

// ========================
// Transport Primitive
// ========================

/// Issue one JSON request and classify every failure mode.
///
/// A body, when present, is serialized as JSON and sent with a JSON
/// content-type. No timeout and no retry; the await resolves whenever
/// the browser settles the fetch.
async fn request<B: Serialize>(
    method: Method,
    endpoint: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let builder = RequestBuilder::new(endpoint).method(method);
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|err| ApiError::NetworkUnavailable(err.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|err| ApiError::NetworkUnavailable(err.to_string()))?;

    classify_status(response.status())?;
    Ok(response)
}

fn todo_endpoint(id: u32) -> String {
    format!("{}/{}", TODOS_ENDPOINT, id)
}

fn classify_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_shape() {
        let body = CreateTodoBody { title: "Wash car" };
        let json = serde_json::to_string(&body).expect("Serialize failed");
        assert_eq!(json, r#"{"title":"Wash car"}"#);
    }

    #[test]
    fn test_toggle_body_shape() {
        let body = ToggleTodoBody { completed: true };
        let json = serde_json::to_string(&body).expect("Serialize failed");
        assert_eq!(json, r#"{"completed":true}"#);
    }

    #[test]
    fn test_todo_endpoint() {
        assert_eq!(todo_endpoint(7), "/todos/7");
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), Ok(()));
        assert_eq!(classify_status(204), Ok(()));
        assert_eq!(classify_status(299), Ok(()));
        assert_eq!(classify_status(301), Err(ApiError::UnexpectedStatus(301)));
        assert_eq!(classify_status(404), Err(ApiError::UnexpectedStatus(404)));
        assert_eq!(classify_status(500), Err(ApiError::UnexpectedStatus(500)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::UnexpectedStatus(502).to_string(),
            "unexpected status: 502"
        );
    }
}
