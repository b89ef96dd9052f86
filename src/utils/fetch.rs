//! Network fetching utilities with timeout support.
//!
//! Every request goes to the backend with session cookies attached
//! (`credentials: include`) and races against a timeout so a stalled
//! connection cannot hang the UI.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::models::DetailResponse;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Implements timeout behavior on any JavaScript Promise using
/// `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined, which the fetch promise never does
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Plumbing
// =============================================================================

/// Body to attach to an outgoing request.
enum Body {
    None,
    Json(String),
    Form(FormData),
}

/// Send one request and return the raw response text on 2xx.
///
/// On a non-2xx status the response body is drained and, when it carries the
/// backend's `{ "detail": ... }` envelope, the detail is surfaced in the
/// error.
async fn send(method: &str, url: &str, body: Body) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    match &body {
        Body::None => {}
        Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
        Body::Form(form) => opts.set_body(form.as_ref()),
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    if matches!(body, Body::Json(_)) {
        let _ = request.headers().set("Content-Type", "application/json");
    }

    let fetch_promise = window.fetch_with_request(&request);

    let resp: Response = match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::Network(msg)),
        RaceResult::Completed(result) => {
            result.dyn_into().map_err(|_| FetchError::InvalidContent)?
        }
    };

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)?;

    if !resp.ok() {
        let detail = serde_json::from_str::<DetailResponse>(&text)
            .ok()
            .map(|d| d.detail);
        return Err(FetchError::Http {
            status: resp.status(),
            detail,
        });
    }

    Ok(text)
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::JsonParse(e.to_string()))
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// GET a URL and parse the JSON response.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    parse_json(&send("GET", url, Body::None).await?)
}

/// GET a URL, discarding the body; `Ok` means a 2xx status.
pub async fn get_ok(url: &str) -> Result<(), FetchError> {
    send("GET", url, Body::None).await.map(|_| ())
}

/// POST a JSON body, discarding the response; `Ok` means a 2xx status.
pub async fn post_json_ok<B: Serialize>(url: &str, body: &B) -> Result<(), FetchError> {
    let json = serde_json::to_string(body).map_err(|e| FetchError::JsonParse(e.to_string()))?;
    send("POST", url, Body::Json(json)).await.map(|_| ())
}

/// POST multipart form fields and parse the JSON response.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    fields: &[(&str, &str)],
) -> Result<T, FetchError> {
    let form = FormData::new().map_err(|_| FetchError::RequestCreationFailed)?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }
    parse_json(&send("POST", url, Body::Form(form)).await?)
}

/// DELETE a URL, discarding the body; `Ok` means a 2xx status. Failure
/// detail from the backend's error envelope rides in the [`FetchError`].
pub async fn delete_ok(url: &str) -> Result<(), FetchError> {
    send("DELETE", url, Body::None).await.map(|_| ())
}
