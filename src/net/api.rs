//! HTTP helpers for talking to the platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the
//! session's bearer header. Native builds get inert stubs returning a
//! transport error, since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response is a `{ code, data?, message? }` envelope. `code == 200`
//! yields the `data` payload; any other code is an application-level
//! [`ApiError::Failure`] carrying the server message. Network trouble and
//! unparseable bodies are [`ApiError::Transport`]. Neither is ever fatal:
//! [`report_api_error`] logs and turns them into user notices.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;
use thiserror::Error;

use crate::net::types::{AllOrderList, BusinessSummary, FoodItem};
use crate::session::{SessionStore, TokenRecord};
use crate::state::notice::NoticeState;

/// Authentication endpoints are fixed paths on the same origin.
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const BUSINESS_PATH: &str = "/api/business/list";
pub const ORDERS_PATH: &str = "/api/orders/all";

/// Outcome of an API call that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-200 envelope code.
    #[error("request to {url} failed with code {code}: {message}")]
    Failure {
        message: String,
        code: i64,
        url: String,
    },
    /// The request never produced a usable envelope: network error,
    /// non-JSON body, or not running in a browser.
    #[error("transport error: {0}")]
    Transport(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(serde::Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret a raw response body as the platform envelope.
///
/// `code == 200` yields `data` (`Null` when the server omitted it); other
/// codes yield [`ApiError::Failure`] with the server message or a
/// placeholder when none was sent.
pub fn parse_envelope(body: &str, url: &str) -> ApiResult<Value> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("invalid response body from {url}: {e}")))?;
    if envelope.code == 200 {
        Ok(envelope.data.unwrap_or(Value::Null))
    } else {
        Err(ApiError::Failure {
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_owned()),
            code: envelope.code,
            url: url.to_owned(),
        })
    }
}

/// Deserialize an envelope `data` payload into its typed form.
pub fn decode<T: serde::de::DeserializeOwned>(data: Value, url: &str) -> ApiResult<T> {
    serde_json::from_value(data)
        .map_err(|e| ApiError::Transport(format!("unexpected payload from {url}: {e}")))
}

/// GET `url` with the session's authorization header.
pub async fn get(session: &SessionStore, url: &str) -> ApiResult<Value> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(url);
        for (name, value) in session.authorization_header() {
            request = request.header(name, &value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_envelope(&body, url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Transport(format!(
            "not available outside the browser: {url}"
        )))
    }
}

/// POST a JSON `body` to `url` with the session's authorization header.
pub async fn post(session: &SessionStore, url: &str, body: &Value) -> ApiResult<Value> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(url);
        for (name, value) in session.authorization_header() {
            request = request.header(name, &value);
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_envelope(&text, url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, body);
        Err(ApiError::Transport(format!(
            "not available outside the browser: {url}"
        )))
    }
}

/// Authenticate against the platform.
///
/// The auth endpoint only accepts form submissions, so the credentials go
/// out as `application/x-www-form-urlencoded` (the browser sets the content
/// type for a `UrlSearchParams` body), with no authorization header. On
/// success the returned record is stored under the scope selected by
/// `remember`.
pub async fn login(
    session: &SessionStore,
    username: &str,
    password: &str,
    remember: bool,
) -> ApiResult<TokenRecord> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Transport("UrlSearchParams unavailable".to_owned()))?;
        params.append("username", username);
        params.append("password", password);

        let response = gloo_net::http::Request::post(LOGIN_PATH)
            .body(params)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let data = parse_envelope(&body, LOGIN_PATH)?;
        let record: TokenRecord = decode(data, LOGIN_PATH)?;
        session.store_token(remember, &record);
        Ok(record)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, username, password, remember);
        Err(ApiError::Transport(format!(
            "not available outside the browser: {LOGIN_PATH}"
        )))
    }
}

/// End the session server-side, then drop the local token record.
pub async fn logout(session: &SessionStore) -> ApiResult<()> {
    get(session, LOGOUT_PATH).await?;
    session.delete_token();
    Ok(())
}

/// Fetch the home-page business listing.
pub async fn fetch_businesses(session: &SessionStore) -> ApiResult<Vec<BusinessSummary>> {
    let data = get(session, BUSINESS_PATH).await?;
    decode(data, BUSINESS_PATH)
}

/// Fetch the menu for one business.
pub async fn fetch_foods(session: &SessionStore, business_id: &str) -> ApiResult<Vec<FoodItem>> {
    let url = format!("/api/food/list/{business_id}");
    let data = get(session, &url).await?;
    decode(data, &url)
}

/// Fetch the signed-in user's order history.
pub async fn fetch_orders(session: &SessionStore) -> ApiResult<AllOrderList> {
    let data = get(session, ORDERS_PATH).await?;
    decode(data, ORDERS_PATH)
}

/// Default reporting policy for a failed call: log it and queue a notice.
///
/// Application failures keep the server's own message at warning level;
/// transport failures get a generic error notice so raw internals never
/// reach the user.
pub fn report_api_error(notices: &mut NoticeState, error: &ApiError) {
    match error {
        ApiError::Failure { message, code, url } => {
            leptos::logging::warn!("request to {url} failed with code {code}: {message}");
            notices.warning(message.clone());
        }
        ApiError::Transport(detail) => {
            leptos::logging::error!("transport error: {detail}");
            notices.error("Something went wrong, please contact the administrator");
        }
    }
}
