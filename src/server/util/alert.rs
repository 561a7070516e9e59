//! Alert headers announcing the outcome of a request.
//!
//! Mutating requests report what happened through a pair of response headers so clients can
//! show a notification without parsing the body:
//!
//! - success: `x-candyshopapp-alert: candyShopApp.{entity}.{action}` and
//!   `x-candyshopapp-params: {id}`
//! - failure: `x-candyshopapp-error: error.{key}` and `x-candyshopapp-params: {entity}`

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Application name used as the prefix of alert message keys.
pub static APPLICATION_NAME: &str = "candyShopApp";

/// Header carrying the alert message key of a successful request.
pub static ALERT_HEADER: HeaderName = HeaderName::from_static("x-candyshopapp-alert");
/// Header carrying the error message key of a rejected request.
pub static ERROR_HEADER: HeaderName = HeaderName::from_static("x-candyshopapp-error");
/// Header carrying the parameter of the alert, an identity or an entity name.
pub static PARAMS_HEADER: HeaderName = HeaderName::from_static("x-candyshopapp-params");

/// Outcome announced by a success alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alert {
    /// A record was stored for the first time
    Created,
    /// An existing record was saved
    Updated,
    /// A record was deleted or did not exist
    Deleted,
}

impl Alert {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Builds the success alert headers for `entity` with the record identity as parameter.
pub fn entity_alert(entity: &str, alert: Alert, id: i64) -> HeaderMap {
    headers(
        &ALERT_HEADER,
        format!("{}.{}.{}", APPLICATION_NAME, entity, alert.as_str()),
        id.to_string(),
    )
}

/// Builds the failure alert headers for a request rejected with `error_key`.
pub fn failure_alert(entity: &str, error_key: &str) -> HeaderMap {
    headers(
        &ERROR_HEADER,
        format!("error.{}", error_key),
        entity.to_string(),
    )
}

fn headers(name: &HeaderName, message: String, params: String) -> HeaderMap {
    let mut headers = HeaderMap::new();

    // Values are built from entity names and identities, which are always visible ASCII
    if let Ok(value) = HeaderValue::try_from(message) {
        headers.insert(name.clone(), value);
    }
    if let Ok(value) = HeaderValue::try_from(params) {
        headers.insert(PARAMS_HEADER.clone(), value);
    }

    headers
}
