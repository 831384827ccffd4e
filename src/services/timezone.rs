//! Timezone endpoints: list the catalog, save a user's choice, and read the
//! current time in the chosen zone.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::{error::ApiError, AppState};
use crate::catalog::TimezoneEntry;
use crate::utils::datetime::{format_rfc3339, now_in_timezone, resolve_timezone};
use crate::utils::logging::{
    log_request_error, log_request_start, log_request_success, log_validation_error,
};

/// Message returned when a choice is saved.
pub const SAVE_SUCCESS_MESSAGE: &str = "Timezone saved successfully";

/// Body of `POST /users/timezone`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveTimezoneRequest {
    /// Opaque, client-chosen user ID.
    pub user_id: String,
    /// Catalog label, not identifier.
    pub timezone: String,
}

/// Reply to a successful save.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveTimezoneResponse {
    /// Always [`SAVE_SUCCESS_MESSAGE`].
    pub message: String,
    /// The identifier the label resolved to.
    pub timezone: String,
}

/// Reply to `GET /users/current_time`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentTimeResponse {
    /// The user ID from the query string.
    pub user_id: String,
    /// The stored identifier.
    pub timezone: String,
    /// RFC 3339 timestamp with the offset in effect now.
    pub current_time: String,
}

/// Router for the catalog, save and current-time endpoints.
pub struct TimezoneService {
    /// Routes with state already attached.
    pub router: Router,
}

impl TimezoneService {
    /// Builds the routes over the given shared state.
    pub fn new(state: AppState) -> Self {
        let router = Router::new()
            .route("/timezones", get(list_timezones))
            .route("/users/timezone", post(save_user_timezone))
            .route("/users/current_time", get(get_current_time))
            .with_state(state);

        Self { router }
    }
}

async fn list_timezones(State(state): State<AppState>) -> Json<&'static [TimezoneEntry]> {
    log_request_success("GET /timezones", Some(&format!("{} entries", state.catalog.len())));
    Json(state.catalog.list_all())
}

// The body is decoded by hand so that every decode failure, including a
// missing content type, is reported as a bad request.
async fn save_user_timezone(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveTimezoneResponse>, ApiError> {
    const ENDPOINT: &str = "POST /users/timezone";

    let req: SaveTimezoneRequest = serde_json::from_slice(&body).map_err(|e| {
        log_validation_error(ENDPOINT, "body", &String::from_utf8_lossy(&body), &e.to_string());
        ApiError::MalformedRequest
    })?;
    log_request_start(
        ENDPOINT,
        Some(&format!("user {} label '{}'", req.user_id, req.timezone)),
    );

    let entry = state.catalog.find_by_label(&req.timezone).ok_or_else(|| {
        log_validation_error(ENDPOINT, "timezone", &req.timezone, "not a catalog label");
        ApiError::InvalidSelection
    })?;

    state.registry.save(&req.user_id, entry.identifier);
    log_request_success(
        ENDPOINT,
        Some(&format!("user {} -> {}", req.user_id, entry.identifier)),
    );

    Ok(Json(SaveTimezoneResponse {
        message: SAVE_SUCCESS_MESSAGE.to_string(),
        timezone: entry.identifier.to_string(),
    }))
}

async fn get_current_time(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CurrentTimeResponse>, ApiError> {
    const ENDPOINT: &str = "GET /users/current_time";

    // `user_id` may repeat; the first non-empty value wins.
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            log_validation_error(ENDPOINT, "query", "", &rejection.body_text());
            return Err(ApiError::MissingParameter);
        }
    };
    let user_id = first_user_id(pairs).ok_or_else(|| {
        log_validation_error(ENDPOINT, "user_id", "", "missing");
        ApiError::MissingParameter
    })?;
    log_request_start(ENDPOINT, Some(&format!("user {}", user_id)));

    let identifier = state.registry.lookup(&user_id).ok_or_else(|| {
        log_validation_error(ENDPOINT, "user_id", &user_id, "no saved timezone");
        ApiError::UserNotFound
    })?;

    // Only reachable if something saved an identifier the catalog never offered.
    let tz = resolve_timezone(&identifier).ok_or_else(|| {
        log_request_error(
            ENDPOINT,
            "stored identifier does not resolve",
            Some(&format!("user {} identifier '{}'", user_id, identifier)),
        );
        ApiError::InvalidTimezoneData
    })?;

    let current_time = format_rfc3339(&now_in_timezone(&tz));
    log_request_success(ENDPOINT, Some(&format!("user {} at {}", user_id, current_time)));

    Ok(Json(CurrentTimeResponse {
        user_id,
        timezone: identifier,
        current_time,
    }))
}

/// First non-empty `user_id` value, in query-string order.
fn first_user_id(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, value)| key == "user_id" && !value.is_empty())
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_user_id_takes_first_value() {
        let query = pairs(&[("user_id", "a"), ("user_id", "b")]);
        assert_eq!(first_user_id(query).as_deref(), Some("a"));
    }

    #[test]
    fn test_first_user_id_skips_empty_and_other_keys() {
        let query = pairs(&[("other", "x"), ("user_id", ""), ("user_id", "b")]);
        assert_eq!(first_user_id(query).as_deref(), Some("b"));
    }

    #[test]
    fn test_first_user_id_missing() {
        assert_eq!(first_user_id(Vec::new()), None);
        assert_eq!(first_user_id(pairs(&[("user_id", "")])), None);
        assert_eq!(first_user_id(pairs(&[("userid", "u1")])), None);
    }
}
