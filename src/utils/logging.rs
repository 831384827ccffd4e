use tracing::{debug, error, info, warn};

/// Logs request start with consistent format
pub fn log_request_start(endpoint: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("REQ_START: {} - {}", endpoint, d),
        None => info!("REQ_START: {}", endpoint),
    }
}

/// Logs request completion with consistent format
pub fn log_request_success(endpoint: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("REQ_SUCCESS: {} - {}", endpoint, d),
        None => info!("REQ_SUCCESS: {}", endpoint),
    }
}

/// Logs server-side request failures with consistent format
pub fn log_request_error(endpoint: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("REQ_ERROR: {} failed: {} - {}", endpoint, error, d),
        None => error!("REQ_ERROR: {} failed: {}", endpoint, error),
    }
}

/// Logs rejected client input with consistent format
pub fn log_validation_error(endpoint: &str, field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} - {} field '{}' invalid: {}",
        endpoint, field, value, error
    );
}

/// Logs registry access with consistent format
pub fn log_registry_operation(operation: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("REGISTRY_OP: {} - {}", operation, d),
        None => debug!("REGISTRY_OP: {}", operation),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
