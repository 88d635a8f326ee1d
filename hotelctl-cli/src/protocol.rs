//! Structured JSON output
//!
//! When `--json` is passed globally, all output is wrapped in a standard envelope:
//! ```json
//! {
//!   "status": "success" | "error",
//!   "data": { ... },
//!   "error": { "code": "ERR_...", "message": "..." }
//! }
//! ```

use hotelctl_core::HotelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global JSON mode state (set by --json flag)
static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize JSON mode from the --json flag
pub fn init_json_mode(json_flag: bool) {
    JSON_MODE.set(json_flag).ok();
}

/// Check if we're in JSON mode
pub fn is_json_mode() -> bool {
    *JSON_MODE.get().unwrap_or(&false)
}

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: ResponseStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code (e.g., "ERR_ROOM_NOT_AVAILABLE")
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One code per error kind of the reservation store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input errors
    ErrInvalidDateRange,
    ErrMissingRequired,
    ErrRoomNotAvailable,
    ErrNoClients,
    ErrClientNotFound,
    ErrInvalidInput,

    // Store errors
    ErrDatabase,
    ErrIo,

    // Configuration errors
    ErrConfigInvalid,

    ErrCancelled,

    // Catch-all
    ErrInternal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).unwrap_or_else(|_| "\"ERR_INTERNAL\"".to_string());
        write!(f, "{}", s.trim_matches('"'))
    }
}

impl From<&HotelError> for ErrorCode {
    fn from(err: &HotelError) -> Self {
        match err {
            HotelError::InvalidDateRange { .. } => ErrorCode::ErrInvalidDateRange,
            HotelError::MissingRequiredField { .. } => ErrorCode::ErrMissingRequired,
            HotelError::RoomNotAvailable { .. } => ErrorCode::ErrRoomNotAvailable,
            HotelError::NoClientsAvailable => ErrorCode::ErrNoClients,
            HotelError::ClientNotFound { .. } => ErrorCode::ErrClientNotFound,
            HotelError::Database(_) => ErrorCode::ErrDatabase,
            HotelError::Io { .. } => ErrorCode::ErrIo,
            HotelError::Config { .. } => ErrorCode::ErrConfigInvalid,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Print this response as JSON to stdout
    pub fn print(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            println!("{}", json);
        }
    }
}

/// Map an anyhow error to an ApiResponse
///
/// Errors from the store are classified by kind; anything else falls back
/// to message matching.
pub fn map_error(err: &anyhow::Error) -> ApiResponse<()> {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<HotelError>())
        .map(ErrorCode::from)
        .unwrap_or_else(|| classify_message(&err.to_string()));

    let details = if err.chain().count() > 1 {
        Some(
            err.chain()
                .skip(1)
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(" → "),
        )
    } else {
        None
    };

    ApiResponse {
        status: ResponseStatus::Error,
        data: None,
        error: Some(ApiError {
            code,
            message: err.to_string(),
            details,
        }),
    }
}

fn classify_message(message: &str) -> ErrorCode {
    let lower = message.to_lowercase();

    if lower.contains("cancel") || lower.contains("interrupted") {
        return ErrorCode::ErrCancelled;
    }
    if lower.contains("invalid") || lower.contains("terminal") {
        return ErrorCode::ErrInvalidInput;
    }
    if lower.contains("config") {
        return ErrorCode::ErrConfigInvalid;
    }
    ErrorCode::ErrInternal
}

/// Output helper - prints JSON in json mode, or runs the human closure otherwise
pub fn output<T, F>(data: T, human_output: F)
where
    T: Serialize,
    F: FnOnce(&T),
{
    if is_json_mode() {
        ApiResponse::success(data).print();
    } else {
        human_output(&data);
    }
}

/// Handle a result, outputting appropriate JSON on error in json mode
pub fn handle_result<T: Serialize>(result: anyhow::Result<T>) -> anyhow::Result<T> {
    match result {
        Ok(data) => Ok(data),
        Err(err) => {
            if is_json_mode() {
                map_error(&err).print();
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_success_response() {
        let resp = ApiResponse::success(serde_json::json!({"count": 8}));
        assert_eq!(resp.status, ResponseStatus::Success);
        assert!(resp.data.is_some());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_store_errors_keep_their_kind() {
        let err: anyhow::Result<()> = Err(HotelError::NoClientsAvailable.into());
        let err = err.context("failed to add reservation").unwrap_err();

        let resp = map_error(&err);
        let api_err = resp.error.unwrap();
        assert_eq!(api_err.code, ErrorCode::ErrNoClients);
        assert_eq!(api_err.message, "failed to add reservation");
        assert!(api_err.details.unwrap().contains("Aucun client"));
    }

    #[test]
    fn test_message_fallback() {
        let err = anyhow::anyhow!("menu requires an interactive terminal");
        assert_eq!(map_error(&err).error.unwrap().code, ErrorCode::ErrInvalidInput);

        let err = anyhow::anyhow!("Something weird happened");
        assert_eq!(map_error(&err).error.unwrap().code, ErrorCode::ErrInternal);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ErrRoomNotAvailable.to_string(), "ERR_ROOM_NOT_AVAILABLE");
    }

    #[test]
    fn test_json_serialization() {
        let resp = ApiResponse::success(serde_json::json!({"test": true}));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"test\":true"));
    }
}
