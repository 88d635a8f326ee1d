/// Structured error types for hotelctl-core.
///
/// Input errors (bad dates, blank fields, unavailable rooms) are recoverable:
/// the caller shows the message and lets the user resubmit. Store and I/O
/// errors fail the single operation that raised them.
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Main error type for hotelctl-core operations
#[derive(Error, Debug)]
pub enum HotelError {
    /// Departure is not strictly after arrival
    #[error("La date de départ doit être après la date d'arrivée ({arrival} → {departure})")]
    InvalidDateRange {
        arrival: NaiveDate,
        departure: NaiveDate,
    },

    /// A required client field is empty or blank
    #[error("Les champs marqués d'un * sont obligatoires (champ manquant : {field})")]
    MissingRequiredField { field: &'static str },

    /// The room is not in the availability result for the requested stay
    #[error("La chambre {room_id} n'est pas disponible du {arrival} au {departure}")]
    RoomNotAvailable {
        room_id: i64,
        arrival: NaiveDate,
        departure: NaiveDate,
    },

    /// Reservation requested while the client table is empty
    #[error("Aucun client disponible. Ajoutez d'abord un client.")]
    NoClientsAvailable,

    /// Reservation references a client id that does not exist
    #[error("Client introuvable : {id}")]
    ClientNotFound { id: i64 },

    /// SQLite/sqlx error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for hotelctl-core operations
pub type Result<T> = std::result::Result<T, HotelError>;

impl HotelError {
    /// Create an invalid date range error
    pub fn invalid_date_range(arrival: NaiveDate, departure: NaiveDate) -> Self {
        Self::InvalidDateRange { arrival, departure }
    }

    /// Create a missing required field error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    /// Create a room not available error
    pub fn room_not_available(room_id: i64, arrival: NaiveDate, departure: NaiveDate) -> Self {
        Self::RoomNotAvailable {
            room_id,
            arrival,
            departure,
        }
    }

    /// Create a client not found error
    pub fn client_not_found(id: i64) -> Self {
        Self::ClientNotFound { id }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from user input rather than the store.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateRange { .. }
                | Self::MissingRequiredField { .. }
                | Self::RoomNotAvailable { .. }
                | Self::NoClientsAvailable
                | Self::ClientNotFound { .. }
        )
    }
}
