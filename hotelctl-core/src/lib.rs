//! hotelctl-core - reservation store for a single-user hotel dashboard
//!
//! SQLite schema and seed data, read operations (reservation and client
//! listings, room availability over a stay) and the two write operations
//! (add client, add reservation).
//!
//! ```rust,ignore
//! use hotelctl_core::HotelStore;
//!
//! let store = HotelStore::open("hotel.db").await?;
//! let rooms = store.available_rooms(arrival, departure).await?;
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod models;
pub mod mutations;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod store;

pub use config::HotelConfig;
pub use error::{HotelError, Result};
pub use interval::{dates_overlap, StayInterval};
pub use models::{
    AvailableRoom, Client, ClientSummary, Evaluation, Hotel, NewClient, NewReservation,
    Prestation, Reservation, ReservationDetail, Room, RoomType,
};
pub use store::{HotelStore, StoreStats};
