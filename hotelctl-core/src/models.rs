//! Row types for the hotel schema.
//!
//! Column names stay in the schema's own vocabulary (`nom`, `ville`,
//! `date_arrivee`, ...) through `#[sqlx(rename)]`; the Rust side uses
//! English field names.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Hotel {
    pub id: i64,
    #[sqlx(rename = "ville")]
    pub city: String,
    #[sqlx(rename = "pays")]
    pub country: String,
    #[sqlx(rename = "code_postal")]
    pub postal_code: i64,
}

/// Full client record.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Client {
    pub id: i64,
    #[sqlx(rename = "nom")]
    pub name: String,
    pub email: String,
    #[sqlx(rename = "telephone")]
    pub phone: String,
    #[sqlx(rename = "adresse")]
    pub address: Option<String>,
    #[sqlx(rename = "ville")]
    pub city: Option<String>,
    #[sqlx(rename = "code_postal")]
    pub postal_code: Option<String>,
}

/// Client columns shown in the client list.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ClientSummary {
    pub id: i64,
    #[sqlx(rename = "nom")]
    pub name: String,
    pub email: String,
    #[sqlx(rename = "telephone")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RoomType {
    pub id: i64,
    #[sqlx(rename = "nom")]
    pub name: String,
    #[sqlx(rename = "prix_nuit")]
    pub price_per_night: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Room {
    pub id: i64,
    #[sqlx(rename = "numero")]
    pub number: i64,
    #[sqlx(rename = "etage")]
    pub floor: i64,
    /// Informational flag from the seed data; availability is computed
    /// from reservations, never from this column.
    #[sqlx(rename = "disponible")]
    pub available_flag: bool,
    #[sqlx(rename = "id_hotel")]
    pub hotel_id: i64,
    #[sqlx(rename = "id_type_chambre")]
    pub room_type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Reservation {
    pub id: i64,
    #[sqlx(rename = "date_arrivee")]
    pub arrival: NaiveDate,
    #[sqlx(rename = "date_depart")]
    pub departure: NaiveDate,
    #[sqlx(rename = "id_client")]
    pub client_id: i64,
    #[sqlx(rename = "id_chambre")]
    pub room_id: i64,
}

/// Reservation joined with client, hotel, room and room type.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ReservationDetail {
    pub id: i64,
    pub client: String,
    pub hotel_city: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    pub room_number: i64,
    pub room_type: String,
}

/// A room free for a requested stay.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct AvailableRoom {
    pub id: i64,
    pub number: i64,
    pub floor: i64,
    pub room_type: String,
    pub price_per_night: f64,
    pub hotel_city: String,
}

impl AvailableRoom {
    /// Pick-list label, e.g. `N°201 (Étage 2, Simple, Paris)`.
    pub fn label(&self) -> String {
        format!(
            "N°{} (Étage {}, {}, {})",
            self.number, self.floor, self.room_type, self.hotel_city
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Evaluation {
    pub id: i64,
    #[sqlx(rename = "date_evaluation")]
    pub date: NaiveDate,
    #[sqlx(rename = "note")]
    pub rating: i64,
    #[sqlx(rename = "commentaire")]
    pub comment: String,
    #[sqlx(rename = "id_reservation")]
    pub reservation_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Prestation {
    pub id: i64,
    #[sqlx(rename = "prix")]
    pub price: f64,
    pub description: String,
}

/// Input for [`crate::HotelStore::add_client`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    /// First blank required field, checked in form order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("nom", &self.name),
            ("email", &self.email),
            ("telephone", &self.phone),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Input for [`crate::HotelStore::add_reservation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReservation {
    pub client_id: i64,
    pub room_id: i64,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_label_matches_picklist_format() {
        let room = AvailableRoom {
            id: 1,
            number: 201,
            floor: 2,
            room_type: "Simple".into(),
            price_per_night: 80.0,
            hotel_city: "Paris".into(),
        };
        assert_eq!(room.label(), "N°201 (Étage 2, Simple, Paris)");
    }

    #[test]
    fn missing_fields_in_form_order() {
        assert_eq!(NewClient::new("", "", "").first_missing_field(), Some("nom"));
        assert_eq!(
            NewClient::new("Jean", "  ", "0612345678").first_missing_field(),
            Some("email")
        );
        assert_eq!(
            NewClient::new("Jean", "j@x.fr", "").first_missing_field(),
            Some("telephone")
        );
        assert_eq!(NewClient::new("Jean", "j@x.fr", "06").first_missing_field(), None);
    }
}
