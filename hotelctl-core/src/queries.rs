//! Read operations.
//!
//! Listings join in a single statement and come back ordered by id.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{HotelError, Result};
use crate::interval::StayInterval;
use crate::models::{
    AvailableRoom, Client, ClientSummary, Evaluation, Hotel, Prestation, ReservationDetail, Room,
    RoomType,
};
use crate::store::HotelStore;

const RESERVATION_DETAILS: &str = r#"
    SELECT r.id, c.nom AS client, h.ville AS hotel_city,
           r.date_arrivee AS arrival, r.date_depart AS departure,
           ch.numero AS room_number, tc.nom AS room_type
    FROM Reservation r
    JOIN Client c ON r.id_client = c.id
    JOIN Chambre ch ON r.id_chambre = ch.id
    JOIN Hotel h ON ch.id_hotel = h.id
    JOIN TypeChambre tc ON ch.id_type_chambre = tc.id
    ORDER BY r.id
"#;

/// Rooms with no reservation overlapping `[?1, ?2]`.
///
/// A reservation conflicts when `date_arrivee <= departure AND
/// date_depart >= arrival`; ISO-8601 text compares in date order.
const AVAILABLE_ROOMS: &str = r#"
    SELECT ch.id, ch.numero AS number, ch.etage AS floor,
           tc.nom AS room_type, tc.prix_nuit AS price_per_night, h.ville AS hotel_city
    FROM Chambre ch
    JOIN TypeChambre tc ON ch.id_type_chambre = tc.id
    JOIN Hotel h ON ch.id_hotel = h.id
    WHERE NOT EXISTS (
        SELECT 1 FROM Reservation r
        WHERE r.id_chambre = ch.id
          AND r.date_arrivee <= ?2
          AND r.date_depart >= ?1
    )
    ORDER BY ch.id
"#;

pub(crate) async fn available_rooms_on(
    conn: &mut SqliteConnection,
    stay: &StayInterval,
) -> Result<Vec<AvailableRoom>> {
    debug!(
        arrival = %stay.arrival(),
        departure = %stay.departure(),
        "querying available rooms"
    );
    let rooms = sqlx::query_as::<_, AvailableRoom>(AVAILABLE_ROOMS)
        .bind(stay.arrival())
        .bind(stay.departure())
        .fetch_all(&mut *conn)
        .await?;
    debug!(count = rooms.len(), "available rooms");
    Ok(rooms)
}

pub(crate) async fn client_count_on(conn: &mut SqliteConnection) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Client")
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

pub(crate) async fn get_client_on(conn: &mut SqliteConnection, id: i64) -> Result<Option<Client>> {
    let client = sqlx::query_as::<_, Client>(
        "SELECT id, nom, email, telephone, adresse, ville, code_postal FROM Client WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(client)
}

impl HotelStore {
    /// Every reservation with client name, hotel city, room number and type.
    pub async fn list_reservations(&self) -> Result<Vec<ReservationDetail>> {
        let mut conn = self.acquire().await?;
        debug!("listing reservations");
        let rows = sqlx::query_as::<_, ReservationDetail>(RESERVATION_DETAILS)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// id, name, email and phone of every client.
    pub async fn list_clients(&self) -> Result<Vec<ClientSummary>> {
        let mut conn = self.acquire().await?;
        debug!("listing clients");
        let rows = sqlx::query_as::<_, ClientSummary>(
            "SELECT id, nom, email, telephone FROM Client ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    /// Rooms free for the whole stay.
    ///
    /// Fails with `InvalidDateRange` before touching the store when
    /// `arrival >= departure`.
    pub async fn available_rooms(
        &self,
        arrival: chrono::NaiveDate,
        departure: chrono::NaiveDate,
    ) -> Result<Vec<AvailableRoom>> {
        let stay = StayInterval::new(arrival, departure)?;
        self.available_rooms_for(&stay).await
    }

    /// Rooms free for an already validated stay.
    pub async fn available_rooms_for(&self, stay: &StayInterval) -> Result<Vec<AvailableRoom>> {
        let mut conn = self.acquire().await?;
        available_rooms_on(&mut conn, stay).await
    }

    pub async fn get_client(&self, id: i64) -> Result<Client> {
        let mut conn = self.acquire().await?;
        get_client_on(&mut conn, id)
            .await?
            .ok_or_else(|| HotelError::client_not_found(id))
    }

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, Hotel>(
            "SELECT id, ville, pays, code_postal FROM Hotel ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    pub async fn list_room_types(&self) -> Result<Vec<RoomType>> {
        let mut conn = self.acquire().await?;
        let rows =
            sqlx::query_as::<_, RoomType>("SELECT id, nom, prix_nuit FROM TypeChambre ORDER BY id")
                .fetch_all(&mut *conn)
                .await?;
        Ok(rows)
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, numero, etage, disponible, id_hotel, id_type_chambre
            FROM Chambre
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    pub async fn list_prestations(&self) -> Result<Vec<Prestation>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, Prestation>(
            "SELECT id, prix, description FROM Prestation ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    pub async fn list_evaluations(&self) -> Result<Vec<Evaluation>> {
        let mut conn = self.acquire().await?;
        let rows = sqlx::query_as::<_, Evaluation>(
            r#"
            SELECT id, date_evaluation, note, commentaire, id_reservation
            FROM Evaluation
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }
}
