//! Write operations: add a client, add a reservation.
//!
//! Each insert is one statement. Validation runs first, so a failed call
//! writes nothing. The availability check and the reservation insert are not
//! wrapped in a transaction: two sessions submitting the same room at the
//! same moment can both succeed.

use tracing::{debug, info, warn};

use crate::error::{HotelError, Result};
use crate::interval::StayInterval;
use crate::models::{Client, NewClient, NewReservation, Reservation};
use crate::queries::{available_rooms_on, client_count_on, get_client_on};
use crate::store::HotelStore;

impl HotelStore {
    /// Insert a client and return it with its assigned id.
    ///
    /// Name, email and phone must be non-blank; no uniqueness check is made.
    pub async fn add_client(&self, client: &NewClient) -> Result<Client> {
        if let Some(field) = client.first_missing_field() {
            warn!(field, "rejecting client with blank required field");
            return Err(HotelError::missing_field(field));
        }

        let mut conn = self.acquire().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO Client (nom, email, telephone, adresse, ville, code_postal)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(client.address.as_deref())
        .bind(client.city.as_deref())
        .bind(client.postal_code.as_deref())
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

        info!(id, name = %client.name, "client added");

        Ok(Client {
            id,
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            city: client.city.clone(),
            postal_code: client.postal_code.clone(),
        })
    }

    /// Insert a reservation and return it with its assigned id.
    ///
    /// Checks, in order: date order, at least one client, the client exists,
    /// the room is in the availability result for this exact stay as read
    /// from the store now.
    pub async fn add_reservation(&self, request: &NewReservation) -> Result<Reservation> {
        let stay = StayInterval::new(request.arrival, request.departure).inspect_err(|_| {
            warn!(
                arrival = %request.arrival,
                departure = %request.departure,
                "rejecting reservation with invalid dates"
            )
        })?;

        let mut conn = self.acquire().await?;

        if client_count_on(&mut conn).await? == 0 {
            return Err(HotelError::NoClientsAvailable);
        }

        if get_client_on(&mut conn, request.client_id).await?.is_none() {
            return Err(HotelError::client_not_found(request.client_id));
        }

        let available = available_rooms_on(&mut conn, &stay).await?;
        if !available.iter().any(|room| room.id == request.room_id) {
            warn!(room_id = request.room_id, "room not available for stay");
            return Err(HotelError::room_not_available(
                request.room_id,
                stay.arrival(),
                stay.departure(),
            ));
        }

        debug!(room_id = request.room_id, nights = stay.nights(), "inserting reservation");
        let id = sqlx::query(
            r#"
            INSERT INTO Reservation (id_client, id_chambre, date_arrivee, date_depart)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(request.client_id)
        .bind(request.room_id)
        .bind(stay.arrival())
        .bind(stay.departure())
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

        info!(id, client_id = request.client_id, room_id = request.room_id, "reservation added");

        Ok(Reservation {
            id,
            arrival: stay.arrival(),
            departure: stay.departure(),
            client_id: request.client_id,
            room_id: request.room_id,
        })
    }
}
