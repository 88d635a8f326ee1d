//! The five dashboard actions and their dispatch.
//!
//! Every front end (subcommands, interactive menu) builds an [`Action`] and
//! hands it to [`dispatch`]; neither carries store logic of its own.

use chrono::NaiveDate;
use hotelctl_core::{
    AvailableRoom, Client, ClientSummary, HotelStore, NewClient, NewReservation, Reservation,
    ReservationDetail, Result, StayInterval,
};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ListReservations,
    ListClients,
    SearchAvailableRooms {
        arrival: NaiveDate,
        departure: NaiveDate,
    },
    AddClient(NewClient),
    AddReservation(NewReservation),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ListReservations => "list-reservations",
            Action::ListClients => "list-clients",
            Action::SearchAvailableRooms { .. } => "search-available-rooms",
            Action::AddClient(_) => "add-client",
            Action::AddReservation(_) => "add-reservation",
        }
    }
}

/// Result of a dispatched action, one variant per action.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Reservations(Vec<ReservationDetail>),
    Clients(Vec<ClientSummary>),
    AvailableRooms {
        stay: StayInterval,
        nights: i64,
        rooms: Vec<AvailableRoom>,
    },
    ClientAdded(Client),
    ReservationAdded(Reservation),
}

pub async fn dispatch(store: &HotelStore, action: Action) -> Result<Outcome> {
    debug!(action = action.name(), "dispatching");

    let outcome = match action {
        Action::ListReservations => Outcome::Reservations(store.list_reservations().await?),
        Action::ListClients => Outcome::Clients(store.list_clients().await?),
        Action::SearchAvailableRooms { arrival, departure } => {
            let stay = StayInterval::new(arrival, departure)?;
            let rooms = store.available_rooms_for(&stay).await?;
            Outcome::AvailableRooms {
                stay,
                nights: stay.nights(),
                rooms,
            }
        }
        Action::AddClient(client) => Outcome::ClientAdded(store.add_client(&client).await?),
        Action::AddReservation(request) => {
            Outcome::ReservationAdded(store.add_reservation(&request).await?)
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelctl_core::HotelError;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn dispatches_each_action() {
        let store = HotelStore::open_seeded_in_memory().await.unwrap();

        match dispatch(&store, Action::ListReservations).await.unwrap() {
            Outcome::Reservations(rows) => assert_eq!(rows.len(), 8),
            other => panic!("unexpected outcome: {other:?}"),
        }

        match dispatch(&store, Action::ListClients).await.unwrap() {
            Outcome::Clients(rows) => assert_eq!(rows.len(), 5),
            other => panic!("unexpected outcome: {other:?}"),
        }

        let search = Action::SearchAvailableRooms {
            arrival: d("2027-03-01"),
            departure: d("2027-03-04"),
        };
        match dispatch(&store, search).await.unwrap() {
            Outcome::AvailableRooms { stay, nights, rooms } => {
                assert_eq!(stay.arrival(), d("2027-03-01"));
                assert_eq!(nights, 3);
                assert_eq!(rooms.len(), 8);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        let add = Action::AddClient(NewClient::new("Test User", "t@example.com", "0600000000"));
        let client_id = match dispatch(&store, add).await.unwrap() {
            Outcome::ClientAdded(client) => client.id,
            other => panic!("unexpected outcome: {other:?}"),
        };

        let book = Action::AddReservation(NewReservation {
            client_id,
            room_id: 8,
            arrival: d("2027-03-01"),
            departure: d("2027-03-04"),
        });
        match dispatch(&store, book).await.unwrap() {
            Outcome::ReservationAdded(reservation) => assert_eq!(reservation.client_id, client_id),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_with_reversed_dates_fails() {
        let store = HotelStore::open_seeded_in_memory().await.unwrap();
        let err = dispatch(
            &store,
            Action::SearchAvailableRooms {
                arrival: d("2027-03-04"),
                departure: d("2027-03-01"),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));
    }
}
