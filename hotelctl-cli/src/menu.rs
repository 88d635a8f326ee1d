//! Interactive menu - the dashboard's five actions behind `inquire` prompts.
//!
//! Each iteration builds one [`Action`] and hands it to [`dispatch`]. Input
//! and store errors are printed and the menu comes back; Esc or Ctrl+C on the
//! menu itself leaves.

use std::fmt;
use std::io::IsTerminal;

use anyhow::{bail, Context, Result};
use chrono::{Days, Local, NaiveDate};
use hotelctl_core::{
    AvailableRoom, ClientSummary, HotelError, HotelStore, NewClient, NewReservation,
};
use inquire::error::InquireError;
use inquire::{DateSelect, Select, Text};

use crate::action::{dispatch, Action};
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEntry {
    Reservations,
    Clients,
    AvailableRooms,
    AddClient,
    AddReservation,
    Quit,
}

impl MenuEntry {
    const ALL: [MenuEntry; 6] = [
        MenuEntry::Reservations,
        MenuEntry::Clients,
        MenuEntry::AvailableRooms,
        MenuEntry::AddClient,
        MenuEntry::AddReservation,
        MenuEntry::Quit,
    ];
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuEntry::Reservations => "📋 Liste des Réservations",
            MenuEntry::Clients => "👥 Liste des Clients",
            MenuEntry::AvailableRooms => "🛏️ Chambres Disponibles",
            MenuEntry::AddClient => "➕ Ajouter un Client",
            MenuEntry::AddReservation => "📅 Ajouter une Réservation",
            MenuEntry::Quit => "🚪 Quitter",
        };
        f.write_str(label)
    }
}

/// Pick-list wrapper showing a client by name.
struct ClientChoice(ClientSummary);

impl fmt::Display for ClientChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.0.name, self.0.email)
    }
}

/// Pick-list wrapper showing a room by its label.
struct RoomChoice(AvailableRoom);

impl fmt::Display for RoomChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.label())
    }
}

/// Menu needs a terminal on both ends
pub fn can_use_menu() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

pub async fn run_menu(store: &HotelStore, renderer: &Renderer) -> Result<()> {
    if !can_use_menu() {
        bail!("the menu requires an interactive terminal; use the subcommands instead");
    }

    println!("\n🏨 Système de Gestion Hôtelière\n");

    loop {
        let entry = match Select::new("Menu", MenuEntry::ALL.to_vec()).prompt() {
            Ok(entry) => entry,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read menu choice"),
        };

        if entry == MenuEntry::Quit {
            break;
        }

        match run_entry(store, renderer, entry).await {
            Ok(()) => {}
            Err(err) => match err.downcast_ref::<InquireError>() {
                // Esc inside a form returns to the menu.
                Some(InquireError::OperationCanceled) => {}
                Some(InquireError::OperationInterrupted) => break,
                _ => eprintln!("{} {:#}", error_marker(&err), err),
            },
        }
        println!();
    }

    Ok(())
}

/// ⚠️ for input the user can correct, ❌ for store failures.
fn error_marker(err: &anyhow::Error) -> &'static str {
    let user_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<HotelError>())
        .is_some_and(HotelError::is_user_error);
    if user_error {
        "⚠️ "
    } else {
        "❌"
    }
}

async fn run_entry(store: &HotelStore, renderer: &Renderer, entry: MenuEntry) -> Result<()> {
    let action = match entry {
        MenuEntry::Reservations => Action::ListReservations,
        MenuEntry::Clients => Action::ListClients,
        MenuEntry::AvailableRooms => {
            let (arrival, departure) = prompt_stay()?;
            Action::SearchAvailableRooms { arrival, departure }
        }
        MenuEntry::AddClient => Action::AddClient(prompt_client()?),
        MenuEntry::AddReservation => match prompt_reservation(store).await? {
            Some(request) => Action::AddReservation(request),
            None => return Ok(()),
        },
        MenuEntry::Quit => return Ok(()),
    };

    let outcome = dispatch(store, action).await?;
    renderer.outcome(outcome);
    Ok(())
}

fn prompt_stay() -> Result<(NaiveDate, NaiveDate)> {
    let today = Local::now().date_naive();

    let arrival = DateSelect::new("Date d'arrivée")
        .with_default(today)
        .prompt()?;
    let departure = DateSelect::new("Date de départ")
        .with_default(arrival.checked_add_days(Days::new(1)).unwrap_or(arrival))
        .prompt()?;

    Ok((arrival, departure))
}

fn prompt_client() -> Result<NewClient> {
    let name = Text::new("Nom complet*").with_placeholder("Jean Dupont").prompt()?;
    let email = Text::new("Email*")
        .with_placeholder("jean.dupont@example.com")
        .prompt()?;
    let phone = Text::new("Téléphone*").with_placeholder("0612345678").prompt()?;
    let address = Text::new("Adresse").with_placeholder("12 Rue de Paris").prompt()?;
    let city = Text::new("Ville").with_placeholder("Paris").prompt()?;
    let postal_code = Text::new("Code postal").with_placeholder("75001").prompt()?;

    Ok(NewClient {
        name,
        email,
        phone,
        address: Some(address),
        city: Some(city),
        postal_code: Some(postal_code),
    })
}

/// Collect a reservation; `None` when there is no room to offer.
async fn prompt_reservation(store: &HotelStore) -> Result<Option<NewReservation>> {
    let clients = store.list_clients().await?;
    if clients.is_empty() {
        return Err(HotelError::NoClientsAvailable.into());
    }

    let choices: Vec<ClientChoice> = clients.into_iter().map(ClientChoice).collect();
    let client = Select::new("Client*", choices).prompt()?;

    let (arrival, departure) = prompt_stay()?;
    let rooms = store.available_rooms(arrival, departure).await?;
    if rooms.is_empty() {
        println!("⚠️  Aucune chambre disponible pour cette période");
        return Ok(None);
    }

    let choices: Vec<RoomChoice> = rooms.into_iter().map(RoomChoice).collect();
    let room = Select::new("Chambre disponible*", choices).prompt()?;

    Ok(Some(NewReservation {
        client_id: client.0.id,
        room_id: room.0.id,
        arrival,
        departure,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_five_actions_and_quit() {
        assert_eq!(MenuEntry::ALL.len(), 6);
        assert_eq!(MenuEntry::ALL[2].to_string(), "🛏️ Chambres Disponibles");
    }

    #[test]
    fn input_errors_are_warnings() {
        let err = anyhow::Error::from(HotelError::NoClientsAvailable);
        assert_eq!(error_marker(&err), "⚠️ ");

        let err = anyhow::Error::from(HotelError::missing_field("email")).context("add client");
        assert_eq!(error_marker(&err), "⚠️ ");

        let err = anyhow::Error::from(HotelError::config("bad toml"));
        assert_eq!(error_marker(&err), "❌");

        assert_eq!(error_marker(&anyhow::anyhow!("prompt failed")), "❌");
    }

    #[test]
    fn choices_display_labels() {
        let room = RoomChoice(AvailableRoom {
            id: 2,
            number: 502,
            floor: 5,
            room_type: "Double".into(),
            price_per_night: 120.0,
            hotel_city: "Paris".into(),
        });
        assert_eq!(room.to_string(), "N°502 (Étage 5, Double, Paris)");

        let client = ClientChoice(ClientSummary {
            id: 1,
            name: "Jean Dupont".into(),
            email: "jean.dupont@email.fr".into(),
            phone: "0612345678".into(),
        });
        assert_eq!(client.to_string(), "Jean Dupont <jean.dupont@email.fr>");
    }
}
