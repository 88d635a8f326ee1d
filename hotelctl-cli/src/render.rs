//! Human-readable rendering of store results.
//!
//! Every printer goes through [`crate::protocol::output`], so `--json` gets
//! the envelope instead of a table.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use comfy_table::{presets, Table};
use hotelctl_core::config::DisplayConfig;
use hotelctl_core::{Evaluation, Hotel, Prestation, Room, RoomType, StoreStats};
use tracing::warn;

use crate::action::Outcome;
use crate::protocol::output;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display settings checked once, so formatting never fails mid-table.
#[derive(Debug, Clone)]
pub struct Renderer {
    date_format: String,
}

impl Renderer {
    pub fn new(display_config: &DisplayConfig) -> Self {
        let format = &display_config.date_format;
        let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
        let date_format = if valid {
            format.clone()
        } else {
            warn!(format = %format, "invalid date format, using ISO-8601");
            DEFAULT_DATE_FORMAT.to_string()
        };
        Self { date_format }
    }

    fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    pub fn outcome(&self, outcome: Outcome) {
        match outcome {
            Outcome::Reservations(rows) => output(rows, |rows| {
                if rows.is_empty() {
                    println!("Aucune réservation trouvée");
                    return;
                }
                let mut table = new_table(&[
                    "id", "client", "ville_hotel", "date_arrivee", "date_depart", "chambre",
                    "type_chambre",
                ]);
                for r in rows {
                    table.add_row(vec![
                        r.id.to_string(),
                        r.client.clone(),
                        r.hotel_city.clone(),
                        self.date(r.arrival),
                        self.date(r.departure),
                        r.room_number.to_string(),
                        r.room_type.clone(),
                    ]);
                }
                println!("{table}");
            }),
            Outcome::Clients(rows) => output(rows, |rows| {
                if rows.is_empty() {
                    println!("Aucun client enregistré");
                    return;
                }
                let mut table = new_table(&["id", "nom", "email", "telephone"]);
                for c in rows {
                    table.add_row(vec![
                        c.id.to_string(),
                        c.name.clone(),
                        c.email.clone(),
                        c.phone.clone(),
                    ]);
                }
                println!("{table}");
            }),
            outcome @ Outcome::AvailableRooms { .. } => output(outcome, |outcome| {
                let Outcome::AvailableRooms { stay, nights, rooms } = outcome else {
                    return;
                };
                if rooms.is_empty() {
                    println!("Aucune chambre disponible pour cette période");
                    return;
                }
                println!(
                    "{} chambres disponibles trouvées ({} → {}, {} nuit(s))",
                    rooms.len(),
                    self.date(stay.arrival()),
                    self.date(stay.departure()),
                    nights
                );
                let mut table = new_table(&["id", "numero", "etage", "type", "prix_nuit", "ville"]);
                for room in rooms {
                    table.add_row(vec![
                        room.id.to_string(),
                        room.number.to_string(),
                        room.floor.to_string(),
                        room.room_type.clone(),
                        format!("{:.2}", room.price_per_night),
                        room.hotel_city.clone(),
                    ]);
                }
                println!("{table}");
            }),
            Outcome::ClientAdded(client) => output(client, |client| {
                println!("✅ Client ajouté avec succès! (id {})", client.id);
            }),
            Outcome::ReservationAdded(reservation) => output(reservation, |reservation| {
                println!(
                    "✅ Réservation enregistrée avec succès! (id {}, chambre {}, {} → {})",
                    reservation.id,
                    reservation.room_id,
                    self.date(reservation.arrival),
                    self.date(reservation.departure)
                );
            }),
        }
    }

    pub fn hotels(&self, hotels: Vec<Hotel>) {
        output(hotels, |hotels| {
            let mut table = new_table(&["id", "ville", "pays", "code_postal"]);
            for h in hotels {
                table.add_row(vec![
                    h.id.to_string(),
                    h.city.clone(),
                    h.country.clone(),
                    h.postal_code.to_string(),
                ]);
            }
            println!("{table}");
        });
    }

    pub fn room_types(&self, types: Vec<RoomType>) {
        output(types, |types| {
            let mut table = new_table(&["id", "nom", "prix_nuit"]);
            for t in types {
                table.add_row(vec![
                    t.id.to_string(),
                    t.name.clone(),
                    format!("{:.2}", t.price_per_night),
                ]);
            }
            println!("{table}");
        });
    }

    pub fn rooms(&self, rooms: Vec<Room>) {
        output(rooms, |rooms| {
            let mut table =
                new_table(&["id", "numero", "etage", "disponible", "id_hotel", "id_type_chambre"]);
            for r in rooms {
                table.add_row(vec![
                    r.id.to_string(),
                    r.number.to_string(),
                    r.floor.to_string(),
                    if r.available_flag { "oui" } else { "non" }.to_string(),
                    r.hotel_id.to_string(),
                    r.room_type_id.to_string(),
                ]);
            }
            println!("{table}");
        });
    }

    pub fn prestations(&self, prestations: Vec<Prestation>) {
        output(prestations, |prestations| {
            let mut table = new_table(&["id", "prix", "description"]);
            for p in prestations {
                table.add_row(vec![
                    p.id.to_string(),
                    format!("{:.2}", p.price),
                    p.description.clone(),
                ]);
            }
            println!("{table}");
        });
    }

    pub fn evaluations(&self, evaluations: Vec<Evaluation>) {
        output(evaluations, |evaluations| {
            let mut table = new_table(&["id", "date", "note", "commentaire", "id_reservation"]);
            for e in evaluations {
                table.add_row(vec![
                    e.id.to_string(),
                    self.date(e.date),
                    e.rating.to_string(),
                    e.comment.clone(),
                    e.reservation_id.to_string(),
                ]);
            }
            println!("{table}");
        });
    }

    pub fn stats(&self, stats: StoreStats) {
        output(stats, |stats| {
            let mut table = new_table(&["table", "lignes"]);
            for (name, count) in &stats.counts {
                table.add_row(vec![name.to_string(), count.to_string()]);
            }
            println!("{table}");
        });
    }
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_HORIZONTAL_ONLY)
        .set_header(headers.to_vec());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_header_then_rows() {
        let mut table = new_table(&["id", "type"]);
        table.add_row(vec!["1".to_string(), "Étage".to_string()]);
        table.add_row(vec!["10".to_string(), "Simple".to_string()]);

        let rendered = table.to_string();
        let line_of = |needle: &str| rendered.lines().position(|l| l.contains(needle)).unwrap();
        assert!(line_of("type") < line_of("Étage"));
        assert!(line_of("Étage") < line_of("Simple"));
    }

    #[test]
    fn invalid_date_format_falls_back() {
        let renderer = Renderer::new(&DisplayConfig {
            date_format: "%Q-%d".into(),
        });
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(renderer.date(date), "2025-06-15");

        let renderer = Renderer::new(&DisplayConfig {
            date_format: "%d/%m/%Y".into(),
        });
        assert_eq!(renderer.date(date), "15/06/2025");
    }
}
