//! Literal seed data: 2 hotels, 5 clients, 5 services, 2 room types,
//! 8 rooms, 8 reservations, 5 evaluations.
//!
//! Rows carry fixed ids and go in with `INSERT OR IGNORE`, so seeding an
//! already-seeded database is a no-op.

use sqlx::SqliteConnection;
use tracing::info;

use crate::error::Result;

/// (id, ville, pays, code_postal)
pub const HOTELS: &[(i64, &str, &str, i64)] = &[
    (1, "Paris", "France", 75001),
    (2, "Lyon", "France", 69002),
];

/// (id, adresse, ville, code_postal, email, telephone, nom)
pub const CLIENTS: &[(i64, &str, &str, &str, &str, &str, &str)] = &[
    (1, "12 Rue de Paris", "Paris", "75001", "jean.dupont@email.fr", "0612345678", "Jean Dupont"),
    (2, "5 Avenue Victor Hugo", "Lyon", "69002", "marie.leroy@email.fr", "0623456789", "Marie Leroy"),
    (3, "8 Boulevard Saint-Michel", "Marseille", "13005", "paul.moreau@email.fr", "0634567890", "Paul Moreau"),
    (4, "27 Rue Nationale", "Lille", "59800", "lucie.martin@email.fr", "0645678901", "Lucie Martin"),
    (5, "3 Rue des Fleurs", "Nice", "06000", "emma.giraud@email.fr", "0656789012", "Emma Giraud"),
];

/// (id, prix, description)
pub const PRESTATIONS: &[(i64, f64, &str)] = &[
    (1, 15.0, "Petit-déjeuner"),
    (2, 30.0, "Navette aéroport"),
    (3, 0.0, "Wi-Fi gratuit"),
    (4, 50.0, "Spa et bien-être"),
    (5, 20.0, "Parking sécurisé"),
];

/// (id, nom, prix_nuit)
pub const ROOM_TYPES: &[(i64, &str, f64)] = &[(1, "Simple", 80.0), (2, "Double", 120.0)];

/// (id, numero, etage, disponible, id_hotel, id_type_chambre)
pub const ROOMS: &[(i64, i64, i64, bool, i64, i64)] = &[
    (1, 201, 2, false, 1, 1),
    (2, 502, 5, true, 1, 2),
    (3, 305, 3, false, 2, 1),
    (4, 410, 4, false, 2, 2),
    (5, 104, 1, true, 2, 2),
    (6, 202, 2, false, 1, 1),
    (7, 307, 3, true, 1, 2),
    (8, 101, 1, false, 1, 1),
];

/// (id, date_arrivee, date_depart, id_client, id_chambre)
pub const RESERVATIONS: &[(i64, &str, &str, i64, i64)] = &[
    (1, "2025-06-15", "2025-06-18", 1, 1),
    (2, "2025-07-01", "2025-07-05", 2, 2),
    (7, "2025-11-12", "2025-11-14", 2, 7),
    (10, "2026-02-01", "2026-02-05", 2, 5),
    (3, "2025-08-10", "2025-08-14", 3, 3),
    (4, "2025-09-05", "2025-09-07", 4, 4),
    (9, "2026-01-15", "2026-01-18", 4, 6),
    (5, "2025-09-20", "2025-09-25", 5, 8),
];

/// (id, date_evaluation, note, commentaire, id_reservation)
pub const EVALUATIONS: &[(i64, &str, i64, &str, i64)] = &[
    (1, "2025-06-15", 5, "Excellent séjour, personnel très accueillant.", 1),
    (2, "2025-07-01", 4, "Chambre propre, bon rapport qualité/prix.", 2),
    (3, "2025-08-10", 3, "Séjour correct mais bruyant la nuit.", 3),
    (4, "2025-09-05", 5, "Service impeccable, je recommande.", 4),
    (5, "2025-09-20", 4, "Très bon petit-déjeuner, hôtel bien situé.", 5),
];

/// Insert the seed rows that are not already present.
///
/// Returns the number of rows actually inserted.
pub async fn seed(conn: &mut SqliteConnection) -> Result<u64> {
    let mut inserted = 0;

    for &(id, ville, pays, code_postal) in HOTELS {
        inserted += sqlx::query("INSERT OR IGNORE INTO Hotel VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(ville)
            .bind(pays)
            .bind(code_postal)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    for &(id, adresse, ville, code_postal, email, telephone, nom) in CLIENTS {
        inserted += sqlx::query("INSERT OR IGNORE INTO Client VALUES (?, ?, ?, ?, ?, ?, ?)")
            .bind(id)
            .bind(adresse)
            .bind(ville)
            .bind(code_postal)
            .bind(email)
            .bind(telephone)
            .bind(nom)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    for &(id, prix, description) in PRESTATIONS {
        inserted += sqlx::query("INSERT OR IGNORE INTO Prestation VALUES (?, ?, ?)")
            .bind(id)
            .bind(prix)
            .bind(description)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    for &(id, nom, prix_nuit) in ROOM_TYPES {
        inserted += sqlx::query("INSERT OR IGNORE INTO TypeChambre VALUES (?, ?, ?)")
            .bind(id)
            .bind(nom)
            .bind(prix_nuit)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    for &(id, numero, etage, disponible, id_hotel, id_type) in ROOMS {
        inserted += sqlx::query("INSERT OR IGNORE INTO Chambre VALUES (?, ?, ?, ?, ?, ?)")
            .bind(id)
            .bind(numero)
            .bind(etage)
            .bind(disponible)
            .bind(id_hotel)
            .bind(id_type)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    for &(id, arrivee, depart, id_client, id_chambre) in RESERVATIONS {
        inserted += sqlx::query("INSERT OR IGNORE INTO Reservation VALUES (?, ?, ?, ?, ?)")
            .bind(id)
            .bind(arrivee)
            .bind(depart)
            .bind(id_client)
            .bind(id_chambre)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    for &(id, date, note, commentaire, id_reservation) in EVALUATIONS {
        inserted += sqlx::query("INSERT OR IGNORE INTO Evaluation VALUES (?, ?, ?, ?, ?)")
            .bind(id)
            .bind(date)
            .bind(note)
            .bind(commentaire)
            .bind(id_reservation)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    info!(inserted, "seed data loaded");
    Ok(inserted)
}
