//! Table definitions.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so `create_schema` runs
//! on each store open. Foreign keys are declared but not enforced.

use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::error::Result;

const TABLES: &[(&str, &str)] = &[
    (
        "Hotel",
        r#"
        CREATE TABLE IF NOT EXISTS Hotel (
            id INTEGER PRIMARY KEY,
            ville TEXT,
            pays TEXT,
            code_postal INTEGER
        )
        "#,
    ),
    (
        "Client",
        r#"
        CREATE TABLE IF NOT EXISTS Client (
            id INTEGER PRIMARY KEY,
            adresse TEXT,
            ville TEXT,
            code_postal TEXT,
            email TEXT,
            telephone TEXT,
            nom TEXT
        )
        "#,
    ),
    (
        "Prestation",
        r#"
        CREATE TABLE IF NOT EXISTS Prestation (
            id INTEGER PRIMARY KEY,
            prix REAL,
            description TEXT
        )
        "#,
    ),
    (
        "TypeChambre",
        r#"
        CREATE TABLE IF NOT EXISTS TypeChambre (
            id INTEGER PRIMARY KEY,
            nom TEXT,
            prix_nuit REAL
        )
        "#,
    ),
    (
        "Chambre",
        r#"
        CREATE TABLE IF NOT EXISTS Chambre (
            id INTEGER PRIMARY KEY,
            numero INTEGER,
            etage INTEGER,
            disponible INTEGER,
            id_hotel INTEGER,
            id_type_chambre INTEGER,
            FOREIGN KEY (id_hotel) REFERENCES Hotel(id),
            FOREIGN KEY (id_type_chambre) REFERENCES TypeChambre(id)
        )
        "#,
    ),
    (
        "Reservation",
        r#"
        CREATE TABLE IF NOT EXISTS Reservation (
            id INTEGER PRIMARY KEY,
            date_arrivee TEXT,
            date_depart TEXT,
            id_client INTEGER,
            id_chambre INTEGER,
            FOREIGN KEY (id_client) REFERENCES Client(id),
            FOREIGN KEY (id_chambre) REFERENCES Chambre(id)
        )
        "#,
    ),
    (
        "Evaluation",
        r#"
        CREATE TABLE IF NOT EXISTS Evaluation (
            id INTEGER PRIMARY KEY,
            date_evaluation TEXT,
            note INTEGER,
            commentaire TEXT,
            id_reservation INTEGER,
            FOREIGN KEY (id_reservation) REFERENCES Reservation(id)
        )
        "#,
    ),
];

/// Names of all tables, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}

/// Create any missing table.
pub async fn create_schema(conn: &mut SqliteConnection) -> Result<()> {
    for &(name, ddl) in TABLES {
        debug!(table = name, "ensuring table");
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    info!("schema ready");
    Ok(())
}
