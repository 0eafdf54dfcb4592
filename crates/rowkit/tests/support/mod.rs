#![allow(dead_code)]

mod scripted_driver;
pub use scripted_driver::ScriptedDriver;

use rowkit::{Db, Record};

pub const CREATE_PERSONAS: &str = "CREATE TABLE personas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    NOMBRE TEXT,
    EDAD INTEGER,
    GENERO TEXT
)";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn personas(db: &Db) -> Record {
    Record::new(db, "personas", ["NOMBRE", "EDAD", "GENERO"])
}

/// A fresh in-memory SQLite database with an empty `personas` table.
pub async fn sqlite_db() -> Db {
    init_tracing();

    let db = Db::connect("sqlite::memory:").await.unwrap();
    db.execute_raw(CREATE_PERSONAS).await.unwrap();
    db
}

/// A database answering from `driver`'s script.
pub async fn scripted_db(driver: &ScriptedDriver) -> Db {
    init_tracing();

    Db::from_driver(driver.clone()).await.unwrap()
}
