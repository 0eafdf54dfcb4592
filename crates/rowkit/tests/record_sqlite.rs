mod support;
use support::{personas, sqlite_db};

use pretty_assertions::assert_eq;
use rowkit::Record;

#[tokio::test]
async fn create_then_find_restores_attributes() {
    let db = sqlite_db().await;

    let mut ana = personas(&db);
    ana.set("NOMBRE", "Ana");
    ana.set("EDAD", "30");
    assert!(ana.create().await);
    assert_eq!(ana.id(), Some("1"));

    let mut found = personas(&db);
    assert!(found.find(1).await);
    assert_eq!(found.get("id"), "1");
    assert_eq!(found.get("NOMBRE"), "Ana");
    assert_eq!(found.get("EDAD"), "30");
    assert_eq!(found.get("GENERO"), "");
}

#[tokio::test]
async fn all_returns_rows_in_insertion_order() {
    let db = sqlite_db().await;

    for (nombre, edad) in [("Ana", "30"), ("Luis", "41")] {
        let mut record = personas(&db);
        record.set("NOMBRE", nombre).set("EDAD", edad);
        assert!(record.save().await);
    }

    let rows = personas(&db).all().await;
    let names: Vec<_> = rows.iter().map(|row| row["NOMBRE"].as_str()).collect();
    assert_eq!(names, ["Ana", "Luis"]);
    assert_eq!(
        rows[0].keys().map(String::as_str).collect::<Vec<_>>(),
        ["id", "NOMBRE", "EDAD", "GENERO"]
    );
}

#[tokio::test]
async fn filter_narrows() {
    let db = sqlite_db().await;

    for (nombre, edad) in [("Ana", "30"), ("Mariana", "25"), ("Luis", "33")] {
        let mut record = personas(&db);
        record.set("NOMBRE", nombre).set("EDAD", edad);
        assert!(record.create().await);
    }

    let record = personas(&db);

    let rows = record.filter("NOMBRE", "ana").all().await;
    assert_eq!(rows.len(), 2);

    let rows = record.filter("NOMBRE", "ana").filter("EDAD", "3").all().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["NOMBRE"], "Ana");

    let row = record.filter("NOMBRE", "Luis").first().await;
    assert_eq!(row["EDAD"], "33");

    assert!(record.filter("NOMBRE", "Zoe").first().await.is_empty());
}

#[tokio::test]
async fn update_persists_changes() {
    let db = sqlite_db().await;

    let mut record = personas(&db);
    record.set("NOMBRE", "Ana").set("EDAD", "30");
    assert!(record.save().await);

    record.set("EDAD", "31");
    assert!(record.save().await);

    let mut found = personas(&db);
    assert!(found.find(1).await);
    assert_eq!(found.get("EDAD"), "31");
    assert_eq!(personas(&db).all().await.len(), 1);
}

#[tokio::test]
async fn delete_then_find_returns_false() {
    let db = sqlite_db().await;

    let mut record = personas(&db);
    record.set("NOMBRE", "Ana");
    assert!(record.create().await);

    assert!(record.delete().await);
    assert!(!record.is_persisted());

    let mut found = personas(&db);
    assert!(!found.find(1).await);
    assert!(personas(&db).all().await.is_empty());
}

#[tokio::test]
async fn quotes_round_trip() {
    let db = sqlite_db().await;

    let mut record = personas(&db);
    record.set("NOMBRE", "O'Brien");
    assert!(record.create().await);

    let mut found = personas(&db);
    assert!(found.find(1).await);
    assert_eq!(found.get("NOMBRE"), "O'Brien");
}

#[tokio::test]
async fn raw_query_reads_verbatim() {
    let db = sqlite_db().await;

    for nombre in ["Luis", "Ana"] {
        let mut record = personas(&db);
        record.set("NOMBRE", nombre);
        assert!(record.create().await);
    }

    let sorted = personas(&db).raw("SELECT NOMBRE FROM personas ORDER BY NOMBRE");

    let rows = sorted.all().await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0]["NOMBRE"], "Ana");

    assert_eq!(sorted.first().await["NOMBRE"], "Ana");
}

#[tokio::test]
async fn bad_table_reports_failure() {
    let db = sqlite_db().await;

    let mut record = Record::new(&db, "no_such_table", ["NOMBRE"]);
    record.set("NOMBRE", "Ana");

    assert!(!record.create().await);
    assert!(!record.find(1).await);
    assert!(record.all().await.is_empty());

    let err = record.try_all().await.unwrap_err();
    assert!(err.is_driver_operation_failed());
}
