mod support;
use support::{init_tracing, sqlite_db, ScriptedDriver};

use pretty_assertions::assert_eq;
use rowkit::{
    stmt::{Expr, Insert, Select, Value},
    Db, ExecResult,
};

#[tokio::test]
async fn connect_rejects_unknown_scheme() {
    init_tracing();

    let err = Db::connect("oracle://localhost/personas").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn connect_sqlite_in_memory() {
    let db = Db::connect("sqlite::memory:").await.unwrap();
    assert_eq!(db.url(), "sqlite::memory:");
}

#[tokio::test]
async fn execute_reports_count_and_key() {
    let db = sqlite_db().await;

    let mut insert = Insert::new("personas");
    insert.push("NOMBRE", "Ana");

    let res = db.execute(insert).await.unwrap();
    assert_eq!(
        res,
        ExecResult {
            count: 1,
            last_insert_id: Some(1),
        }
    );

    let rows = db
        .query(Select::all("personas").filter(Expr::eq(Expr::column("id"), Value::from(1))))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn clones_share_the_connection() {
    let db = sqlite_db().await;
    let other = db.clone();

    other
        .execute_raw("INSERT INTO personas (NOMBRE) VALUES ('Ana')")
        .await
        .unwrap();

    let rows = db.query(Select::all("personas")).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn one_operation_per_call() {
    let driver = ScriptedDriver::new();
    let db = Db::from_driver(driver.clone()).await.unwrap();
    assert_eq!(db.url(), "scripted:");

    db.execute_raw("DELETE FROM personas").await.unwrap();
    db.query(Select::all("personas").limit(1)).await.unwrap();

    assert_eq!(
        driver.sql(),
        ["DELETE FROM personas", "SELECT * FROM personas LIMIT 1"]
    );

    let ops = driver.ops();
    assert!(ops[0].is_exec_sql());
    assert!(ops[1].is_query_sql());
}
