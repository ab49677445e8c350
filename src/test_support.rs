use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::{db, models::NewMovie};

/// A freshly migrated in-memory database. One connection, since every
/// SQLite `:memory:` connection is its own database.
pub async fn memory_db() -> DatabaseConnection {
    db::connect_and_migrate("sqlite::memory:", 1).await.unwrap()
}

pub fn new_movie(code: &str, price: Decimal) -> NewMovie {
    NewMovie {
        code: code.to_string(),
        name: format!("Movie {code}"),
        price,
        is_available: Some(true),
    }
}

pub fn hnb_body(mid_rate: &str) -> String {
    format!(
        r#"[{{"broj_tecajnice":"32","datum_primjene":"2025-02-14","drzava":"SAD","drzava_iso":"USA","kupovni_tecaj":"1,040600","prodajni_tecaj":"1,037400","sifra_valute":"840","srednji_tecaj":"{mid_rate}","valuta":"USD"}}]"#
    )
}

/// An HNB stand-in answering the USD rate query with `body`.
pub async fn hnb_serving(status: u16, body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tecajn-eur/v3"))
        .and(query_param("valuta", "USD"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    server
}

/// An HNB stand-in publishing a USD mid rate of 1,039000.
pub async fn hnb_up() -> MockServer {
    hnb_serving(200, hnb_body("1,039000")).await
}

/// An HNB stand-in with no routes; every request gets a 404.
pub async fn hnb_down() -> MockServer {
    MockServer::start().await
}
