#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use base::setting::Settings;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use time::PrimitiveDateTime;

use gigbook::api::{self, AppState};
use gigbook::store::{NewArtist, NewShow, NewVenue, Store};

/// A migrated in-memory database. A single pooled connection keeps the
/// memory database alive for the whole test.
pub async fn store() -> Store {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Store::new(db)
}

pub fn app(store: &Store) -> Router {
    api::router(AppState::new(store.clone(), Settings::default()))
}

pub fn venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        ..Default::default()
    }
}

pub fn artist(name: &str, city: &str, state: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..Default::default()
    }
}

pub async fn show(store: &Store, venue_id: i32, artist_id: i32, start_time: PrimitiveDateTime) {
    store
        .create_show(NewShow {
            venue_id,
            artist_id,
            start_time,
        })
        .await
        .unwrap();
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response<axum::body::BoxBody>) -> String {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn header_value(response: &Response<axum::body::BoxBody>, name: header::HeaderName) -> String {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

/// The `name=value` part of a Set-Cookie header, ready to send back.
pub fn cookie_pair(response: &Response<axum::body::BoxBody>) -> String {
    header_value(response, header::SET_COOKIE)
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}
