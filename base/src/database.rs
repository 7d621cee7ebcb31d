use crate::setting::Database as DatabaseSettings;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("No database url configured")]
    MissingUrl,

    #[error("Error while connecting to the database: {0}")]
    Database(#[from] DbErr),
}

pub fn connect_options(settings: &DatabaseSettings) -> Result<ConnectOptions, DatabaseError> {
    if settings.url.is_empty() {
        return Err(DatabaseError::MissingUrl);
    }
    let mut opt = ConnectOptions::new(settings.url.to_owned());
    opt.max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .connect_timeout(Duration::from_secs(settings.connect_timeout))
        .acquire_timeout(Duration::from_secs(settings.connect_timeout))
        .sqlx_logging(settings.sqlx_logging);
    Ok(opt)
}

pub async fn open_database(settings: &DatabaseSettings) -> Result<DatabaseConnection, DatabaseError> {
    let url = &settings.url;
    tracing::trace! {%url, "Connecting to database"};
    Database::connect(connect_options(settings)?)
        .await
        .map_err(DatabaseError::Database)
}
