use axum::extract::State;
use axum::response::Response;

use super::{flash::Flash, AppState, Error};
use crate::views::HomePage;

pub async fn home(State(state): State<AppState>, flash: Flash) -> Result<Response, Error> {
    let recent = state.settings.home.recent;
    let venues = state.store.recent_venues(recent).await?;
    let artists = state.store.recent_artists(recent).await?;
    flash.render(HomePage {
        flash: flash.notice(),
        venues,
        artists,
    })
}

pub async fn not_found() -> Error {
    Error::NotFound(None)
}
