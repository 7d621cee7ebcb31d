use axum::{extract::State, http::StatusCode, response::Response};

use super::{
    extract::{Form, Path},
    flash::{redirect, Flash, Notice},
    AppState, Error,
};
use crate::forms::{ArtistForm, SearchForm};
use crate::schedule;
use crate::store::StoreError;
use crate::views::{ArtistFormPage, ArtistPage, ArtistsPage, SearchPage};

pub async fn list(State(state): State<AppState>, flash: Flash) -> Result<Response, Error> {
    let artists = state.store.list_artists().await?;
    flash.render(ArtistsPage {
        flash: flash.notice(),
        artists,
    })
}

pub async fn search(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, Error> {
    let results = state
        .store
        .search_artists(
            &form.search_term,
            state.settings.search.match_location,
            schedule::now(),
        )
        .await?;
    flash.render(SearchPage {
        flash: flash.notice(),
        kind: "artists",
        search_term: form.search_term,
        results,
    })
}

pub async fn detail(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let detail = state.store.artist_detail(id, schedule::now()).await?;
    flash.render(ArtistPage {
        flash: flash.notice(),
        detail,
    })
}

pub async fn create_form(flash: Flash) -> Result<Response, Error> {
    flash.render(ArtistFormPage::create(flash.notice(), ArtistForm::default()))
}

pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<ArtistForm>,
) -> Result<Response, Error> {
    let record = match form.to_record() {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected artist form");
            let notice = Some(Notice::error(e.to_string()));
            return flash.render_with(
                StatusCode::UNPROCESSABLE_ENTITY,
                ArtistFormPage::create(notice, form),
            );
        }
    };
    match state.store.create_artist(record).await {
        Ok(artist) => Ok(redirect(
            &format!("/artists/{}", artist.id),
            Notice::success(format!("Artist {} was successfully listed!", artist.name)),
        )),
        Err(e) => {
            tracing::error!(error = %e, name = %form.name, "Could not create artist");
            Ok(redirect(
                "/",
                Notice::error(format!(
                    "An error occurred. Artist {} could not be listed.",
                    form.name
                )),
            ))
        }
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let artist = state.store.artist(id).await?;
    flash.render(ArtistFormPage::edit(
        flash.notice(),
        id,
        ArtistForm::from(&artist),
    ))
}

pub async fn edit(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, Error> {
    let record = match form.to_record() {
        Ok(record) => record,
        Err(e) => {
            state.store.artist(id).await?;
            let notice = Some(Notice::error(e.to_string()));
            return flash.render_with(
                StatusCode::UNPROCESSABLE_ENTITY,
                ArtistFormPage::edit(notice, id, form),
            );
        }
    };
    match state.store.update_artist(id, record).await {
        Ok(artist) => Ok(redirect(
            &format!("/artists/{}", id),
            Notice::success(format!("Artist {} has been updated", artist.name)),
        )),
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::error!(error = %e, id, "Could not update artist");
            Ok(redirect(
                &format!("/artists/{}", id),
                Notice::error(format!(
                    "An error occurred. Artist {} could not be updated.",
                    form.name
                )),
            ))
        }
    }
}
