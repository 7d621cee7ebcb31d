use axum::{extract::State, http::StatusCode, response::Response};

use super::{
    extract::{Form, Path},
    flash::{redirect, Flash, Notice},
    AppState, Error,
};
use crate::forms::{SearchForm, VenueForm};
use crate::schedule;
use crate::store::StoreError;
use crate::views::{SearchPage, VenueFormPage, VenuePage, VenuesPage};

pub async fn list(State(state): State<AppState>, flash: Flash) -> Result<Response, Error> {
    let areas = state.store.list_areas(schedule::now()).await?;
    flash.render(VenuesPage {
        flash: flash.notice(),
        areas,
    })
}

pub async fn search(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<SearchForm>,
) -> Result<Response, Error> {
    let results = state
        .store
        .search_venues(
            &form.search_term,
            state.settings.search.match_location,
            schedule::now(),
        )
        .await?;
    flash.render(SearchPage {
        flash: flash.notice(),
        kind: "venues",
        search_term: form.search_term,
        results,
    })
}

pub async fn detail(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i32>,
) -> Result<Response, Error> {
    let detail = state.store.venue_detail(id, schedule::now()).await?;
    flash.render(VenuePage {
        flash: flash.notice(),
        detail,
    })
}

pub async fn create_form(flash: Flash) -> Result<Response, Error> {
    flash.render(VenueFormPage::create(flash.notice(), VenueForm::default()))
}

pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<VenueForm>,
) -> Result<Response, Error> {
    let record = match form.to_record() {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected venue form");
            let notice = Some(Notice::error(e.to_string()));
            return flash.render_with(
                StatusCode::UNPROCESSABLE_ENTITY,
                VenueFormPage::create(notice, form),
            );
        }
    };
    match state.store.create_venue(record).await {
        Ok(venue) => Ok(redirect(
            &format!("/venues/{}", venue.id),
            Notice::success(format!("Venue {} was successfully listed!", venue.name)),
        )),
        Err(e) => {
            tracing::error!(error = %e, name = %form.name, "Could not create venue");
            Ok(redirect(
                "/",
                Notice::error(format!(
                    "An error occurred. Venue {} could not be listed.",
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
    let venue = state.store.venue(id).await?;
    flash.render(VenueFormPage::edit(
        flash.notice(),
        id,
        VenueForm::from(&venue),
    ))
}

pub async fn edit(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response, Error> {
    let record = match form.to_record() {
        Ok(record) => record,
        Err(e) => {
            // the record must exist for the form to be shown again
            state.store.venue(id).await?;
            let notice = Some(Notice::error(e.to_string()));
            return flash.render_with(
                StatusCode::UNPROCESSABLE_ENTITY,
                VenueFormPage::edit(notice, id, form),
            );
        }
    };
    match state.store.update_venue(id, record).await {
        Ok(venue) => Ok(redirect(
            &format!("/venues/{}", id),
            Notice::success(format!("Venue {} has been updated", venue.name)),
        )),
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::error!(error = %e, id, "Could not update venue");
            Ok(redirect(
                &format!("/venues/{}", id),
                Notice::error(format!(
                    "An error occurred. Venue {} could not be updated.",
                    form.name
                )),
            ))
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response, Error> {
    match state.store.delete_venue(id).await {
        Ok(venue) => Ok(redirect(
            "/",
            Notice::success(format!("Venue {} was successfully deleted", venue.name)),
        )),
        Err(e @ StoreError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::error!(error = %e, id, "Could not delete venue");
            Ok(redirect(
                "/",
                Notice::error(format!("An error occurred. Venue {} could not be deleted.", id)),
            ))
        }
    }
}
