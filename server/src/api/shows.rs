use axum::{extract::State, http::StatusCode, response::Response};

use super::{
    extract::Form,
    flash::{redirect, Flash, Notice},
    AppState, Error,
};
use crate::forms::ShowForm;
use crate::schedule;
use crate::views::{ShowFormPage, ShowsPage};

pub async fn list(State(state): State<AppState>, flash: Flash) -> Result<Response, Error> {
    let shows = state.store.list_shows().await?;
    flash.render(ShowsPage {
        flash: flash.notice(),
        shows,
    })
}

pub async fn create_form(flash: Flash) -> Result<Response, Error> {
    flash.render(ShowFormPage {
        flash: flash.notice(),
        form: ShowForm::starting_at(schedule::now()),
    })
}

pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<ShowForm>,
) -> Result<Response, Error> {
    let record = match form.to_record() {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected show form");
            return flash.render_with(
                StatusCode::UNPROCESSABLE_ENTITY,
                ShowFormPage {
                    flash: Some(Notice::error(e.to_string())),
                    form,
                },
            );
        }
    };
    match state.store.create_show(record).await {
        Ok(_) => Ok(redirect("/", Notice::success("Show was successfully listed!"))),
        Err(e) => {
            tracing::error!(
                error = %e,
                venue = record.venue_id,
                artist = record.artist_id,
                "Could not create show"
            );
            Ok(redirect(
                "/",
                Notice::error("An error occurred. Show could not be listed."),
            ))
        }
    }
}
