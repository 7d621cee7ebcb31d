use askama::Template;
use axum::{
    http::{
        header::{HeaderValue, SET_COOKIE},
        StatusCode,
    },
    response::{Html, IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use super::flash::CLEAR_COOKIE;
use crate::store::StoreError;
use crate::views::ErrorPage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error")]
    DbErr(#[from] DbErr),

    #[error("Not found")]
    NotFound(Option<String>),
    #[error("Bad request")]
    BadRequest(Option<String>),

    #[error("Could not render page: {0}")]
    Render(#[from] askama::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page(&self) -> ErrorPage {
        match self {
            Error::NotFound(_) => ErrorPage::not_found(),
            Error::BadRequest(detail) => ErrorPage {
                flash: None,
                status: 400,
                title: "Bad Request".to_string(),
                message: detail
                    .to_owned()
                    .unwrap_or_else(|| "The request could not be understood.".to_string()),
            },
            _ => ErrorPage::server_error(),
        }
    }
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Db(e) => Error::DbErr(e),
            e @ StoreError::NotFound { .. } => Error::NotFound(Some(e.to_string())),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Error::DbErr(e) => tracing::error!(error = %e, "Database error while handling request"),
            Error::Render(e) => tracing::error!(error = %e, "Could not render page"),
            Error::NotFound(detail) | Error::BadRequest(detail) => {
                tracing::debug!(?detail, %status, "Request rejected")
            }
        }
        let mut response = match self.page().render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Could not render error page");
                (status, self.to_string()).into_response()
            }
        };
        // error pages never show a notice, so a pending one is dropped
        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_statuses() {
        let missing: Error = StoreError::not_found("Venue", 7).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let db: Error = StoreError::Db(DbErr::Custom("boom".to_string())).into();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn responses_render_the_error_page() {
        let response = Error::NotFound(None).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = Error::DbErr(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_pages_clear_the_pending_notice() {
        for error in [
            Error::NotFound(None),
            Error::BadRequest(Some("bad".to_string())),
            Error::DbErr(DbErr::Custom("boom".to_string())),
        ] {
            let response = error.into_response();
            let cookie = response.headers().get(SET_COOKIE).unwrap();
            assert_eq!(cookie, CLEAR_COOKIE);
        }
    }
}
