//! One-shot notices carried across a redirect in the `flash` cookie.

use askama::Template;
use axum::{
    async_trait,
    extract::{FromRequestParts, TypedHeader},
    headers::Cookie,
    http::{
        header::{HeaderValue, SET_COOKIE},
        request::Parts,
        StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use std::convert::Infallible;

use super::Error;

pub static COOKIE_NAME: &str = "flash";
pub(crate) static CLEAR_COOKIE: &str = "flash=; Path=/; Max-Age=0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }

    pub fn encode(&self) -> String {
        let prefix = match self.kind {
            NoticeKind::Success => "s",
            NoticeKind::Error => "e",
        };
        urlencoding::encode(&format!("{}:{}", prefix, self.message)).into_owned()
    }

    pub fn decode(value: &str) -> Option<Self> {
        let value = urlencoding::decode(value).ok()?;
        match value.split_once(':')? {
            ("s", message) => Some(Notice::success(message)),
            ("e", message) => Some(Notice::error(message)),
            _ => None,
        }
    }
}

/// The notice left by the previous response, if any.
#[derive(Debug, Clone, Default)]
pub struct Flash(pub Option<Notice>);

impl Flash {
    pub fn notice(&self) -> Option<Notice> {
        self.0.clone()
    }

    /// Renders `page` with 200 and consumes the incoming notice.
    pub fn render<T: Template>(&self, page: T) -> Result<Response, Error> {
        self.render_with(StatusCode::OK, page)
    }

    pub fn render_with<T: Template>(&self, status: StatusCode, page: T) -> Result<Response, Error> {
        let mut response = (status, Html(page.render()?)).into_response();
        if self.0.is_some() {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
        }
        Ok(response)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = Option::<TypedHeader<Cookie>>::from_request_parts(parts, state).await?;
        Ok(Flash(cookies.and_then(|TypedHeader(cookies)| {
            cookies.get(COOKIE_NAME).and_then(Notice::decode)
        })))
    }
}

/// A `303 See Other` to `to` that leaves `notice` for the next page.
pub fn redirect(to: &str, notice: Notice) -> Response {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME,
        notice.encode()
    );
    ([(SET_COOKIE, cookie)], Redirect::to(to)).into_response()
}
