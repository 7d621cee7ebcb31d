//! Page templates. Every page carries the notice shown above its content.

use askama::Template;

use crate::api::flash::Notice;
use crate::forms::{ArtistForm, ShowForm, VenueForm, GENRES, STATES};
use crate::store::{Area, ArtistDetail, SearchResults, ShowRow, Summary, VenueDetail};

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub flash: Option<Notice>,
    pub venues: Vec<Summary>,
    pub artists: Vec<Summary>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesPage {
    pub flash: Option<Notice>,
    pub areas: Vec<Area>,
}

#[derive(Template)]
#[template(path = "pages/venue.html")]
pub struct VenuePage {
    pub flash: Option<Notice>,
    pub detail: VenueDetail,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsPage {
    pub flash: Option<Notice>,
    pub artists: Vec<Summary>,
}

#[derive(Template)]
#[template(path = "pages/artist.html")]
pub struct ArtistPage {
    pub flash: Option<Notice>,
    pub detail: ArtistDetail,
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsPage {
    pub flash: Option<Notice>,
    pub shows: Vec<ShowRow>,
}

/// Search results for either venues or artists; `kind` is the path segment.
#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchPage {
    pub flash: Option<Notice>,
    pub kind: &'static str,
    pub search_term: String,
    pub results: SearchResults,
}

#[derive(Template)]
#[template(path = "forms/venue.html")]
pub struct VenueFormPage {
    pub flash: Option<Notice>,
    pub title: String,
    pub action: String,
    pub form: VenueForm,
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl VenueFormPage {
    pub fn create(flash: Option<Notice>, form: VenueForm) -> Self {
        Self {
            flash,
            title: "List a new venue".to_string(),
            action: "/venues/create".to_string(),
            form,
            genres: GENRES,
            states: STATES,
        }
    }

    pub fn edit(flash: Option<Notice>, id: i32, form: VenueForm) -> Self {
        Self {
            flash,
            title: format!("Edit venue {}", form.name),
            action: format!("/venues/{}/edit", id),
            form,
            genres: GENRES,
            states: STATES,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/artist.html")]
pub struct ArtistFormPage {
    pub flash: Option<Notice>,
    pub title: String,
    pub action: String,
    pub form: ArtistForm,
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl ArtistFormPage {
    pub fn create(flash: Option<Notice>, form: ArtistForm) -> Self {
        Self {
            flash,
            title: "List a new artist".to_string(),
            action: "/artists/create".to_string(),
            form,
            genres: GENRES,
            states: STATES,
        }
    }

    pub fn edit(flash: Option<Notice>, id: i32, form: ArtistForm) -> Self {
        Self {
            flash,
            title: format!("Edit artist {}", form.name),
            action: format!("/artists/{}/edit", id),
            form,
            genres: GENRES,
            states: STATES,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/show.html")]
pub struct ShowFormPage {
    pub flash: Option<Notice>,
    pub form: ShowForm,
}

#[derive(Template)]
#[template(path = "errors/error.html")]
pub struct ErrorPage {
    pub flash: Option<Notice>,
    pub status: u16,
    pub title: String,
    pub message: String,
}

impl ErrorPage {
    pub fn not_found() -> Self {
        Self {
            flash: None,
            status: 404,
            title: "Not Found".to_string(),
            message: "The page you are looking for does not exist.".to_string(),
        }
    }

    pub fn server_error() -> Self {
        Self {
            flash: None,
            status: 500,
            title: "Server Error".to_string(),
            message: "Something went wrong on our end. Please try again later.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Listing;

    #[test]
    fn venues_page_lists_areas() {
        let page = VenuesPage {
            flash: None,
            areas: vec![Area {
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                venues: vec![Listing {
                    id: 1,
                    name: "The Musical Hop".to_string(),
                    num_upcoming_shows: 0,
                }],
            }],
        };
        let html = page.render().unwrap();
        assert!(html.contains("San Francisco, CA"));
        assert!(html.contains(r#"href="/venues/1""#));
    }

    #[test]
    fn notices_are_escaped() {
        let page = HomePage {
            flash: Some(Notice::success("Venue <b>Hop</b> was successfully listed!")),
            venues: Vec::new(),
            artists: Vec::new(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("Venue &lt;b&gt;Hop"));
        assert!(!html.contains("<b>Hop"));
    }

    #[test]
    fn venue_form_keeps_selections() {
        let form = VenueForm {
            state: "NY".to_string(),
            genres: vec!["Jazz".to_string()],
            seeking_talent: true,
            ..Default::default()
        };
        let html = VenueFormPage::create(None, form).render().unwrap();
        assert!(html.contains(r#"<option value="NY" selected>NY</option>"#));
        assert!(html.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
        assert!(html.contains(r#"<option value="Blues">Blues</option>"#));
        assert!(html.contains(r#"name="seeking_talent" value="y" checked"#));
    }

    #[test]
    fn error_page_shows_status() {
        let html = ErrorPage::not_found().render().unwrap();
        assert!(html.contains("404"));
    }
}
