//! Submitted form fields and their constraints.
//!
//! Text fields are trimmed on arrival, so constraints apply to what would be
//! stored. Otherwise every field is kept as submitted so an invalid form can
//! be rendered back. `to_record` validates and converts into the store's
//! input types.

use serde::{Deserialize, Deserializer};
use serde_valid::{validation::Errors, Validate};
use thiserror::Error;

use crate::schedule;
use crate::store::{NewArtist, NewShow, NewVenue};

pub static GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Swing",
    "Other",
];

pub static STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please correct the following fields: {}", .0.join(", "))]
    Invalid(Vec<String>),
}

impl From<Errors> for FormError {
    fn from(errors: Errors) -> Self {
        let fields = serde_json::to_value(&errors)
            .ok()
            .and_then(|v| {
                v.get("properties")
                    .and_then(|p| p.as_object())
                    .map(|p| p.keys().cloned().collect::<Vec<_>>())
            })
            .filter(|fields| !fields.is_empty())
            .unwrap_or_else(|| vec![errors.to_string()]);
        FormError::Invalid(fields)
    }
}

/// Accepts a single value or a repeated key (multi-selects).
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(v) if v.is_empty() => Vec::new(),
        OneOrMany::One(v) => vec![v],
        OneOrMany::Many(v) => v.into_iter().filter(|v| !v.is_empty()).collect(),
    })
}

/// Surrounding whitespace never counts towards a required field.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_owned())
}

/// Checkboxes are sent only when ticked.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(one_or_many(deserializer)?
        .iter()
        .any(|v| matches!(v.to_lowercase().as_str(), "y" | "yes" | "on" | "true" | "1")))
}

#[allow(clippy::ptr_arg)]
fn valid_state(state: &String) -> Result<(), serde_valid::validation::Error> {
    if STATES.contains(&state.as_str()) {
        Ok(())
    } else {
        Err(serde_valid::validation::Error::Custom(format!(
            "unknown state {state:?}"
        )))
    }
}

#[allow(clippy::ptr_arg)]
fn valid_genres(genres: &Vec<String>) -> Result<(), serde_valid::validation::Error> {
    match genres.iter().find(|g| !GENRES.contains(&g.as_str())) {
        None => Ok(()),
        Some(g) => Err(serde_valid::validation::Error::Custom(format!(
            "unknown genre {g:?}"
        ))),
    }
}

#[allow(clippy::ptr_arg)]
fn valid_link(link: &String) -> Result<(), serde_valid::validation::Error> {
    if link.is_empty() || link.starts_with("http://") || link.starts_with("https://") {
        Ok(())
    } else {
        Err(serde_valid::validation::Error::Custom(
            "links must start with http:// or https://".to_string(),
        ))
    }
}

#[allow(clippy::ptr_arg)]
fn valid_id(id: &String) -> Result<(), serde_valid::validation::Error> {
    match id.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(()),
        _ => Err(serde_valid::validation::Error::Custom(
            "must be a positive number".to_string(),
        )),
    }
}

#[allow(clippy::ptr_arg)]
fn valid_start_time(start: &String) -> Result<(), serde_valid::validation::Error> {
    schedule::parse_start(start).map(|_| ()).ok_or_else(|| {
        serde_valid::validation::Error::Custom("expected YYYY-MM-DD HH:MM:SS".to_string())
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[validate(min_length = 1)]
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    #[serde(deserialize_with = "trimmed")]
    pub city: String,
    #[validate(custom(valid_state))]
    pub state: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    #[serde(deserialize_with = "trimmed")]
    pub address: String,
    #[validate(pattern = r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$")]
    #[serde(deserialize_with = "trimmed")]
    pub phone: String,
    #[validate(max_length = 500)]
    #[validate(custom(valid_link))]
    pub image_link: String,
    #[serde(deserialize_with = "one_or_many")]
    #[validate(min_items = 1)]
    #[validate(custom(valid_genres))]
    pub genres: Vec<String>,
    #[validate(max_length = 120)]
    #[validate(custom(valid_link))]
    pub facebook_link: String,
    #[validate(max_length = 120)]
    #[validate(custom(valid_link))]
    pub website_link: String,
    #[serde(deserialize_with = "checkbox")]
    pub seeking_talent: bool,
    #[validate(max_length = 500)]
    pub seeking_description: String,
}

impl VenueForm {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn is_state(&self, state: &str) -> bool {
        self.state == state
    }

    pub fn to_record(&self) -> Result<NewVenue, FormError> {
        self.validate()?;
        Ok(NewVenue {
            name: self.name.to_owned(),
            city: self.city.to_owned(),
            state: self.state.to_owned(),
            address: self.address.to_owned(),
            phone: self.phone.to_owned(),
            image_link: self.image_link.to_owned(),
            facebook_link: self.facebook_link.to_owned(),
            website_link: self.website_link.to_owned(),
            genres: self.genres.to_owned(),
            looking_for_talent: self.seeking_talent,
            seeking_description: self.seeking_description.to_owned(),
        })
    }
}

impl From<&entity::Venue> for VenueForm {
    fn from(venue: &entity::Venue) -> Self {
        Self {
            name: venue.name.to_owned(),
            city: venue.city.to_owned(),
            state: venue.state.to_owned(),
            address: venue.address.to_owned(),
            phone: venue.phone.to_owned(),
            image_link: venue.image_link.to_owned(),
            genres: venue.genres.0.to_owned(),
            facebook_link: venue.facebook_link.to_owned(),
            website_link: venue.website_link.to_owned(),
            seeking_talent: venue.looking_for_talent,
            seeking_description: venue.seeking_description.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[validate(min_length = 1)]
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    #[serde(deserialize_with = "trimmed")]
    pub city: String,
    #[validate(custom(valid_state))]
    pub state: String,
    #[validate(pattern = r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$")]
    #[serde(deserialize_with = "trimmed")]
    pub phone: String,
    #[validate(max_length = 500)]
    #[validate(custom(valid_link))]
    pub image_link: String,
    #[serde(deserialize_with = "one_or_many")]
    #[validate(min_items = 1)]
    #[validate(custom(valid_genres))]
    pub genres: Vec<String>,
    #[validate(max_length = 120)]
    #[validate(custom(valid_link))]
    pub facebook_link: String,
    #[validate(max_length = 120)]
    #[validate(custom(valid_link))]
    pub website_link: String,
    #[serde(deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    #[validate(max_length = 500)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn is_state(&self, state: &str) -> bool {
        self.state == state
    }

    pub fn to_record(&self) -> Result<NewArtist, FormError> {
        self.validate()?;
        Ok(NewArtist {
            name: self.name.to_owned(),
            city: self.city.to_owned(),
            state: self.state.to_owned(),
            phone: self.phone.to_owned(),
            genres: self.genres.to_owned(),
            image_link: self.image_link.to_owned(),
            facebook_link: self.facebook_link.to_owned(),
            website_link: self.website_link.to_owned(),
            looking_for_venue: self.seeking_venue,
            seeking_description: self.seeking_description.to_owned(),
        })
    }
}

impl From<&entity::Artist> for ArtistForm {
    fn from(artist: &entity::Artist) -> Self {
        Self {
            name: artist.name.to_owned(),
            city: artist.city.to_owned(),
            state: artist.state.to_owned(),
            phone: artist.phone.to_owned(),
            image_link: artist.image_link.to_owned(),
            genres: artist.genres.0.to_owned(),
            facebook_link: artist.facebook_link.to_owned(),
            website_link: artist.website_link.to_owned(),
            seeking_venue: artist.looking_for_venue,
            seeking_description: artist.seeking_description.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ShowForm {
    #[validate(custom(valid_id))]
    pub artist_id: String,
    #[validate(custom(valid_id))]
    pub venue_id: String,
    #[validate(custom(valid_start_time))]
    pub start_time: String,
}

impl ShowForm {
    pub fn starting_at(start_time: time::PrimitiveDateTime) -> Self {
        Self {
            start_time: schedule::format_input(start_time),
            ..Default::default()
        }
    }

    pub fn to_record(&self) -> Result<NewShow, FormError> {
        self.validate()?;
        let invalid = |field: &str| FormError::Invalid(vec![field.to_string()]);
        Ok(NewShow {
            artist_id: self
                .artist_id
                .trim()
                .parse()
                .map_err(|_| invalid("artist_id"))?,
            venue_id: self
                .venue_id
                .trim()
                .parse()
                .map_err(|_| invalid("venue_id"))?,
            start_time: schedule::parse_start(&self.start_time)
                .ok_or_else(|| invalid("start_time"))?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}
