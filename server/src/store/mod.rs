//! Data access for venues, artists and shows.
//!
//! Every write runs inside its own transaction. An early return drops the
//! uncommitted transaction, which rolls it back.

mod artists;
mod shows;
mod venues;

pub use artists::{ArtistDetail, NewArtist};
pub use shows::{NewShow, ShowRow};
pub use venues::{Area, NewVenue, VenueDetail};

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),

    #[error("{kind} {id} does not exist")]
    NotFound { kind: &'static str, id: i32 },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: i32) -> Self {
        StoreError::NotFound { kind, id }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A record reduced to what links need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: i32,
    pub name: String,
}

/// A venue or artist row in a listing, with its upcoming show count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Listing>,
}

impl From<Vec<Listing>> for SearchResults {
    fn from(data: Vec<Listing>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A "city, state" search term. Without a comma the whole term is a city
/// prefix; with one, the city must match exactly and the rest is a state
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTerm {
    pub city: String,
    pub state: Option<String>,
}

impl LocationTerm {
    pub fn parse(term: &str) -> Self {
        match term.split_once(',') {
            Some((city, state)) => Self {
                city: city.trim().to_lowercase(),
                state: Some(state.trim_start().to_lowercase()),
            },
            None => Self {
                city: term.trim_start().to_lowercase(),
                state: None,
            },
        }
    }

    fn condition<C: ColumnTrait>(&self, city: C, state: C) -> Condition {
        match &self.state {
            None => Condition::all().add(lower(city).like(format!("{}%", self.city))),
            Some(prefix) => Condition::all()
                .add(lower(city).eq(self.city.to_owned()))
                .add(lower(state).like(format!("{}%", prefix))),
        }
    }
}

fn lower<C: ColumnTrait>(column: C) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}

/// Case-insensitive name substring match, optionally widened to locations.
pub(crate) fn term_condition<C: ColumnTrait>(
    term: &str,
    name: C,
    city: C,
    state: C,
    match_location: bool,
) -> Condition {
    let by_name = lower(name).like(format!("%{}%", term.trim().to_lowercase()));
    if match_location {
        Condition::any()
            .add(by_name)
            .add(LocationTerm::parse(term).condition(city, state))
    } else {
        Condition::all().add(by_name)
    }
}
