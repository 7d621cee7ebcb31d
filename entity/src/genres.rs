use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Genre names, stored as a JSON list column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

impl Genres {
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Genres {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Genres> for Vec<String> {
    fn from(value: Genres) -> Self {
        value.0
    }
}
