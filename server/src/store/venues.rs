use itertools::Itertools;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use std::collections::HashMap;
use time::PrimitiveDateTime;

use super::{
    shows::{self, ShowRow},
    term_condition, Listing, SearchResults, Store, StoreError, StoreResult, Summary,
};
use crate::schedule;

/// Venue attributes as submitted, used both to create and to update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub looking_for_talent: bool,
    pub seeking_description: String,
}

impl NewVenue {
    fn apply(self, active: &mut entity::VenueActive) {
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.address = Set(self.address);
        active.phone = Set(self.phone);
        active.image_link = Set(self.image_link);
        active.facebook_link = Set(self.facebook_link);
        active.website_link = Set(self.website_link);
        active.genres = Set(self.genres.into());
        active.looking_for_talent = Set(self.looking_for_talent);
        active.seeking_description = Set(self.seeking_description);
    }
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Listing>,
}

#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: entity::Venue,
    pub past_shows: Vec<ShowRow>,
    pub upcoming_shows: Vec<ShowRow>,
}

impl VenueDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Groups venues, already sorted by area, into one entry per (city, state).
pub(crate) fn group_areas(venues: Vec<entity::Venue>, upcoming: &HashMap<i32, usize>) -> Vec<Area> {
    let mut areas = Vec::new();
    for ((city, state), group) in &venues
        .into_iter()
        .group_by(|v| (v.city.to_owned(), v.state.to_owned()))
    {
        areas.push(Area {
            city,
            state,
            venues: group
                .map(|v| Listing {
                    num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
                    id: v.id,
                    name: v.name,
                })
                .collect(),
        });
    }
    areas
}

impl Store {
    pub async fn recent_venues(&self, limit: u64) -> StoreResult<Vec<Summary>> {
        let venues = entity::VenueEntity::find()
            .order_by_desc(entity::VenueColumn::Id)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(venues
            .into_iter()
            .map(|v| Summary {
                id: v.id,
                name: v.name,
            })
            .collect())
    }

    pub async fn list_areas(&self, now: PrimitiveDateTime) -> StoreResult<Vec<Area>> {
        let venues = entity::VenueEntity::find()
            .order_by_asc(entity::VenueColumn::State)
            .order_by_asc(entity::VenueColumn::City)
            .order_by_asc(entity::VenueColumn::Name)
            .order_by_asc(entity::VenueColumn::Id)
            .all(&self.db)
            .await?;
        let ids = venues.iter().map(|v| v.id).collect();
        let upcoming =
            shows::upcoming_counts(&self.db, entity::ShowColumn::VenueId, ids, now).await?;
        Ok(group_areas(venues, &upcoming))
    }

    pub async fn search_venues(
        &self,
        term: &str,
        match_location: bool,
        now: PrimitiveDateTime,
    ) -> StoreResult<SearchResults> {
        let venues = entity::VenueEntity::find()
            .filter(term_condition(
                term,
                entity::VenueColumn::Name,
                entity::VenueColumn::City,
                entity::VenueColumn::State,
                match_location,
            ))
            .order_by_asc(entity::VenueColumn::Name)
            .order_by_asc(entity::VenueColumn::Id)
            .all(&self.db)
            .await?;
        let ids = venues.iter().map(|v| v.id).collect();
        let upcoming =
            shows::upcoming_counts(&self.db, entity::ShowColumn::VenueId, ids, now).await?;
        tracing::debug!(%term, found = venues.len(), "Searched venues");
        Ok(venues
            .into_iter()
            .map(|v| Listing {
                num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.name,
            })
            .collect::<Vec<_>>()
            .into())
    }

    pub async fn venue(&self, id: i32) -> StoreResult<entity::Venue> {
        entity::VenueEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Venue", id))
    }

    pub async fn shows_for_venue(&self, id: i32) -> StoreResult<Vec<ShowRow>> {
        let shows = entity::ShowEntity::find()
            .filter(entity::ShowColumn::VenueId.eq(id))
            .order_by_asc(entity::ShowColumn::StartTime)
            .order_by_asc(entity::ShowColumn::Id)
            .all(&self.db)
            .await?;
        Ok(shows::rows(&self.db, shows).await?)
    }

    pub async fn venue_detail(&self, id: i32, now: PrimitiveDateTime) -> StoreResult<VenueDetail> {
        let venue = self.venue(id).await?;
        let split = schedule::partition(self.shows_for_venue(id).await?, now, |s| s.start_time);
        Ok(VenueDetail {
            venue,
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    pub async fn create_venue(&self, new: NewVenue) -> StoreResult<entity::Venue> {
        let tx = self.db.begin().await?;
        let mut active = entity::VenueActive {
            ..Default::default()
        };
        new.apply(&mut active);
        let venue = active.insert(&tx).await?;
        tx.commit().await?;
        tracing::info!(id = venue.id, name = %venue.name, "Created venue");
        Ok(venue)
    }

    pub async fn update_venue(&self, id: i32, changes: NewVenue) -> StoreResult<entity::Venue> {
        let tx = self.db.begin().await?;
        let venue = entity::VenueEntity::find_by_id(id)
            .one(&tx)
            .await?
            .ok_or(StoreError::not_found("Venue", id))?;
        let mut active: entity::VenueActive = venue.into();
        changes.apply(&mut active);
        let venue = active.update(&tx).await?;
        tx.commit().await?;
        tracing::info!(id, name = %venue.name, "Updated venue");
        Ok(venue)
    }

    /// Deletes the venue together with every show it hosts.
    pub async fn delete_venue(&self, id: i32) -> StoreResult<entity::Venue> {
        let tx = self.db.begin().await?;
        let venue = entity::VenueEntity::find_by_id(id)
            .one(&tx)
            .await?
            .ok_or(StoreError::not_found("Venue", id))?;
        let shows = entity::ShowEntity::delete_many()
            .filter(entity::ShowColumn::VenueId.eq(id))
            .exec(&tx)
            .await?;
        entity::VenueEntity::delete_by_id(id).exec(&tx).await?;
        tx.commit().await?;
        tracing::info!(id, name = %venue.name, shows = shows.rows_affected, "Deleted venue");
        Ok(venue)
    }
}
