use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use time::PrimitiveDateTime;

use super::{
    shows::{self, ShowRow},
    term_condition, Listing, SearchResults, Store, StoreError, StoreResult, Summary,
};
use crate::schedule;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub looking_for_venue: bool,
    pub seeking_description: String,
}

impl NewArtist {
    fn apply(self, active: &mut entity::ArtistActive) {
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.phone = Set(self.phone);
        active.genres = Set(self.genres.into());
        active.image_link = Set(self.image_link);
        active.facebook_link = Set(self.facebook_link);
        active.website_link = Set(self.website_link);
        active.looking_for_venue = Set(self.looking_for_venue);
        active.seeking_description = Set(self.seeking_description);
    }
}

#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: entity::Artist,
    pub past_shows: Vec<ShowRow>,
    pub upcoming_shows: Vec<ShowRow>,
}

impl ArtistDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

impl Store {
    pub async fn recent_artists(&self, limit: u64) -> StoreResult<Vec<Summary>> {
        let artists = entity::ArtistEntity::find()
            .order_by_desc(entity::ArtistColumn::Id)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(artists
            .into_iter()
            .map(|a| Summary {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    pub async fn list_artists(&self) -> StoreResult<Vec<Summary>> {
        let artists = entity::ArtistEntity::find()
            .order_by_asc(entity::ArtistColumn::Name)
            .order_by_asc(entity::ArtistColumn::Id)
            .all(&self.db)
            .await?;
        Ok(artists
            .into_iter()
            .map(|a| Summary {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    pub async fn search_artists(
        &self,
        term: &str,
        match_location: bool,
        now: PrimitiveDateTime,
    ) -> StoreResult<SearchResults> {
        let artists = entity::ArtistEntity::find()
            .filter(term_condition(
                term,
                entity::ArtistColumn::Name,
                entity::ArtistColumn::City,
                entity::ArtistColumn::State,
                match_location,
            ))
            .order_by_asc(entity::ArtistColumn::Name)
            .order_by_asc(entity::ArtistColumn::Id)
            .all(&self.db)
            .await?;
        let ids = artists.iter().map(|a| a.id).collect();
        let upcoming =
            shows::upcoming_counts(&self.db, entity::ShowColumn::ArtistId, ids, now).await?;
        tracing::debug!(%term, found = artists.len(), "Searched artists");
        Ok(artists
            .into_iter()
            .map(|a| Listing {
                num_upcoming_shows: upcoming.get(&a.id).copied().unwrap_or(0),
                id: a.id,
                name: a.name,
            })
            .collect::<Vec<_>>()
            .into())
    }

    pub async fn artist(&self, id: i32) -> StoreResult<entity::Artist> {
        entity::ArtistEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Artist", id))
    }

    pub async fn shows_for_artist(&self, id: i32) -> StoreResult<Vec<ShowRow>> {
        let shows = entity::ShowEntity::find()
            .filter(entity::ShowColumn::ArtistId.eq(id))
            .order_by_asc(entity::ShowColumn::StartTime)
            .order_by_asc(entity::ShowColumn::Id)
            .all(&self.db)
            .await?;
        Ok(shows::rows(&self.db, shows).await?)
    }

    pub async fn artist_detail(
        &self,
        id: i32,
        now: PrimitiveDateTime,
    ) -> StoreResult<ArtistDetail> {
        let artist = self.artist(id).await?;
        let split = schedule::partition(self.shows_for_artist(id).await?, now, |s| s.start_time);
        Ok(ArtistDetail {
            artist,
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    pub async fn create_artist(&self, new: NewArtist) -> StoreResult<entity::Artist> {
        let tx = self.db.begin().await?;
        let mut active = entity::ArtistActive {
            ..Default::default()
        };
        new.apply(&mut active);
        let artist = active.insert(&tx).await?;
        tx.commit().await?;
        tracing::info!(id = artist.id, name = %artist.name, "Created artist");
        Ok(artist)
    }

    pub async fn update_artist(&self, id: i32, changes: NewArtist) -> StoreResult<entity::Artist> {
        let tx = self.db.begin().await?;
        let artist = entity::ArtistEntity::find_by_id(id)
            .one(&tx)
            .await?
            .ok_or(StoreError::not_found("Artist", id))?;
        let mut active: entity::ArtistActive = artist.into();
        changes.apply(&mut active);
        let artist = active.update(&tx).await?;
        tx.commit().await?;
        tracing::info!(id, name = %artist.name, "Updated artist");
        Ok(artist)
    }
}
