use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, LoaderTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use time::PrimitiveDateTime;

use super::{Store, StoreResult};
use crate::schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: PrimitiveDateTime,
}

/// A show joined with the display fields of its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRow {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: PrimitiveDateTime,
}

impl ShowRow {
    pub fn start_medium(&self) -> String {
        schedule::format_medium(self.start_time)
    }

    pub fn start_full(&self) -> String {
        schedule::format_full(self.start_time)
    }
}

pub(crate) async fn rows<C>(db: &C, shows: Vec<entity::Show>) -> Result<Vec<ShowRow>, DbErr>
where
    C: ConnectionTrait,
{
    if shows.is_empty() {
        return Ok(Vec::new());
    }
    let venues = shows.load_one(entity::VenueEntity, db).await?;
    let artists = shows.load_one(entity::ArtistEntity, db).await?;
    Ok(shows
        .into_iter()
        .zip(venues)
        .zip(artists)
        .filter_map(|((show, venue), artist)| {
            // foreign keys guarantee both sides; skip rather than fail if not
            let (venue, artist) = (venue?, artist?);
            Some(ShowRow {
                id: show.id,
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time,
            })
        })
        .collect())
}

#[derive(Debug, FromQueryResult)]
struct OwnerCount {
    owner: i32,
    count: i64,
}

/// Number of shows after `now` per venue or artist id, depending on `owner`.
pub(crate) async fn upcoming_counts<C>(
    db: &C,
    owner: entity::ShowColumn,
    ids: Vec<i32>,
    now: PrimitiveDateTime,
) -> Result<HashMap<i32, usize>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let counts = entity::ShowEntity::find()
        .select_only()
        .column_as(owner, "owner")
        .column_as(Expr::col(entity::ShowColumn::Id).count(), "count")
        .filter(owner.is_in(ids))
        .filter(entity::ShowColumn::StartTime.gt(now))
        .group_by(owner)
        .into_model::<OwnerCount>()
        .all(db)
        .await?;
    Ok(counts
        .into_iter()
        .map(|row| (row.owner, row.count.max(0) as usize))
        .collect())
}

impl Store {
    /// Every show, most recent start first.
    pub async fn list_shows(&self) -> StoreResult<Vec<ShowRow>> {
        let shows = entity::ShowEntity::find()
            .order_by_desc(entity::ShowColumn::StartTime)
            .order_by_desc(entity::ShowColumn::Id)
            .all(&self.db)
            .await?;
        Ok(rows(&self.db, shows).await?)
    }

    /// Referential integrity is left to the database's foreign keys.
    pub async fn create_show(&self, new: NewShow) -> StoreResult<entity::Show> {
        let tx = self.db.begin().await?;
        let show = entity::ShowActive {
            venue_id: Set(new.venue_id),
            artist_id: Set(new.artist_id),
            start_time: Set(new.start_time),
            ..Default::default()
        }
        .insert(&tx)
        .await?;
        tx.commit().await?;
        tracing::info!(
            id = show.id,
            venue = show.venue_id,
            artist = show.artist_id,
            "Created show"
        );
        Ok(show)
    }
}
