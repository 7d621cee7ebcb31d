//! Demo venues, artists and shows for a fresh database.

use thiserror::Error;
use time::macros::datetime;

use crate::store::{NewArtist, NewShow, NewVenue, Store, StoreError};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("The database already holds venues or artists")]
    NotEmpty,
    #[error("Could not store demo data: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeded {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn venues() -> Vec<NewVenue> {
    vec![
        NewVenue {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: "https://images.unsplash.com/photo-1543900694-133f37abaaa5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=400&q=60".to_string(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website_link: "https://www.themusicalhop.com".to_string(),
            genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            looking_for_talent: true,
            seeking_description: "We are on the lookout for a local artist to play every two weeks. Please call us.".to_string(),
        },
        NewVenue {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: "914-003-1132".to_string(),
            image_link: "https://images.unsplash.com/photo-1497032205916-ac775f0649ae?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=750&q=80".to_string(),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            website_link: "https://www.theduelingpianos.com".to_string(),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            looking_for_talent: false,
            seeking_description: String::new(),
        },
        NewVenue {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: "415-000-1234".to_string(),
            image_link: "https://images.unsplash.com/photo-1485686531765-ba63b07845a7?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=747&q=80".to_string(),
            facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            website_link: "https://www.parksquarelivemusicandcoffee.com".to_string(),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            looking_for_talent: false,
            seeking_description: String::new(),
        },
    ]
}

fn artists() -> Vec<NewArtist> {
    vec![
        NewArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: strings(&["Rock n Roll"]),
            image_link: "https://images.unsplash.com/photo-1549213783-8284d0336c4f?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=300&q=80".to_string(),
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            website_link: "https://www.gunsnpetalsband.com".to_string(),
            looking_for_venue: true,
            seeking_description: "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
        },
        NewArtist {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            genres: strings(&["Jazz"]),
            image_link: "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=334&q=80".to_string(),
            facebook_link: "https://www.facebook.com/mattquevedo923251523".to_string(),
            website_link: String::new(),
            looking_for_venue: false,
            seeking_description: String::new(),
        },
        NewArtist {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            genres: strings(&["Jazz", "Classical"]),
            image_link: "https://images.unsplash.com/photo-1558369981-f9ca78462e61?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=794&q=80".to_string(),
            facebook_link: String::new(),
            website_link: String::new(),
            looking_for_venue: false,
            seeking_description: String::new(),
        },
    ]
}

/// Inserts the demo records. Refuses to touch a database that already has
/// venues or artists.
pub async fn seed(store: &Store) -> Result<Seeded, SeedError> {
    if !store.recent_venues(1).await?.is_empty() || !store.recent_artists(1).await?.is_empty() {
        return Err(SeedError::NotEmpty);
    }

    let mut venue_ids = Vec::new();
    for venue in venues() {
        venue_ids.push(store.create_venue(venue).await?.id);
    }
    let mut artist_ids = Vec::new();
    for artist in artists() {
        artist_ids.push(store.create_artist(artist).await?.id);
    }

    // (venue, artist, start) as indexes into the lists above
    let shows = [
        (0, 0, datetime!(2019-05-21 21:30)),
        (2, 1, datetime!(2019-06-15 23:00)),
        (2, 2, datetime!(2035-04-01 20:00)),
        (2, 2, datetime!(2035-04-08 20:00)),
        (2, 2, datetime!(2035-04-15 20:00)),
    ];
    for (venue, artist, start_time) in shows {
        store
            .create_show(NewShow {
                venue_id: venue_ids[venue],
                artist_id: artist_ids[artist],
                start_time,
            })
            .await?;
    }

    let seeded = Seeded {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows: shows.len(),
    };
    tracing::info!(?seeded, "Seeded demo data");
    Ok(seeded)
}
