mod common;

use gigbook::store::StoreError;
use time::macros::datetime;

use common::{artist, show, store, venue};

#[tokio::test]
async fn upcoming_counts_only_include_later_shows() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let park = store
        .create_venue(venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    let pianos = store
        .create_venue(venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let band = store
        .create_artist(artist("The Wild Sax Band", "San Francisco", "CA"))
        .await
        .unwrap();

    let now = datetime!(2020-01-01 00:00);
    show(&store, hop.id, band.id, datetime!(2019-05-21 21:30)).await;
    show(&store, park.id, band.id, datetime!(2035-04-01 20:00)).await;
    show(&store, park.id, band.id, datetime!(2035-04-08 20:00)).await;
    // starting exactly now is not upcoming
    show(&store, pianos.id, band.id, now).await;

    let areas = store.list_areas(now).await.unwrap();
    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
    assert_eq!(areas[1].state, "NY");

    let counts: Vec<(i32, usize)> = areas
        .iter()
        .flat_map(|a| a.venues.iter().map(|v| (v.id, v.num_upcoming_shows)))
        .collect();
    assert!(counts.contains(&(hop.id, 0)));
    assert!(counts.contains(&(park.id, 2)));
    assert!(counts.contains(&(pianos.id, 0)));

    let results = store.search_artists("sax", false, now).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].num_upcoming_shows, 2);
}

#[tokio::test]
async fn upcoming_counts_are_grouped_per_record() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let petals = store
        .create_artist(artist("Guns N Petals", "San Francisco", "CA"))
        .await
        .unwrap();
    let band = store
        .create_artist(artist("The Wild Sax Band", "San Francisco", "CA"))
        .await
        .unwrap();
    let quevedo = store
        .create_artist(artist("Matt Quevedo", "New York", "NY"))
        .await
        .unwrap();

    let now = datetime!(2020-01-01 00:00);
    show(&store, hop.id, petals.id, datetime!(2035-04-01 20:00)).await;
    show(&store, hop.id, band.id, datetime!(2035-04-08 20:00)).await;
    show(&store, hop.id, band.id, datetime!(2035-04-15 20:00)).await;
    show(&store, hop.id, band.id, datetime!(2035-04-22 20:00)).await;
    show(&store, hop.id, quevedo.id, datetime!(2019-06-15 23:00)).await;

    let results = store.search_artists("", false, now).await.unwrap();
    assert_eq!(results.count, 3);
    let counts: Vec<(i32, usize)> = results
        .data
        .iter()
        .map(|a| (a.id, a.num_upcoming_shows))
        .collect();
    assert!(counts.contains(&(petals.id, 1)));
    assert!(counts.contains(&(band.id, 3)));
    assert!(counts.contains(&(quevedo.id, 0)));

    let results = store.search_venues("hop", false, now).await.unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 4);
}

#[tokio::test]
async fn venue_search_is_case_insensitive_substring() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    store
        .create_venue(venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let now = datetime!(2020-01-01 00:00);

    for term in ["Hop", "hop", "MUSICAL h"] {
        let results = store.search_venues(term, false, now).await.unwrap();
        assert_eq!(results.count, 1, "searching {term:?}");
        assert_eq!(results.data[0].id, hop.id);
    }

    let results = store.search_venues("xyz", false, now).await.unwrap();
    assert_eq!(results.count, 0);
    assert!(results.data.is_empty());

    let results = store.search_venues("", false, now).await.unwrap();
    assert_eq!(results.count, 2);
}

#[tokio::test]
async fn location_search_is_opt_in() {
    let store = store().await;
    store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    store
        .create_venue(venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let now = datetime!(2020-01-01 00:00);

    assert_eq!(
        store.search_venues("San Francisco, C", false, now).await.unwrap().count,
        0
    );
    let results = store
        .search_venues("San Francisco, C", true, now)
        .await
        .unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Musical Hop");

    let results = store.search_venues("new y", true, now).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "The Dueling Pianos Bar");
}

#[tokio::test]
async fn created_venue_reads_back_identically() {
    let store = store().await;
    let mut new = venue("The Musical Hop", "San Francisco", "CA");
    new.website_link = "https://www.themusicalhop.com".to_string();
    new.looking_for_talent = true;
    new.seeking_description = "We are on the lookout for a local artist.".to_string();

    let created = store.create_venue(new.clone()).await.unwrap();
    let stored = store.venue(created.id).await.unwrap();
    assert_eq!(stored, created);
    assert_eq!(stored.name, new.name);
    assert_eq!(stored.city, new.city);
    assert_eq!(stored.state, new.state);
    assert_eq!(stored.address, new.address);
    assert_eq!(stored.phone, new.phone);
    assert_eq!(stored.genres.0, new.genres);
    assert_eq!(stored.website_link, new.website_link);
    assert_eq!(stored.facebook_link, "");
    assert!(stored.looking_for_talent);
    assert_eq!(stored.seeking_description, new.seeking_description);
}

#[tokio::test]
async fn editing_a_name_leaves_other_fields_alone() {
    let store = store().await;
    let created = store
        .create_artist(artist("Guns N Petals", "San Francisco", "CA"))
        .await
        .unwrap();

    let mut changes = artist("Guns N Roses", "San Francisco", "CA");
    changes.genres = created.genres.0.clone();
    let updated = store.update_artist(created.id, changes).await.unwrap();
    assert_eq!(updated.name, "Guns N Roses");

    let stored = store.artist(created.id).await.unwrap();
    assert_eq!(stored.name, "Guns N Roses");
    assert_eq!(stored.city, created.city);
    assert_eq!(stored.phone, created.phone);
    assert_eq!(stored.genres, created.genres);
    assert_eq!(stored.looking_for_venue, created.looking_for_venue);
}

#[tokio::test]
async fn updating_a_missing_record_is_not_found() {
    let store = store().await;
    let result = store
        .update_venue(42, venue("Nowhere", "Nowhere", "CA"))
        .await;
    assert!(matches!(
        result,
        Err(StoreError::NotFound { kind: "Venue", id: 42 })
    ));
    assert!(matches!(
        store.artist_detail(42, datetime!(2020-01-01 00:00)).await,
        Err(StoreError::NotFound { kind: "Artist", id: 42 })
    ));
}

#[tokio::test]
async fn deleting_a_venue_removes_it_and_its_shows() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let park = store
        .create_venue(venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    let petals = store
        .create_artist(artist("Guns N Petals", "San Francisco", "CA"))
        .await
        .unwrap();
    show(&store, hop.id, petals.id, datetime!(2019-05-21 21:30)).await;
    show(&store, park.id, petals.id, datetime!(2035-04-01 20:00)).await;

    let deleted = store.delete_venue(hop.id).await.unwrap();
    assert_eq!(deleted.name, "The Musical Hop");

    assert!(matches!(
        store.venue(hop.id).await,
        Err(StoreError::NotFound { .. })
    ));
    let areas = store.list_areas(datetime!(2020-01-01 00:00)).await.unwrap();
    let ids: Vec<i32> = areas
        .iter()
        .flat_map(|a| a.venues.iter().map(|v| v.id))
        .collect();
    assert_eq!(ids, vec![park.id]);

    let shows = store.list_shows().await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].venue_id, park.id);
    assert!(store.shows_for_artist(petals.id).await.unwrap().iter().all(|s| s.venue_id != hop.id));

    assert!(matches!(
        store.delete_venue(hop.id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn past_shows_are_never_upcoming() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let petals = store
        .create_artist(artist("Guns N Petals", "San Francisco", "CA"))
        .await
        .unwrap();
    show(&store, hop.id, petals.id, datetime!(2019-05-21 21:30)).await;
    show(&store, hop.id, petals.id, datetime!(2035-04-15 20:00)).await;
    let now = datetime!(2020-01-01 00:00);

    let detail = store.venue_detail(hop.id, now).await.unwrap();
    assert_eq!(detail.past_shows_count(), 1);
    assert_eq!(detail.upcoming_shows_count(), 1);
    assert_eq!(detail.past_shows[0].start_time, datetime!(2019-05-21 21:30));
    assert_eq!(detail.past_shows[0].artist_name, "Guns N Petals");
    assert_eq!(detail.upcoming_shows[0].start_time, datetime!(2035-04-15 20:00));

    let detail = store.artist_detail(petals.id, now).await.unwrap();
    assert_eq!(detail.past_shows.len(), 1);
    assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");
    assert!(detail
        .upcoming_shows
        .iter()
        .all(|s| s.start_time > now));
}

#[tokio::test]
async fn shows_are_listed_latest_first() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let petals = store
        .create_artist(artist("Guns N Petals", "San Francisco", "CA"))
        .await
        .unwrap();
    show(&store, hop.id, petals.id, datetime!(2019-05-21 21:30)).await;
    show(&store, hop.id, petals.id, datetime!(2035-04-15 20:00)).await;
    show(&store, hop.id, petals.id, datetime!(2021-01-01 12:00)).await;

    let starts: Vec<_> = store
        .list_shows()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.start_time)
        .collect();
    assert_eq!(
        starts,
        vec![
            datetime!(2035-04-15 20:00),
            datetime!(2021-01-01 12:00),
            datetime!(2019-05-21 21:30),
        ]
    );
}

#[tokio::test]
async fn shows_need_existing_venue_and_artist() {
    let store = store().await;
    let hop = store
        .create_venue(venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let result = store
        .create_show(gigbook::store::NewShow {
            venue_id: hop.id,
            artist_id: 999,
            start_time: datetime!(2035-04-15 20:00),
        })
        .await;
    assert!(matches!(result, Err(StoreError::Db(_))));
    assert!(store.list_shows().await.unwrap().is_empty());
}

#[tokio::test]
async fn recent_records_are_newest_first() {
    let store = store().await;
    for name in ["First", "Second", "Third"] {
        store
            .create_venue(venue(name, "San Francisco", "CA"))
            .await
            .unwrap();
    }
    let recent = store.recent_venues(2).await.unwrap();
    let names: Vec<_> = recent.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Third", "Second"]);
    assert!(store.recent_artists(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn seeding_fills_an_empty_database_once() {
    let store = store().await;
    let seeded = gigbook::seed::seed(&store).await.unwrap();
    assert_eq!((seeded.venues, seeded.artists, seeded.shows), (3, 3, 5));
    assert_eq!(store.list_artists().await.unwrap().len(), 3);
    assert!(matches!(
        gigbook::seed::seed(&store).await,
        Err(gigbook::seed::SeedError::NotEmpty)
    ));
}
