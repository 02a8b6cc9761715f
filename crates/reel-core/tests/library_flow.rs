use std::fs;

use reel_core::auth::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
use reel_core::storage::keys;
use reel_core::{
    FileStore, FilterPatch, KeyValueStore, Library, NewMovie, Rating, ReelError, Session,
    SortKey, SortOrder, StatusFilter,
};
use tempfile::tempdir;
use uuid::Uuid;

fn sign_in(store: FileStore) -> (FileStore, reel_core::User) {
    let mut session = Session::new(store);
    let user = session
        .login(DEMO_EMAIL, DEMO_PASSWORD)
        .expect("demo login should succeed");
    (session.into_store(), user)
}

#[test]
fn test_session_and_collection_survive_reopen() {
    let dir = tempdir().expect("tempdir should be created");
    let store = FileStore::open(dir.path()).expect("open should succeed");
    let (store, user) = sign_in(store);
    assert_eq!(user.id, DEMO_USER_ID);

    let mut library = Library::open(store, user).expect("library should open");
    let added = library
        .add_movie(
            NewMovie::new("Arrival")
                .with_director("Denis Villeneuve")
                .with_genres(vec!["Sci-Fi".to_string()]),
        )
        .expect("add should succeed");
    drop(library);

    let store = FileStore::open(dir.path()).expect("reopen should succeed");
    let mut session = Session::new(store);
    let restored = session
        .restore()
        .expect("restore should succeed")
        .expect("session should exist");
    let library = Library::open(session.into_store(), restored).expect("library should open");

    assert_eq!(library.movies().len(), 6);
    assert_eq!(library.get(&added.id), Some(&added));
    assert!(dir
        .path()
        .join(format!("{}.json", keys::movies(&DEMO_USER_ID)))
        .exists());
}

#[test]
fn test_status_filters_partition_collection() {
    let dir = tempdir().expect("tempdir should be created");
    let (store, user) = sign_in(FileStore::open(dir.path()).expect("open should succeed"));
    let mut library = Library::open(store, user).expect("library should open");

    library.set_filter(FilterPatch::new().status(StatusFilter::Watched));
    let watched: Vec<Uuid> = library.filtered().iter().map(|m| m.id).collect();
    library.set_filter(FilterPatch::new().status(StatusFilter::Unwatched));
    let unwatched: Vec<Uuid> = library.filtered().iter().map(|m| m.id).collect();

    assert!(watched.iter().all(|id| !unwatched.contains(id)));
    assert_eq!(watched.len() + unwatched.len(), library.movies().len());
}

#[test]
fn test_title_sort_reverses() {
    let dir = tempdir().expect("tempdir should be created");
    let (store, user) = sign_in(FileStore::open(dir.path()).expect("open should succeed"));
    let mut library = Library::open(store, user).expect("library should open");

    library.set_filter(
        FilterPatch::new()
            .sort_by(SortKey::Title)
            .sort_order(SortOrder::Asc),
    );
    let ascending: Vec<String> = library.filtered().iter().map(|m| m.title.clone()).collect();
    library.set_filter(FilterPatch::new().sort_order(SortOrder::Desc));
    let mut descending: Vec<String> =
        library.filtered().iter().map(|m| m.title.clone()).collect();
    descending.reverse();

    assert_eq!(ascending, descending);
    assert_eq!(ascending[0], "Dune");
}

#[test]
fn test_watch_rate_unwatch_cycle() {
    let dir = tempdir().expect("tempdir should be created");
    let (store, user) = sign_in(FileStore::open(dir.path()).expect("open should succeed"));
    let mut library = Library::open(store, user).expect("library should open");

    let movie = library
        .add_movie(NewMovie::new("Solaris"))
        .expect("add should succeed");
    let watched = library.toggle_watched(&movie.id).expect("toggle should succeed");
    let stamp = watched.watched_at.expect("watched_at should be set");

    library
        .rate(&movie.id, Rating::new(3.5).expect("valid rating"), Some("Slow".to_string()))
        .expect("rate should succeed");
    let unwatched = library.toggle_watched(&movie.id).expect("toggle should succeed");
    assert_eq!(unwatched.rating, None);
    assert_eq!(unwatched.comment, None);

    let rewatched = library.toggle_watched(&movie.id).expect("toggle should succeed");
    assert_eq!(rewatched.watched_at, Some(stamp));
}

#[test]
fn test_corrupt_movies_file_fails_to_load() {
    let dir = tempdir().expect("tempdir should be created");
    let (store, user) = sign_in(FileStore::open(dir.path()).expect("open should succeed"));
    let path = dir
        .path()
        .join(format!("{}.json", keys::movies(&user.id)));
    fs::write(&path, "[{\"broken\":").expect("write should succeed");

    let result = Library::open(store, user);
    assert!(matches!(result, Err(ReelError::Load(_))));
    assert_eq!(
        fs::read_to_string(&path).expect("file should remain"),
        "[{\"broken\":"
    );
}

#[test]
fn test_corrupt_session_reads_as_signed_out() {
    let dir = tempdir().expect("tempdir should be created");
    let mut store = FileStore::open(dir.path()).expect("open should succeed");
    store
        .set(keys::SESSION, "{\"id\":42}")
        .expect("set should succeed");

    let mut session = Session::new(store);
    assert_eq!(session.restore().expect("restore should succeed"), None);
    assert!(!dir.path().join("user.json").exists());
}
