//! A signed-in user's movie collection, kept in sync with storage.
//!
//! `Library` wraps [`MoviesState`]. Every change is reduced into a
//! candidate state, the candidate's movie list is written under the user's
//! key, and only then does the candidate replace the in-memory state. A
//! failed write leaves memory and storage as they were.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ReelError, Result};
use crate::filter::{FilterPatch, MovieFilter, StatusFilter};
use crate::model::{Movie, MovieUpdate, NewMovie, Rating, User};
use crate::seed::starter_movies;
use crate::state::{MoviesAction, MoviesState};
use crate::storage::keys;
use crate::storage::KeyValueStore;

/// Minimum length of an id prefix accepted by [`Library::resolve_id`].
pub const MIN_ID_PREFIX: usize = 4;

/// A named filter preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Whole collection
    Dashboard,
    /// Movies not yet watched
    Watchlist,
    Watched,
}

impl View {
    pub fn status(self) -> StatusFilter {
        match self {
            Self::Dashboard => StatusFilter::All,
            Self::Watchlist => StatusFilter::Unwatched,
            Self::Watched => StatusFilter::Watched,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "list",
            Self::Watchlist => "watchlist",
            Self::Watched => "watched",
        }
    }
}

/// Movie collection service for one user.
pub struct Library<S: KeyValueStore> {
    store: S,
    user: User,
    state: MoviesState,
}

impl<S: KeyValueStore> Library<S> {
    /// Open `user`'s collection, seeding it on first use.
    ///
    /// # Errors
    ///
    /// Returns `ReelError::Load` if the stored list cannot be parsed, or a
    /// storage error if it cannot be read or the seed cannot be written.
    pub fn open(store: S, user: User) -> Result<Self> {
        let mut library = Self {
            store,
            user,
            state: MoviesState::new(),
        };
        library.load()?;
        Ok(library)
    }

    /// Reload the collection from storage.
    pub fn load(&mut self) -> Result<()> {
        self.dispatch(MoviesAction::FetchStart);
        match self.read_movies() {
            Ok(movies) => {
                debug!(user = %self.user.id, count = movies.len(), "loaded movies");
                self.dispatch(MoviesAction::FetchSuccess(movies));
                Ok(())
            }
            Err(err) => {
                let message = match err {
                    ReelError::Load(message) => message,
                    other => other.to_string(),
                };
                warn!(user = %self.user.id, error = %message, "failed to load movies");
                self.dispatch(MoviesAction::FetchFailure(message.clone()));
                Err(ReelError::Load(message))
            }
        }
    }

    fn read_movies(&mut self) -> Result<Vec<Movie>> {
        let key = keys::movies(&self.user.id);
        match self.store.get(&key)? {
            Some(raw) => {
                let movies: Vec<Movie> =
                    serde_json::from_str(&raw).map_err(|e| ReelError::Load(e.to_string()))?;
                for movie in &movies {
                    movie
                        .check_stored()
                        .map_err(|e| ReelError::Load(format!("movie {}: {}", movie.id, e)))?;
                }
                Ok(movies)
            }
            None => {
                let movies = starter_movies(self.user.id);
                self.store.set_json(&key, &movies)?;
                info!(user = %self.user.id, count = movies.len(), "seeded starter collection");
                Ok(movies)
            }
        }
    }

    fn dispatch(&mut self, action: MoviesAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Reduce `action`, persist the resulting list, then adopt the new state.
    fn commit(&mut self, action: MoviesAction) -> Result<()> {
        let next = self.state.clone().reduce(action);
        let key = keys::movies(&self.user.id);
        self.store.set_json(&key, &next.movies)?;
        debug!(user = %self.user.id, count = next.movies.len(), "persisted movies");
        self.state = next;
        Ok(())
    }

    fn require(&self, id: &Uuid) -> Result<&Movie> {
        self.state
            .find(id)
            .ok_or_else(|| ReelError::NotFound(format!("Movie {}", id)))
    }

    /// Validate and add a movie owned by the current user.
    pub fn add_movie(&mut self, new_movie: NewMovie) -> Result<Movie> {
        let movie = new_movie.into_movie(self.user.id, Utc::now())?;
        self.commit(MoviesAction::AddSuccess(movie.clone()))?;
        info!(id = %movie.id, title = %movie.title, "added movie");
        Ok(movie)
    }

    /// Apply a partial update to an existing movie.
    ///
    /// # Errors
    ///
    /// Returns `ReelError::NotFound` for an unknown id and
    /// `ReelError::Validation` if the result would be invalid.
    pub fn update_movie(&mut self, id: &Uuid, update: MovieUpdate) -> Result<Movie> {
        let updated = self.require(id)?.apply_update(update, Utc::now())?;
        self.commit(MoviesAction::UpdateSuccess(updated.clone()))?;
        info!(id = %updated.id, "updated movie");
        Ok(updated)
    }

    pub fn set_watched(&mut self, id: &Uuid, watched: bool) -> Result<Movie> {
        self.update_movie(id, MovieUpdate::new().watched(watched))
    }

    pub fn toggle_watched(&mut self, id: &Uuid) -> Result<Movie> {
        let watched = self.require(id)?.watched;
        self.set_watched(id, !watched)
    }

    /// Rate a watched movie, optionally replacing its comment.
    pub fn rate(&mut self, id: &Uuid, rating: Rating, comment: Option<String>) -> Result<Movie> {
        if !self.require(id)?.watched {
            return Err(ReelError::Validation(
                "Mark the movie as watched before rating it".to_string(),
            ));
        }
        let mut update = MovieUpdate::new().rating(Some(rating));
        if comment.is_some() {
            update = update.comment(comment);
        }
        self.update_movie(id, update)
    }

    /// Remove a movie, returning it.
    pub fn delete_movie(&mut self, id: &Uuid) -> Result<Movie> {
        let removed = self.require(id)?.clone();
        self.commit(MoviesAction::DeleteSuccess(removed.id))?;
        info!(id = %removed.id, title = %removed.title, "deleted movie");
        Ok(removed)
    }

    /// Merge `patch` into the filter and recompute the displayed list.
    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.dispatch(MoviesAction::SetFilter(patch));
        self.dispatch(MoviesAction::ApplyFilters);
    }

    /// Switch views: the filter resets to defaults plus the view's status.
    pub fn enter_view(&mut self, view: View) {
        let defaults = MovieFilter::default();
        self.set_filter(FilterPatch {
            status: Some(view.status()),
            search_query: Some(defaults.search_query),
            genre: Some(None),
            sort_by: Some(defaults.sort_by),
            sort_order: Some(defaults.sort_order),
        });
    }

    /// Resolve a full UUID or a unique prefix to a movie id.
    pub fn resolve_id(&self, text: &str) -> Result<Uuid> {
        let text = text.trim().to_ascii_lowercase();
        if let Ok(id) = Uuid::parse_str(&text) {
            return self.require(&id).map(|m| m.id);
        }
        if text.len() < MIN_ID_PREFIX {
            return Err(ReelError::InvalidInput(format!(
                "Invalid movie ID: {} (use at least {} characters)",
                text, MIN_ID_PREFIX
            )));
        }

        let mut matches = self
            .state
            .movies
            .iter()
            .filter(|m| m.id.to_string().starts_with(&text));
        match (matches.next(), matches.next()) {
            (Some(movie), None) => Ok(movie.id),
            (None, _) => Err(ReelError::NotFound(format!("Movie {}", text))),
            (Some(_), Some(_)) => Err(ReelError::InvalidInput(format!(
                "Movie ID prefix {} is ambiguous",
                text
            ))),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn state(&self) -> &MoviesState {
        &self.state
    }

    pub fn movies(&self) -> &[Movie] {
        &self.state.movies
    }

    pub fn filtered(&self) -> &[Movie] {
        &self.state.filtered_movies
    }

    pub fn filter(&self) -> &MovieFilter {
        &self.state.filter
    }

    pub fn get(&self, id: &Uuid) -> Option<&Movie> {
        self.state.find(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortKey;
    use crate::storage::MemoryStore;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "viewer@example.com".to_string(),
            username: "viewer".to_string(),
            created_at: Utc::now(),
        }
    }

    fn open_seeded() -> Library<MemoryStore> {
        Library::open(MemoryStore::new(), user()).unwrap()
    }

    fn stored_movies(library: &Library<MemoryStore>) -> Vec<Movie> {
        library
            .store()
            .get_json(&keys::movies(&library.user().id))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_first_open_seeds_and_persists() {
        let library = open_seeded();
        assert_eq!(library.movies().len(), 5);
        assert_eq!(library.filtered().len(), 5);
        assert!(!library.state().is_loading);
        assert_eq!(stored_movies(&library), library.movies());
    }

    #[test]
    fn test_reopen_reads_stored_list() {
        let library = open_seeded();
        let owner = library.user().clone();
        let ids: Vec<Uuid> = library.movies().iter().map(|m| m.id).collect();

        let reopened = Library::open(library.into_store(), owner).unwrap();
        let reopened_ids: Vec<Uuid> = reopened.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, reopened_ids);
    }

    #[test]
    fn test_corrupt_list_is_a_load_failure() {
        let owner = user();
        let mut store = MemoryStore::new();
        store.set(&keys::movies(&owner.id), "{not json").unwrap();

        let err = Library::open(store, owner).err().unwrap();
        assert!(matches!(err, ReelError::Load(_)));
    }

    #[test]
    fn test_review_on_unwatched_movie_is_a_load_failure() {
        let owner = user();
        let mut movies = starter_movies(owner.id);
        let pulp = movies
            .iter_mut()
            .find(|m| m.title == "Pulp Fiction")
            .unwrap();
        pulp.rating = Some(Rating::new(4.0).unwrap());

        let mut store = MemoryStore::new();
        store.set_json(&keys::movies(&owner.id), &movies).unwrap();

        let err = Library::open(store, owner).err().unwrap();
        assert!(matches!(err, ReelError::Load(_)));
    }

    /// Accepts writes until `fail` is set.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail {
                return Err(ReelError::Storage("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let owner = user();
        let key = keys::movies(&owner.id);
        let mut library = Library::open(FlakyStore::default(), owner).unwrap();
        let before = library.movies().to_vec();
        let target = before[0].id;

        library.store.fail = true;

        assert!(matches!(
            library.add_movie(NewMovie::new("Paprika")),
            Err(ReelError::Storage(_))
        ));
        assert!(library.set_watched(&target, !before[0].watched).is_err());
        assert!(library.delete_movie(&target).is_err());

        assert_eq!(library.movies(), before.as_slice());
        assert_eq!(library.filtered().len(), before.len());
        let stored: Vec<Movie> = library.store().get_json(&key).unwrap().unwrap();
        assert_eq!(stored, before);
    }

    #[test]
    fn test_add_then_delete_restores_collection() {
        let mut library = open_seeded();
        let before = library.movies().to_vec();

        let added = library.add_movie(NewMovie::new("Paprika")).unwrap();
        assert_eq!(added.user_id, library.user().id);
        assert_eq!(library.movies().len(), before.len() + 1);

        library.delete_movie(&added.id).unwrap();
        assert_eq!(library.movies(), before.as_slice());
        assert_eq!(stored_movies(&library), before);
    }

    #[test]
    fn test_deleting_last_movie_persists_empty_list() {
        let mut library = open_seeded();
        let ids: Vec<Uuid> = library.movies().iter().map(|m| m.id).collect();
        for id in ids {
            library.delete_movie(&id).unwrap();
        }
        assert!(stored_movies(&library).is_empty());
    }

    #[test]
    fn test_watched_at_set_once() {
        let mut library = open_seeded();
        let added = library.add_movie(NewMovie::new("Stalker")).unwrap();
        assert_eq!(added.watched_at, None);

        let first = library.set_watched(&added.id, true).unwrap();
        let stamp = first.watched_at.unwrap();

        let second = library.set_watched(&added.id, true).unwrap();
        assert_eq!(second.watched_at, Some(stamp));

        library.toggle_watched(&added.id).unwrap();
        let third = library.toggle_watched(&added.id).unwrap();
        assert!(third.watched);
        assert_eq!(third.watched_at, Some(stamp));
    }

    #[test]
    fn test_rate_requires_watched() {
        let mut library = open_seeded();
        let added = library.add_movie(NewMovie::new("Persona")).unwrap();
        let rating = Rating::new(4.0).unwrap();

        assert!(library.rate(&added.id, rating, None).is_err());

        library.set_watched(&added.id, true).unwrap();
        let rated = library
            .rate(&added.id, rating, Some("Haunting".to_string()))
            .unwrap();
        assert_eq!(rated.rating, Some(rating));
        assert_eq!(rated.comment.as_deref(), Some("Haunting"));

        let rerated = library.rate(&added.id, Rating::new(5.0).unwrap(), None).unwrap();
        assert_eq!(rerated.comment.as_deref(), Some("Haunting"));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut library = open_seeded();
        let missing = Uuid::new_v4();
        assert!(matches!(
            library.delete_movie(&missing),
            Err(ReelError::NotFound(_))
        ));
        assert!(matches!(
            library.update_movie(&missing, MovieUpdate::new().title("x")),
            Err(ReelError::NotFound(_))
        ));
    }

    #[test]
    fn test_views_reset_filter() {
        let mut library = open_seeded();
        library.set_filter(FilterPatch::new().search("nolan").sort_by(SortKey::Title));
        assert_eq!(library.filtered().len(), 2);

        library.enter_view(View::Watchlist);
        assert_eq!(library.filter().search_query, "");
        assert_eq!(library.filter().sort_by, SortKey::Date);
        assert_eq!(library.filtered().len(), 2);
        assert!(library.filtered().iter().all(|m| !m.watched));

        library.enter_view(View::Dashboard);
        assert_eq!(library.filtered().len(), 5);
    }

    #[test]
    fn test_resolve_id_by_prefix() {
        let library = open_seeded();
        let target = library.movies()[0].id;
        let full = target.to_string();

        assert_eq!(library.resolve_id(&full).unwrap(), target);
        assert_eq!(library.resolve_id(&full[..12]).unwrap(), target);
        assert!(library.resolve_id("ab").is_err());
        assert!(matches!(
            library.resolve_id(&Uuid::new_v4().to_string()),
            Err(ReelError::NotFound(_))
        ));
    }
}
