//! Movie collection state and its reducer.
//!
//! [`MoviesState::reduce`] is pure: given the same state and action it
//! always produces the same next state, and `filtered_movies` is always
//! recomputed from `movies` and `filter` whenever the collection changes.

use uuid::Uuid;

use crate::filter::{apply_filters, FilterPatch, MovieFilter};
use crate::model::Movie;

/// Snapshot of the movie collection as the UI sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviesState {
    pub movies: Vec<Movie>,
    pub filtered_movies: Vec<Movie>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filter: MovieFilter,
}

/// Events that change [`MoviesState`].
#[derive(Debug, Clone, PartialEq)]
pub enum MoviesAction {
    FetchStart,
    FetchSuccess(Vec<Movie>),
    FetchFailure(String),
    AddSuccess(Movie),
    UpdateSuccess(Movie),
    DeleteSuccess(Uuid),
    /// Merge into the filter without recomputing the list
    SetFilter(FilterPatch),
    ApplyFilters,
}

impl MoviesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, action: MoviesAction) -> Self {
        match action {
            MoviesAction::FetchStart => Self {
                is_loading: true,
                error: None,
                ..self
            },
            MoviesAction::FetchSuccess(movies) => Self {
                filtered_movies: apply_filters(&movies, &self.filter),
                movies,
                is_loading: false,
                error: None,
                ..self
            },
            MoviesAction::FetchFailure(message) => Self {
                is_loading: false,
                error: Some(message),
                ..self
            },
            MoviesAction::AddSuccess(movie) => {
                let mut movies = self.movies;
                movies.push(movie);
                Self {
                    filtered_movies: apply_filters(&movies, &self.filter),
                    movies,
                    ..self
                }
            }
            MoviesAction::UpdateSuccess(movie) => {
                let movies: Vec<Movie> = self
                    .movies
                    .into_iter()
                    .map(|m| if m.id == movie.id { movie.clone() } else { m })
                    .collect();
                Self {
                    filtered_movies: apply_filters(&movies, &self.filter),
                    movies,
                    ..self
                }
            }
            MoviesAction::DeleteSuccess(id) => {
                let mut movies = self.movies;
                movies.retain(|m| m.id != id);
                Self {
                    filtered_movies: apply_filters(&movies, &self.filter),
                    movies,
                    ..self
                }
            }
            MoviesAction::SetFilter(patch) => {
                let mut filter = self.filter;
                filter.merge(patch);
                Self { filter, ..self }
            }
            MoviesAction::ApplyFilters => Self {
                filtered_movies: apply_filters(&self.movies, &self.filter),
                ..self
            },
        }
    }

    pub fn find(&self, id: &Uuid) -> Option<&Movie> {
        self.movies.iter().find(|m| &m.id == id)
    }
}
