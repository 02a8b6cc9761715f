//! Filtering and sorting of a movie collection.
//!
//! [`apply_filters`] is a pure function of the movie list and the filter:
//! status, then free-text search, then genre, then a stable sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::ReelError;
use crate::model::Movie;

/// Which movies to keep by watched state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Watched,
    Unwatched,
}

impl StatusFilter {
    pub fn matches(self, movie: &Movie) -> bool {
        match self {
            Self::All => true,
            Self::Watched => movie.watched,
            Self::Unwatched => !movie.watched,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Watched => "watched",
            Self::Unwatched => "unwatched",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "watched" => Ok(Self::Watched),
            "unwatched" | "watchlist" => Ok(Self::Unwatched),
            other => Err(ReelError::InvalidInput(format!(
                "Unknown status: {} (use all, watched or unwatched)",
                other
            ))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key for the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Date added
    #[default]
    Date,
    Title,
    /// Rating, with unrated movies counted as 0
    Rating,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Rating => "rating",
        }
    }
}

impl FromStr for SortKey {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" | "added" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            "rating" => Ok(Self::Rating),
            other => Err(ReelError::InvalidInput(format!(
                "Unknown sort key: {} (use date, title or rating)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(ReelError::InvalidInput(format!(
                "Unknown sort order: {} (use asc or desc)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria that turn the full collection into the displayed list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieFilter {
    pub status: StatusFilter,

    /// Case-insensitive substring; empty means no text filter
    pub search_query: String,

    /// Exact genre label
    pub genre: Option<String>,

    pub sort_by: SortKey,

    pub sort_order: SortOrder,
}

impl MovieFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn sort(mut self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Merge a partial update over this filter.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(query) = patch.search_query {
            self.search_query = query;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
    }

    fn matches(&self, movie: &Movie, query: Option<&str>) -> bool {
        if !self.status.matches(movie) {
            return false;
        }
        if let Some(query) = query {
            if !matches_query(movie, query) {
                return false;
            }
        }
        match &self.genre {
            Some(genre) => movie.has_genre(genre),
            None => true,
        }
    }

    fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        let ordering = match self.sort_by {
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::Rating => rating_value(a).total_cmp(&rating_value(b)),
            SortKey::Date => a.added_at.cmp(&b.added_at),
        };
        self.sort_order.apply(ordering)
    }
}

/// A partial filter change. `None` fields leave the current value alone;
/// `genre: Some(None)` clears the genre filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub status: Option<StatusFilter>,
    pub search_query: Option<String>,
    pub genre: Option<Option<String>>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn genre(mut self, genre: Option<String>) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

/// Produce the displayed list for `filter`.
pub fn apply_filters(movies: &[Movie], filter: &MovieFilter) -> Vec<Movie> {
    let query = (!filter.search_query.is_empty()).then(|| filter.search_query.to_lowercase());

    let mut result: Vec<Movie> = movies
        .iter()
        .filter(|movie| filter.matches(movie, query.as_deref()))
        .cloned()
        .collect();

    // sort_by is stable: ties keep collection order in both directions
    result.sort_by(|a, b| filter.compare(a, b));
    result
}

/// `query` must already be lowercased.
fn matches_query(movie: &Movie, query: &str) -> bool {
    movie.title.to_lowercase().contains(query)
        || movie
            .director
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
        || movie.genre.iter().any(|g| g.to_lowercase().contains(query))
}

/// Dictionary-style comparison: base letters first (accents and case
/// ignored), then accents, then case with lowercase first.
fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| b.cmp(a))
}

fn primary_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

fn rating_value(movie: &Movie) -> f32 {
    movie.rating.map(|r| r.value()).unwrap_or(0.0)
}
