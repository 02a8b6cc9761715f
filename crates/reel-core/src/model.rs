//! Core data types: users, movies and the inputs that create or change them.
//!
//! Stored documents use camelCase keys and omit absent optional fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ReelError, Result};

/// A signed-in user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (also scopes the user's movie storage key)
    pub id: Uuid,

    /// Login email
    pub email: String,

    /// Display name
    pub username: String,

    /// When this user record was created
    pub created_at: DateTime<Utc>,
}

/// A star rating between 0 and 5 inclusive. Fractions are allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ReelError::Validation(format!(
                "Rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Rating {
    type Error = ReelError;

    fn try_from(value: f32) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| ReelError::InvalidInput(format!("Invalid rating: {}", s)))?;
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A movie in a user's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier for this movie
    pub id: Uuid,

    /// Title (required, never blank)
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    /// Genre labels, in the order they were entered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<String>,

    pub watched: bool,

    /// Only present on watched movies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Only present on watched movies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// When the movie was added to the collection
    pub added_at: DateTime<Utc>,

    /// When the movie was first marked watched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,

    /// Owning user
    pub user_id: Uuid,
}

impl Movie {
    /// Check whether the genre list contains `genre` exactly.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g == genre)
    }

    /// Check a movie read back from storage.
    ///
    /// # Errors
    ///
    /// Returns `ReelError::Validation` for a blank title, or a rating or
    /// comment on a movie that is not watched.
    pub fn check_stored(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ReelError::Validation("Title is required".to_string()));
        }
        if !self.watched && (self.rating.is_some() || self.comment.is_some()) {
            return Err(ReelError::Validation(
                "Rating and comment require the movie to be watched".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply a partial update, returning the updated movie.
    ///
    /// `watched_at` is stamped with `now` only the first time the movie
    /// becomes watched. Unwatching clears rating and comment.
    pub fn apply_update(&self, update: MovieUpdate, now: DateTime<Utc>) -> Result<Movie> {
        let mut next = self.clone();

        if let Some(title) = update.title {
            next.title = normalize_title(&title)?;
        }
        if let Some(poster_url) = update.poster_url {
            next.poster_url = normalize_poster_url(poster_url)?;
        }
        if let Some(release_year) = update.release_year {
            next.release_year = release_year.map(validate_release_year).transpose()?;
        }
        if let Some(director) = update.director {
            next.director = non_blank(director);
        }
        if let Some(genre) = update.genre {
            next.genre = normalize_genres(genre);
        }
        if let Some(watched) = update.watched {
            next.watched = watched;
        }

        let sets_review = matches!(update.rating, Some(Some(_)))
            || matches!(update.comment, Some(Some(ref c)) if !c.trim().is_empty());
        if let Some(rating) = update.rating {
            next.rating = rating;
        }
        if let Some(comment) = update.comment {
            next.comment = non_blank(comment);
        }

        if !next.watched {
            if sets_review {
                return Err(ReelError::Validation(
                    "Rating and comment require the movie to be watched".to_string(),
                ));
            }
            next.rating = None;
            next.comment = None;
        }

        if next.watched && !self.watched && self.watched_at.is_none() {
            next.watched_at = Some(now);
        }

        Ok(next)
    }
}

/// Builder for creating new movies.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub poster_url: Option<String>,
    pub release_year: Option<u16>,
    pub director: Option<String>,
    pub genre: Vec<String>,
    pub watched: bool,
    pub rating: Option<Rating>,
    pub comment: Option<String>,
}

impl NewMovie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    pub fn with_release_year(mut self, year: u16) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genre = genres;
        self
    }

    pub fn with_watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Validate and build the stored movie for `user_id`.
    pub fn into_movie(self, user_id: Uuid, now: DateTime<Utc>) -> Result<Movie> {
        let title = normalize_title(&self.title)?;
        let poster_url = normalize_poster_url(self.poster_url)?;
        let release_year = self.release_year.map(validate_release_year).transpose()?;
        let comment = non_blank(self.comment);

        if !self.watched && (self.rating.is_some() || comment.is_some()) {
            return Err(ReelError::Validation(
                "Rating and comment require the movie to be watched".to_string(),
            ));
        }

        Ok(Movie {
            id: Uuid::new_v4(),
            title,
            poster_url,
            release_year,
            director: non_blank(self.director),
            genre: normalize_genres(self.genre),
            watched: self.watched,
            rating: self.rating,
            comment,
            added_at: now,
            watched_at: self.watched.then_some(now),
            user_id,
        })
    }
}

/// A partial change to an existing movie.
///
/// Outer `None` leaves a field untouched; `Some(None)` clears an optional
/// field.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub poster_url: Option<Option<String>>,
    pub release_year: Option<Option<u16>>,
    pub director: Option<Option<String>>,
    pub genre: Option<Vec<String>>,
    pub watched: Option<bool>,
    pub rating: Option<Option<Rating>>,
    pub comment: Option<Option<String>>,
}

impl MovieUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn poster_url(mut self, url: Option<String>) -> Self {
        self.poster_url = Some(url);
        self
    }

    pub fn release_year(mut self, year: Option<u16>) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn director(mut self, director: Option<String>) -> Self {
        self.director = Some(director);
        self
    }

    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.genre = Some(genres);
        self
    }

    pub fn watched(mut self, watched: bool) -> Self {
        self.watched = Some(watched);
        self
    }

    pub fn rating(mut self, rating: Option<Rating>) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = Some(comment);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.poster_url.is_none()
            && self.release_year.is_none()
            && self.director.is_none()
            && self.genre.is_none()
            && self.watched.is_none()
            && self.rating.is_none()
            && self.comment.is_none()
    }
}

fn normalize_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ReelError::Validation("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn validate_release_year(year: u16) -> Result<u16> {
    if !(1000..=9999).contains(&year) {
        return Err(ReelError::Validation(format!(
            "Please enter a valid year (YYYY), got {}",
            year
        )));
    }
    Ok(year)
}

fn normalize_poster_url(url: Option<String>) -> Result<Option<String>> {
    match non_blank(url) {
        Some(url) if !url.starts_with("http") => Err(ReelError::Validation(format!(
            "Please enter a valid URL, got {}",
            url
        ))),
        other => Ok(other),
    }
}

fn normalize_genres(genres: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(genres.len());
    for genre in genres {
        let trimmed = genre.trim();
        if !trimmed.is_empty() && !out.iter().any(|g| g == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
