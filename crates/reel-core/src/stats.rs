//! Dashboard aggregates over a movie collection.

use serde::Serialize;

use crate::model::Movie;

/// How many movies the "recently" lists hold.
pub const RECENT_LIMIT: usize = 4;

/// Summary numbers and short lists shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total: usize,
    pub watched: usize,
    pub watchlist: usize,

    /// Mean over watched movies, unrated counted as 0
    pub average_rating: Option<f32>,

    pub recently_added: Vec<Movie>,
    pub recently_watched: Vec<Movie>,

    /// Distinct genre labels in first-seen order
    pub genres: Vec<String>,
}

impl LibraryStats {
    pub fn compute(movies: &[Movie]) -> Self {
        let watched: Vec<&Movie> = movies.iter().filter(|m| m.watched).collect();

        let average_rating = if watched.is_empty() {
            None
        } else {
            let sum: f32 = watched
                .iter()
                .map(|m| m.rating.map(|r| r.value()).unwrap_or(0.0))
                .sum();
            Some(sum / watched.len() as f32)
        };

        let mut recently_added = movies.to_vec();
        recently_added.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        recently_added.truncate(RECENT_LIMIT);

        let mut recently_watched: Vec<Movie> = watched
            .iter()
            .filter(|m| m.watched_at.is_some())
            .map(|m| (*m).clone())
            .collect();
        recently_watched.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
        recently_watched.truncate(RECENT_LIMIT);

        let mut genres: Vec<String> = Vec::new();
        for genre in movies.iter().flat_map(|m| m.genre.iter()) {
            if !genres.contains(genre) {
                genres.push(genre.clone());
            }
        }

        Self {
            total: movies.len(),
            watched: watched.len(),
            watchlist: movies.len() - watched.len(),
            average_rating,
            recently_added,
            recently_watched,
            genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::starter_movies;
    use uuid::Uuid;

    #[test]
    fn test_empty_collection() {
        let stats = LibraryStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, None);
        assert!(stats.recently_added.is_empty());
        assert!(stats.genres.is_empty());
    }

    #[test]
    fn test_starter_collection_stats() {
        let stats = LibraryStats::compute(&starter_movies(Uuid::new_v4()));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.watched, 3);
        assert_eq!(stats.watchlist, 2);

        let average = stats.average_rating.unwrap();
        assert!((average - (4.5 + 5.0 + 4.8) / 3.0).abs() < 1e-4);

        assert_eq!(stats.recently_added.len(), RECENT_LIMIT);
        assert_eq!(stats.recently_added[0].title, "Dune");
        assert_eq!(stats.recently_watched.len(), 3);
        assert_eq!(stats.recently_watched[0].title, "The Dark Knight");
        assert_eq!(stats.genres[0], "Sci-Fi");
        assert!(stats.genres.contains(&"Adventure".to_string()));
    }

    #[test]
    fn test_serializes_camel_case() {
        let stats = LibraryStats::compute(&starter_movies(Uuid::new_v4()));
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["watchlist"], 2);
        assert!(value.get("averageRating").is_some());
        assert!(value.get("recentlyAdded").is_some());
        assert!(value.get("recently_added").is_none());
    }

    #[test]
    fn test_unrated_watched_counts_as_zero() {
        let mut movies = starter_movies(Uuid::new_v4());
        movies.retain(|m| m.title == "Inception");
        movies[0].rating = None;
        let stats = LibraryStats::compute(&movies);
        assert_eq!(stats.average_rating, Some(0.0));
    }
}
