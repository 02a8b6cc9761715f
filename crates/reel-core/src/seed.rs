//! Starter collection written on a user's first load.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::model::{Movie, Rating};

struct SeedMovie {
    title: &'static str,
    poster: &'static str,
    year: u16,
    director: &'static str,
    genres: &'static [&'static str],
    review: Option<(f32, &'static str, (i32, u32, u32))>,
    added: (i32, u32, u32),
}

const SEED: &[SeedMovie] = &[
    SeedMovie {
        title: "Inception",
        poster: "https://images.pexels.com/photos/2233348/pexels-photo-2233348.jpeg?auto=compress&cs=tinysrgb&w=600",
        year: 2010,
        director: "Christopher Nolan",
        genres: &["Sci-Fi", "Action", "Thriller"],
        review: Some((4.5, "Mind-bending plot with amazing visuals.", (2023, 1, 20))),
        added: (2023, 1, 15),
    },
    SeedMovie {
        title: "The Shawshank Redemption",
        poster: "https://images.pexels.com/photos/3692550/pexels-photo-3692550.jpeg?auto=compress&cs=tinysrgb&w=600",
        year: 1994,
        director: "Frank Darabont",
        genres: &["Drama"],
        review: Some((5.0, "One of the best films ever made.", (2023, 2, 15))),
        added: (2023, 2, 10),
    },
    SeedMovie {
        title: "The Dark Knight",
        poster: "https://images.pexels.com/photos/10904746/pexels-photo-10904746.jpeg?auto=compress&cs=tinysrgb&w=600",
        year: 2008,
        director: "Christopher Nolan",
        genres: &["Action", "Crime", "Drama"],
        review: Some((4.8, "Heath Ledger's Joker is unforgettable.", (2023, 3, 10))),
        added: (2023, 3, 5),
    },
    SeedMovie {
        title: "Pulp Fiction",
        poster: "https://images.pexels.com/photos/5662857/pexels-photo-5662857.jpeg?auto=compress&cs=tinysrgb&w=600",
        year: 1994,
        director: "Quentin Tarantino",
        genres: &["Crime", "Drama"],
        review: None,
        added: (2023, 4, 20),
    },
    SeedMovie {
        title: "Dune",
        poster: "https://images.pexels.com/photos/9544131/pexels-photo-9544131.jpeg?auto=compress&cs=tinysrgb&w=600",
        year: 2021,
        director: "Denis Villeneuve",
        genres: &["Sci-Fi", "Adventure"],
        review: None,
        added: (2023, 5, 15),
    },
];

/// Build the starter collection owned by `user_id`.
pub fn starter_movies(user_id: Uuid) -> Vec<Movie> {
    SEED.iter()
        .map(|seed| {
            let (rating, comment, watched_at) = match seed.review {
                Some((rating, comment, day)) => (
                    Rating::new(rating).ok(),
                    Some(comment.to_string()),
                    midnight(day),
                ),
                None => (None, None, None),
            };
            Movie {
                id: Uuid::new_v4(),
                title: seed.title.to_string(),
                poster_url: Some(seed.poster.to_string()),
                release_year: Some(seed.year),
                director: Some(seed.director.to_string()),
                genre: seed.genres.iter().map(|g| g.to_string()).collect(),
                watched: seed.review.is_some(),
                rating,
                comment,
                added_at: midnight(seed.added).unwrap_or_else(Utc::now),
                watched_at,
                user_id,
            }
        })
        .collect()
}

fn midnight((year, month, day): (i32, u32, u32)) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_movies_belong_to_user() {
        let user_id = Uuid::new_v4();
        let movies = starter_movies(user_id);
        assert_eq!(movies.len(), 5);
        assert!(movies.iter().all(|m| m.user_id == user_id));
    }

    #[test]
    fn test_starter_reviews_only_on_watched() {
        for movie in starter_movies(Uuid::new_v4()) {
            if movie.watched {
                assert!(movie.rating.is_some());
                assert!(movie.watched_at.is_some());
            } else {
                assert!(movie.rating.is_none());
                assert!(movie.comment.is_none());
                assert!(movie.watched_at.is_none());
            }
        }
    }

    #[test]
    fn test_starter_dates() {
        let movies = starter_movies(Uuid::new_v4());
        let dune = movies.iter().find(|m| m.title == "Dune").unwrap();
        assert_eq!(dune.added_at.to_rfc3339(), "2023-05-15T00:00:00+00:00");
        assert_eq!(movies.iter().filter(|m| m.watched).count(), 3);
    }
}
