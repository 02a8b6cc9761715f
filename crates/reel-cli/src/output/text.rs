//! Text and table output for movies, users and stats.

use reel_core::{LibraryStats, Movie, User};

use crate::constants::TITLE_MAX;
use crate::ui::format::single_line;
use crate::ui::theme::{stars, styled, styles};
use crate::ui::{
    blank_line, divider, format_date, format_datetime, format_rating, format_year, header, hint,
    kv, print, short_id, simple_table, truncate, Column, OutputMode, UiContext,
};

const LIST_COLUMNS: [Column; 6] = [
    Column::new("ID"),
    Column::new("Title"),
    Column::new("Year"),
    Column::new("Status"),
    Column::new("Rating"),
    Column::new("Added"),
];

fn status_label(movie: &Movie) -> &'static str {
    if movie.watched {
        "watched"
    } else {
        "watchlist"
    }
}

fn list_row(ctx: &UiContext, movie: &Movie) -> Vec<String> {
    let pretty = ctx.mode.is_pretty();
    let rating = match movie.rating {
        Some(r) if pretty => styled(&stars(r.value(), ctx.unicode), styles::rating(), ctx.color),
        other => format_rating(other),
    };
    vec![
        if pretty {
            short_id(&movie.id)
        } else {
            movie.id.to_string()
        },
        if pretty {
            truncate(&movie.title, TITLE_MAX)
        } else {
            single_line(&movie.title)
        },
        format_year(movie.release_year),
        status_label(movie).to_string(),
        rating,
        if pretty {
            format_date(&movie.added_at, ctx.timezone)
        } else {
            format_datetime(&movie.added_at, None, false)
        },
    ]
}

/// Print a list view: header, table and a follow-up hint.
pub fn print_movie_list(
    ctx: &UiContext,
    command: &str,
    movies: &[Movie],
    total: usize,
    quiet: bool,
) {
    match ctx.mode {
        OutputMode::Pretty => {
            if !quiet {
                let context = format!("{} of {}", movies.len(), total);
                print(ctx, &header(ctx, command, Some(&context)));
                blank_line(ctx);
            }
            if movies.is_empty() {
                if !quiet {
                    print(ctx, "No movies match.");
                    print(ctx, &hint(ctx, "Add one with `reel add \"Title\"`."));
                }
                return;
            }
            let rows: Vec<Vec<String>> = movies.iter().map(|m| list_row(ctx, m)).collect();
            print(ctx, &simple_table(ctx, &LIST_COLUMNS, &rows));
            if !quiet {
                blank_line(ctx);
                print(ctx, &hint(ctx, "reel show <id>"));
            }
        }
        OutputMode::Plain => {
            let rows: Vec<Vec<String>> = movies.iter().map(|m| list_row(ctx, m)).collect();
            if !rows.is_empty() {
                print(ctx, &simple_table(ctx, &LIST_COLUMNS, &rows));
            }
        }
        OutputMode::Json => {}
    }
}

/// Print one movie in detail.
pub fn print_movie(ctx: &UiContext, movie: &Movie, quiet: bool) {
    let pretty = ctx.mode.is_pretty();
    if pretty && !quiet {
        print(ctx, &header(ctx, "show", None));
        blank_line(ctx);
    }

    let mut lines = vec![kv(ctx, "ID", &movie.id.to_string())];
    lines.push(kv(ctx, "Title", &single_line(&movie.title)));
    if let Some(year) = movie.release_year {
        lines.push(kv(ctx, "Year", &year.to_string()));
    }
    if let Some(director) = &movie.director {
        lines.push(kv(ctx, "Director", director));
    }
    if !movie.genre.is_empty() {
        let separator = if pretty { ", " } else { "," };
        lines.push(kv(ctx, "Genres", &movie.genre.join(separator)));
    }
    lines.push(kv(ctx, "Status", status_label(movie)));
    if let Some(rating) = movie.rating {
        let value = if pretty {
            format!(
                "{} {}",
                styled(&stars(rating.value(), ctx.unicode), styles::rating(), ctx.color),
                rating
            )
        } else {
            rating.to_string()
        };
        lines.push(kv(ctx, "Rating", &value));
    }
    lines.push(kv(
        ctx,
        "Added",
        &format_datetime(&movie.added_at, ctx.timezone, pretty),
    ));
    if let Some(watched_at) = &movie.watched_at {
        lines.push(kv(
            ctx,
            "Watched At",
            &format_datetime(watched_at, ctx.timezone, pretty),
        ));
    }
    if let Some(poster) = &movie.poster_url {
        lines.push(kv(ctx, "Poster", poster));
    }
    for line in lines {
        print(ctx, &line);
    }

    if let Some(comment) = &movie.comment {
        if pretty {
            blank_line(ctx);
            print(ctx, &divider(ctx));
            print(ctx, comment);
        } else {
            print(ctx, &kv(ctx, "Comment", &single_line(comment)));
        }
    }
}

pub fn print_user(ctx: &UiContext, user: &User) {
    print(ctx, &kv(ctx, "Username", &user.username));
    print(ctx, &kv(ctx, "Email", &user.email));
    print(ctx, &kv(ctx, "ID", &user.id.to_string()));
    print(
        ctx,
        &kv(
            ctx,
            "Created",
            &format_datetime(&user.created_at, ctx.timezone, ctx.mode.is_pretty()),
        ),
    );
}

/// Print the dashboard overview.
pub fn print_stats(ctx: &UiContext, user: &User, stats: &LibraryStats, quiet: bool) {
    let pretty = ctx.mode.is_pretty();
    if pretty && !quiet {
        let welcome = format!("welcome back, {}", user.username);
        print(ctx, &header(ctx, "stats", Some(&welcome)));
        blank_line(ctx);
    }

    let average = stats
        .average_rating
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string());
    print(ctx, &kv(ctx, "Total", &stats.total.to_string()));
    print(ctx, &kv(ctx, "Watched", &stats.watched.to_string()));
    print(ctx, &kv(ctx, "Watchlist", &stats.watchlist.to_string()));
    print(ctx, &kv(ctx, "Average Rating", &average));
    if !stats.genres.is_empty() {
        let separator = if pretty { ", " } else { "," };
        print(ctx, &kv(ctx, "Genres", &stats.genres.join(separator)));
    }

    if pretty {
        print_recent(ctx, "Recently added", &stats.recently_added);
        print_recent(ctx, "Recently watched", &stats.recently_watched);
    } else {
        let ids = |movies: &[Movie]| {
            movies
                .iter()
                .map(|m| m.id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        print(ctx, &kv(ctx, "Recently Added", &ids(&stats.recently_added)));
        print(ctx, &kv(ctx, "Recently Watched", &ids(&stats.recently_watched)));
    }
}

fn print_recent(ctx: &UiContext, title: &str, movies: &[Movie]) {
    if movies.is_empty() {
        return;
    }
    blank_line(ctx);
    print(ctx, &styled(title, styles::bold(), ctx.color));
    let rows: Vec<Vec<String>> = movies.iter().map(|m| list_row(ctx, m)).collect();
    print(ctx, &simple_table(ctx, &LIST_COLUMNS, &rows));
}
