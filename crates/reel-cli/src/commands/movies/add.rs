use reel_core::NewMovie;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_rating, parse_year};
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut new_movie = NewMovie::new(args.title.as_str())
        .with_genres(args.genre.clone())
        .with_watched(args.watched);
    if let Some(year) = &args.year {
        new_movie = new_movie.with_release_year(parse_year(year)?);
    }
    if let Some(director) = &args.director {
        new_movie = new_movie.with_director(director.as_str());
    }
    if let Some(poster) = &args.poster {
        new_movie = new_movie.with_poster_url(poster.as_str());
    }
    if let Some(rating) = &args.rating {
        new_movie = new_movie.with_rating(parse_rating(rating)?);
    }
    if let Some(comment) = &args.comment {
        new_movie = new_movie.with_comment(comment.as_str());
    }

    let mut library = ctx.open_library()?;
    let movie = library.add_movie(new_movie)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let id = movie.id.to_string();
        let status = if movie.watched { "watched" } else { "watchlist" };
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Added movie",
                &[("ID", &id), ("Title", &movie.title), ("Status", status)],
            ),
        );
    }
    Ok(())
}
