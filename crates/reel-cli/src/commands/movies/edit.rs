use reel_core::MovieUpdate;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{optional_edit, parse_rating, parse_year};
use crate::ui::{print, receipt};

fn text(value: &str) -> anyhow::Result<String> {
    Ok(value.to_string())
}

fn build_update(args: &EditArgs) -> anyhow::Result<MovieUpdate> {
    let mut update = MovieUpdate::new();
    if let Some(title) = &args.title {
        update = update.title(title.as_str());
    }
    if let Some(year) = optional_edit(args.year.as_deref(), parse_year)? {
        update = update.release_year(year);
    }
    if let Some(director) = optional_edit(args.director.as_deref(), text)? {
        update = update.director(director);
    }
    if let Some(poster) = optional_edit(args.poster.as_deref(), text)? {
        update = update.poster_url(poster);
    }
    if args.clear_genres {
        update = update.genres(Vec::new());
    } else if !args.genre.is_empty() {
        update = update.genres(args.genre.clone());
    }
    if args.watched {
        update = update.watched(true);
    } else if args.unwatched {
        update = update.watched(false);
    }
    if let Some(rating) = optional_edit(args.rating.as_deref(), parse_rating)? {
        update = update.rating(rating);
    }
    if let Some(comment) = optional_edit(args.comment.as_deref(), text)? {
        update = update.comment(comment);
    }
    Ok(update)
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let update = build_update(args)?;
    if update.is_empty() {
        return Err(CliError::invalid_input(
            "Nothing to change. Pass at least one field flag (see `reel edit --help`).",
        )
        .into());
    }

    let mut library = ctx.open_library()?;
    let id = library.resolve_id(&args.id)?;
    let movie = library.update_movie(&id, update)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let id = movie.id.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Updated movie", &[("ID", &id), ("Title", &movie.title)]),
        );
    }
    Ok(())
}
