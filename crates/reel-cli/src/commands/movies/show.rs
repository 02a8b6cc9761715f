use reel_core::ReelError;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{print_json, print_movie};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let library = ctx.open_library()?;
    let id = library.resolve_id(&args.id)?;
    let movie = library
        .get(&id)
        .ok_or_else(|| ReelError::NotFound(format!("Movie {}", id)))?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        return print_json(movie);
    }
    print_movie(&ui_ctx, movie, ctx.quiet());
    Ok(())
}
