use crate::app::AppContext;
use crate::cli::WatchArgs;
use crate::ui::{format_datetime, print, receipt};

/// Set a movie's watched state (`watch` and `unwatch`).
pub fn handle_watch(ctx: &AppContext, args: &WatchArgs, watched: bool) -> anyhow::Result<()> {
    let mut library = ctx.open_library()?;
    let id = library.resolve_id(&args.id)?;
    let movie = library.set_watched(&id, watched)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let id = movie.id.to_string();
        let watched_at = movie
            .watched_at
            .map(|at| format_datetime(&at, ui_ctx.timezone, ui_ctx.mode.is_pretty()));
        let mut items = vec![("ID", id.as_str()), ("Title", movie.title.as_str())];
        if let Some(at) = watched_at.as_deref() {
            items.push(("Watched At", at));
        }
        let title = if watched {
            "Marked watched"
        } else {
            "Moved to watchlist"
        };
        print(&ui_ctx, &receipt(&ui_ctx, title, &items));
    }
    Ok(())
}
