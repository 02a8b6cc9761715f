use reel_core::LibraryStats;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_json, print_stats};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let library = ctx.open_library()?;
    let stats = LibraryStats::compute(library.movies());

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        return print_json(&stats);
    }
    print_stats(&ui_ctx, library.user(), &stats, ctx.quiet());
    Ok(())
}
