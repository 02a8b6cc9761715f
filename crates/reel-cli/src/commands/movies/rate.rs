use crate::app::AppContext;
use crate::cli::RateArgs;
use crate::helpers::parse_rating;
use crate::ui::{print, receipt};

pub fn handle_rate(ctx: &AppContext, args: &RateArgs) -> anyhow::Result<()> {
    let rating = parse_rating(&args.rating)?;

    let mut library = ctx.open_library()?;
    let id = library.resolve_id(&args.id)?;
    let movie = library.rate(&id, rating, args.comment.clone())?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let rating = rating.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Rated movie",
                &[("Title", &movie.title), ("Rating", &rating)],
            ),
        );
    }
    Ok(())
}
