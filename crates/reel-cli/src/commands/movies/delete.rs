use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{badge, print, receipt, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut library = ctx.open_library()?;
    let id = library.resolve_id(&args.id)?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation. Pass --yes.",
            )
            .into());
        }
        let title = library
            .get(&id)
            .map(|m| m.title.clone())
            .unwrap_or_default();
        if !confirm(&format!("Delete \"{}\"?", title))? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    let removed = library.delete_movie(&id)?;

    if !ctx.quiet() {
        let id = removed.id.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Deleted movie", &[("ID", &id), ("Title", &removed.title)]),
        );
    }
    Ok(())
}
