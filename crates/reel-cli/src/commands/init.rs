use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use tracing::info;

use reel_core::FileStore;

use crate::app::{resolve_config_path, resolve_data_dir, AppContext};
use crate::cli::InitArgs;
use crate::config::{parse_timezone, write_config, ReelConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

fn timezone_options() -> Vec<String> {
    let mut zones: Vec<String> = chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.to_string())
        .collect();
    zones.sort();
    zones.insert(0, "auto (UTC)".to_string());
    zones
}

fn prompt_timezone() -> anyhow::Result<Option<String>> {
    let options = timezone_options();
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Display timezone")
        .items(&options)
        .default(0)
        .interact()?;
    if selection == 0 {
        return Ok(None);
    }
    Ok(Some(options[selection].clone()))
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        ))
        .into());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let timezone = match args.timezone.as_deref() {
        Some(value) => parse_timezone(value)?.map(|tz| tz.to_string()),
        None if !args.no_input && ui_ctx.is_interactive() => prompt_timezone()?,
        None => None,
    };

    // Flag or XDG default only; the file being replaced is not consulted
    let data_dir = resolve_data_dir(ctx.cli(), &ReelConfig::default())?;
    FileStore::open(&data_dir)?;

    let config = ReelConfig::new(data_dir.clone(), timezone);
    write_config(&config_path, &config)?;
    info!(path = %config_path.display(), "wrote config");

    if !ctx.quiet() {
        let config_display = config_path.display().to_string();
        let data_display = data_dir.display().to_string();
        let tz_display = config.ui.timezone.as_deref().unwrap_or("UTC");
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Initialized Reel",
                &[
                    ("Config", &config_display),
                    ("Data", &data_display),
                    ("Timezone", tz_display),
                ],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, "reel login"));
        }
    }
    Ok(())
}
