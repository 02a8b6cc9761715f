use reel_core::{FilterPatch, View};

use crate::app::AppContext;
use crate::cli::FilterArgs;
use crate::config::ReelConfig;
use crate::helpers::{check_output_flags, parse_sort_key, parse_sort_order, parse_status};
use crate::output::{print_json, print_movie_list};

/// Filter changes on top of the view's reset filter. Sort flags fall back
/// to the config's defaults.
fn build_patch(
    config: &ReelConfig,
    status: Option<&str>,
    args: &FilterArgs,
) -> anyhow::Result<FilterPatch> {
    let mut patch = FilterPatch::new();
    if let Some(status) = status {
        patch = patch.status(parse_status(status)?);
    }
    if let Some(query) = &args.search {
        patch = patch.search(query.as_str());
    }
    if let Some(genre) = &args.genre {
        patch = patch.genre(Some(genre.clone()));
    }

    let sort_by = match args.sort.as_deref() {
        Some(value) => Some(parse_sort_key(value)?),
        None => config.ui.default_sort,
    };
    if let Some(sort_by) = sort_by {
        patch = patch.sort_by(sort_by);
    }
    let sort_order = match args.order.as_deref() {
        Some(value) => Some(parse_sort_order(value)?),
        None => config.ui.default_order,
    };
    if let Some(sort_order) = sort_order {
        patch = patch.sort_order(sort_order);
    }
    Ok(patch)
}

/// Render `list`, `watchlist` or `watched`.
pub fn handle_list(
    ctx: &AppContext,
    view: View,
    status: Option<&str>,
    args: &FilterArgs,
) -> anyhow::Result<()> {
    check_output_flags(args.json, args.format.as_deref())?;
    let patch = build_patch(ctx.config()?, status, args)?;

    let mut library = ctx.open_library()?;
    library.enter_view(view);
    library.set_filter(patch);

    let mut movies = library.filtered().to_vec();
    if let Some(limit) = args.limit {
        movies.truncate(limit);
    }

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        return print_json(&movies);
    }
    print_movie_list(
        &ui_ctx,
        view.name(),
        &movies,
        library.movies().len(),
        ctx.quiet(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use reel_core::{SortKey, SortOrder, StatusFilter};

    fn list_args(argv: &[&str]) -> (Option<String>, FilterArgs) {
        let mut full = vec!["reel", "list"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Some(Commands::List(args)) => (args.status, args.filter),
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_flags_become_patch() {
        let (status, args) = list_args(&["--status", "watched", "-s", "nolan", "--sort", "rating"]);
        let patch = build_patch(&ReelConfig::default(), status.as_deref(), &args).unwrap();
        assert_eq!(patch.status, Some(StatusFilter::Watched));
        assert_eq!(patch.search_query.as_deref(), Some("nolan"));
        assert_eq!(patch.sort_by, Some(SortKey::Rating));
        assert_eq!(patch.sort_order, None);
    }

    #[test]
    fn test_config_sort_defaults_apply() {
        let mut config = ReelConfig::default();
        config.ui.default_sort = Some(SortKey::Title);
        config.ui.default_order = Some(SortOrder::Asc);

        let (_, args) = list_args(&[]);
        let patch = build_patch(&config, None, &args).unwrap();
        assert_eq!(patch.sort_by, Some(SortKey::Title));
        assert_eq!(patch.sort_order, Some(SortOrder::Asc));

        let (_, args) = list_args(&["--order", "desc"]);
        let patch = build_patch(&config, None, &args).unwrap();
        assert_eq!(patch.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let (status, args) = list_args(&["--status", "maybe"]);
        assert!(build_patch(&ReelConfig::default(), status.as_deref(), &args).is_err());
    }
}
