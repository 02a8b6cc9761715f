//! Reel CLI - a local-first personal movie tracker
//!
//! This is the command-line interface for Reel. Each invocation restores
//! the session, loads the signed-in user's movies, applies one action and
//! renders the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use reel_core::{View, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{auth, init, misc, movies, stats};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    logging::init(&ctx.log_filter());

    if let Err(err) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (code, hint) = errors::classify(&err);
        print_error(&ui_ctx, &err.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Login(args)) => auth::handle_login(ctx, args),
        Some(Commands::Signup(args)) => auth::handle_signup(ctx, args),
        Some(Commands::Logout) => auth::handle_logout(ctx),
        Some(Commands::Whoami(args)) => auth::handle_whoami(ctx, args),
        Some(Commands::Add(args)) => movies::handle_add(ctx, args),
        Some(Commands::Edit(args)) => movies::handle_edit(ctx, args),
        Some(Commands::Watch(args)) => movies::handle_watch(ctx, args, true),
        Some(Commands::Unwatch(args)) => movies::handle_watch(ctx, args, false),
        Some(Commands::Rate(args)) => movies::handle_rate(ctx, args),
        Some(Commands::Delete(args)) => movies::handle_delete(ctx, args),
        Some(Commands::List(args)) => {
            movies::handle_list(ctx, View::Dashboard, args.status.as_deref(), &args.filter)
        }
        Some(Commands::Watchlist(args)) => movies::handle_list(ctx, View::Watchlist, None, args),
        Some(Commands::Watched(args)) => movies::handle_list(ctx, View::Watched, None, args),
        Some(Commands::Show(args)) => movies::handle_show(ctx, args),
        Some(Commands::Stats(args)) => stats::handle_stats(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            println!("Reel v{}", VERSION);
            println!("\nQuickstart:");
            println!("  reel login --email demo@example.com");
            println!("  reel add \"Arrival\" --year 2016 --genre Sci-Fi");
            println!("  reel watchlist");
            println!("  reel watch <id>");
            println!("  reel rate <id> 4.5");
            println!("\nRun `reel --help` for full usage.");
            Ok(())
        }
    }
}
