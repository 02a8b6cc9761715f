use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use reel_core::VERSION;

/// Reel - a local-first personal movie tracker
#[derive(Parser)]
#[command(name = "reel")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding session and movie data
    #[arg(long, global = true, env = "REEL_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Display timezone (IANA name, e.g. Europe/Berlin)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `login` command
#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: Option<String>,

    /// Password (prefer REEL_PASSWORD or the prompt)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the `signup` command
#[derive(Args)]
pub struct SignupArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Display name
    #[arg(long)]
    pub username: String,

    /// Password (prefer REEL_PASSWORD or the prompt)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the `whoami` command
#[derive(Args)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Movie title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Release year (YYYY)
    #[arg(long)]
    pub year: Option<String>,

    /// Director
    #[arg(long)]
    pub director: Option<String>,

    /// Genre (repeatable)
    #[arg(short, long, value_name = "GENRE")]
    pub genre: Vec<String>,

    /// Poster image URL
    #[arg(long, value_name = "URL")]
    pub poster: Option<String>,

    /// Mark as already watched
    #[arg(long)]
    pub watched: bool,

    /// Rating from 0 to 5 (requires --watched)
    #[arg(long)]
    pub rating: Option<String>,

    /// Comment (requires --watched)
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Movie ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// Release year (YYYY, empty to clear)
    #[arg(long)]
    pub year: Option<String>,

    /// Director (empty to clear)
    #[arg(long)]
    pub director: Option<String>,

    /// Replace genres (repeatable)
    #[arg(short, long, value_name = "GENRE")]
    pub genre: Vec<String>,

    /// Remove all genres
    #[arg(long, conflicts_with = "genre")]
    pub clear_genres: bool,

    /// Poster image URL (empty to clear)
    #[arg(long, value_name = "URL")]
    pub poster: Option<String>,

    /// Mark as watched
    #[arg(long)]
    pub watched: bool,

    /// Move back to the watchlist (clears rating and comment)
    #[arg(long, conflicts_with_all = ["watched", "rating", "comment"])]
    pub unwatched: bool,

    /// Rating from 0 to 5 (empty to clear)
    #[arg(long)]
    pub rating: Option<String>,

    /// Comment (empty to clear)
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for `watch` and `unwatch`
#[derive(Args)]
pub struct WatchArgs {
    /// Movie ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `rate` command
#[derive(Args)]
pub struct RateArgs {
    /// Movie ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Rating from 0 to 5
    #[arg(value_name = "RATING")]
    pub rating: String,

    /// Comment to store with the rating
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Movie ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Filter and output flags shared by the list views
#[derive(Args)]
pub struct FilterArgs {
    /// Match title, director or genre (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only movies with this genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Sort key (date, title, rating)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub order: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Watched state (all, watched, unwatched)
    #[arg(long)]
    pub status: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Movie ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),

    /// Sign in
    Login(LoginArgs),

    /// Create an account and sign in
    Signup(SignupArgs),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami(WhoamiArgs),

    /// Add a movie
    Add(AddArgs),

    /// Edit a movie
    Edit(EditArgs),

    /// Mark a movie as watched
    Watch(WatchArgs),

    /// Move a movie back to the watchlist
    Unwatch(WatchArgs),

    /// Rate a watched movie
    Rate(RateArgs),

    /// Delete a movie
    Delete(DeleteArgs),

    /// List movies
    List(ListArgs),

    /// List movies not yet watched
    Watchlist(FilterArgs),

    /// List watched movies
    Watched(FilterArgs),

    /// Show a movie by ID
    Show(ShowArgs),

    /// Collection overview
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::try_parse_from([
            "reel", "list", "--status", "watched", "--sort", "title", "--order", "asc",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.status.as_deref(), Some("watched"));
                assert_eq!(args.filter.sort.as_deref(), Some("title"));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_edit_unwatched_conflicts_with_watched() {
        let result = Cli::try_parse_from(["reel", "edit", "abcd", "--watched", "--unwatched"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["reel", "edit", "abcd", "--unwatched", "--rating", "4"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_edit_genre_conflicts_with_clear() {
        let result =
            Cli::try_parse_from(["reel", "edit", "abcd", "--genre", "Drama", "--clear-genres"]);
        assert!(result.is_err());
    }
}
