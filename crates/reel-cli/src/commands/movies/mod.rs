//! Movie collection commands.

mod add;
mod delete;
mod edit;
mod list;
mod rate;
mod show;
mod watch;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use rate::handle_rate;
pub use show::handle_show;
pub use watch::handle_watch;
