//! CLI command handlers, one file per command.

mod categories;
mod completions;
mod featured;
mod list;
mod man;
mod meta;
mod render;
mod show;

pub use categories::run_categories;
pub use completions::run_completions;
pub use featured::run_featured;
pub use list::run_list;
pub use man::run_man;
pub use meta::run_meta;
pub use show::run_show;

#[cfg(test)]
pub(crate) use list::render_list;
#[cfg(test)]
pub(crate) use show::render_show;
