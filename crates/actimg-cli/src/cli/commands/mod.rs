//! CLI command handlers. Each command is in its own file.

mod completions;
mod index;
mod normalize;
mod render;

pub use completions::{run_completions, run_man};
pub use index::run_index;
pub use normalize::run_normalize;
pub use render::run_render;

#[cfg(test)]
pub(super) use index::index_rows;
#[cfg(test)]
pub(super) use normalize::normalize_line;
#[cfg(test)]
pub(super) use render::render_html;
