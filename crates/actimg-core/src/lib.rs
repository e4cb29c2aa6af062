pub mod config;
pub mod logging;

pub mod activity_index;
pub mod annotate;
pub mod completion;
pub mod filter;
pub mod host;
pub mod lang;
pub mod snapshot;
pub mod url_path;
