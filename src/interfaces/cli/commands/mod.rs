//! CLI command implementations

mod config_gen;
mod delete;
mod shorten;
mod stats;

pub use config_gen::config_generate;
pub use delete::delete_link;
pub use shorten::shorten_url;
pub use stats::show_stats;
