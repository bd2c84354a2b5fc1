pub mod blog;
pub mod list_helper;

pub use blog::{BlogEntry, BlogRecord};
pub use list_helper::StatsError;
