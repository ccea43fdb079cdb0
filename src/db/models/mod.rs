pub mod follow;
pub mod recipe;
pub mod user;

pub use follow::Follow;
pub use recipe::{FeedEntry, Recipe};
pub use user::{Role, User};
