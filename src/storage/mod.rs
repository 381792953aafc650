//! In-memory storage for posts and authors.
//!
//! Everything lives for the lifetime of the process and resets to the seed
//! data on restart.
//!
//! ## Components
//!
//! - [`BlogStore`]: the post and author sequences behind a single lock
//! - [`seed_posts`], [`seed_authors`]: the startup data set

mod seed;
mod store;

pub use seed::{seed_authors, seed_posts};
pub use store::BlogStore;
