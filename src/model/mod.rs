//! Data models for the blog.
//!
//! - [`Post`]: a stored blog post, immutable once created
//! - [`NewPost`]: the caller-supplied part of a post
//! - [`Author`]: a post author, fixed at startup
//! - [`format_elapsed`]: human-readable duration text used for a post's age

mod author;
mod duration;
mod post;

pub use author::Author;
pub use duration::format_elapsed;
pub use post::{KEY_PREFIX, NewPost, POST_ID_PREFIX, Post};
