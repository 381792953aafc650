//! # blogql - a tiny in-memory blog over GraphQL
//!
//! Serves a handful of posts and authors through a GraphQL API, together
//! with a GraphiQL explorer for composing queries by hand.
//!
//! ## Features
//!
//! - **In-memory data**: two posts and three authors seeded at startup; nothing is persisted
//! - **GraphQL API**: `posts`, `authors`, `echo` and `addPost`
//! - **Batched authors**: `Post.author` is resolved through a DataLoader
//! - **Cache hints**: `Post.age` is only cacheable for five seconds
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on :3030, explorer at http://localhost:3030/graphiql
//! blogql serve
//!
//! # One-off query against the seed data
//! blogql query '{ posts { title author { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Post, Author)
//! - [`storage`]: The shared in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads an optional TOML file with server and logging settings.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and the axum server.
pub mod graphql;

/// Data models for posts and authors.
pub mod model;

/// In-memory storage.
///
/// Holds posts and authors for the lifetime of the process.
pub mod storage;

/// Logging setup.
///
/// Installs the tracing subscriber for stderr and an optional log file.
pub mod logging;
