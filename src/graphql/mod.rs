//! GraphQL schema and resolvers for the blog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server on port 3030, explorer at /graphiql
//! blogql serve
//!
//! # Execute a query from CLI
//! blogql query '{ posts { key title age author { name } } }'
//!
//! # Execute a mutation from CLI
//! blogql mutate 'addPost(title: "x", body: "y", author: "id456")'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `posts`, `authors`
//! - **Mutations**: `echo`, `addPost`
//! - **Post**: `id`, `title`, `body`, `createdAt`, `key`, `age`, `author`

mod loader;
mod schema;
mod server;
mod types;

pub use loader::AuthorLoader;
pub use schema::{BlogSchema, ECHO_SUFFIX, MutationRoot, QueryRoot, build_schema, schema_sdl};
pub use server::{build_app, run_server};
pub use types::*;
