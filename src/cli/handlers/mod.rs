mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BlogConfig;
use crate::graphql::{BlogSchema, build_schema};
use crate::storage::BlogStore;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub store: Arc<BlogStore>,
}

impl CommandContext {
    pub fn new(config: BlogConfig) -> Self {
        Self {
            config,
            store: Arc::new(BlogStore::seeded()),
        }
    }

    pub fn schema(&self) -> BlogSchema {
        build_schema(self.store.clone())
    }
}
