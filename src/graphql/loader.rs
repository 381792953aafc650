use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use async_graphql::dataloader::Loader;

use crate::model::Author;
use crate::storage::BlogStore;

/// Batches `Post.author` lookups so a response listing N posts reads the
/// author list once instead of N times.
pub struct AuthorLoader {
    store: Arc<BlogStore>,
}

impl AuthorLoader {
    pub fn new(store: Arc<BlogStore>) -> Self {
        Self { store }
    }
}

impl Loader<String> for AuthorLoader {
    type Value = Author;
    type Error = Infallible;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        let authors = self.store.authors_for(keys).await;
        tracing::debug!(keys = keys.len(), "Loaded author batch");
        Ok(keys.iter().cloned().zip(authors).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_fills_unknown_keys() {
        let loader = AuthorLoader::new(Arc::new(BlogStore::seeded()));
        let keys = vec!["id456".to_string(), "ghost".to_string()];

        let loaded = loader.load(&keys).await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["id456"].name, "Bar Li");
        assert_eq!(loaded["ghost"], Author::default());
    }
}
