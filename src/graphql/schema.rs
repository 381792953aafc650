use std::sync::Arc;

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, EmptySubscription, Object, Schema};

use super::loader::AuthorLoader;
use super::types::*;
use crate::model::NewPost;
use crate::storage::BlogStore;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Appended to the echoed message and to the title returned by `addPost`.
pub const ECHO_SUFFIX: &str = "!!";

pub fn build_schema(store: Arc<BlogStore>) -> BlogSchema {
    let authors = DataLoader::new(AuthorLoader::new(store.clone()), tokio::spawn);

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(authors)
        .finish()
}

/// Schema in SDL form.
pub fn schema_sdl(schema: &BlogSchema) -> String {
    schema.sdl()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<BlogStore>> {
    ctx.data::<Arc<BlogStore>>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All posts, oldest first
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = get_store(ctx)?;
        Ok(store.posts().await.into_iter().map(Post::from).collect())
    }

    /// All authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = get_store(ctx)?;
        Ok(store.authors().await.into_iter().map(Author::from).collect())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Return the message with `!!` appended
    async fn echo(&self, message: String) -> String {
        format!("{}{}", message, ECHO_SUFFIX)
    }

    /// Add a post and return its title with `!!` appended
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        author: String,
    ) -> async_graphql::Result<String> {
        let store = get_store(ctx)?;
        let reply = format!("{}{}", title, ECHO_SUFFIX);
        store.add_post(NewPost { title, body, author }).await;
        Ok(reply)
    }
}
