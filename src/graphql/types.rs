use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, SimpleObject};
use chrono::Utc;

use super::loader::AuthorLoader;
use crate::model::{self, Author as ModelAuthor, Post as ModelPost};

pub struct Post(ModelPost);

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self(p)
    }
}

#[Object(name = "Post")]
impl Post {
    async fn id(&self) -> &str {
        &self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn body(&self) -> &str {
        &self.0.body
    }

    /// Creation time, RFC 3339
    async fn created_at(&self) -> String {
        self.0.created_at.to_rfc3339()
    }

    /// Stable key derived from the post id
    async fn key(&self) -> String {
        self.0.key()
    }

    /// Time since the post was created. Cacheable for five seconds.
    #[graphql(cache_control(max_age = 5))]
    async fn age(&self) -> String {
        model::format_elapsed(self.0.age_at(Utc::now()))
    }

    /// Author of the post, or an empty author if the id is unknown
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Author> {
        let loader = ctx.data::<DataLoader<AuthorLoader>>()?;
        let author = loader.load_one(self.0.author.clone()).await?;
        Ok(author.map(Author::from).unwrap_or_default())
    }
}

#[derive(SimpleObject, Clone, Default)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
