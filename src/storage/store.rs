use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::seed::{seed_authors, seed_posts};
use crate::model::{Author, NewPost, Post};

#[derive(Debug, Default)]
struct BlogData {
    posts: Vec<Post>,
    authors: Vec<Author>,
}

/// Posts and authors shared by every request.
///
/// Reads hand out copies of the live sequences. `add_post` generates the id
/// and appends under one write lock, so concurrent mutations never interleave.
#[derive(Debug, Default)]
pub struct BlogStore {
    data: RwLock<BlogData>,
    // Author list scans, one per `authors_for` / `author_of` call
    author_lookups: AtomicUsize,
}

impl BlogStore {
    pub fn new(posts: Vec<Post>, authors: Vec<Author>) -> Self {
        Self {
            data: RwLock::new(BlogData { posts, authors }),
            author_lookups: AtomicUsize::new(0),
        }
    }

    /// Store holding the startup authors and posts.
    pub fn seeded() -> Self {
        Self::new(seed_posts(Utc::now()), seed_authors())
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.data.read().await.posts.clone()
    }

    pub async fn authors(&self) -> Vec<Author> {
        self.data.read().await.authors.clone()
    }

    pub async fn add_post(&self, new: NewPost) -> Post {
        self.add_post_at(new, Utc::now()).await
    }

    /// Appends a post created at `now`. Ids only have second resolution; a
    /// collision is logged and the post is stored anyway.
    pub async fn add_post_at(&self, new: NewPost, now: DateTime<Utc>) -> Post {
        let post = Post::from_new(new, now);
        let mut data = self.data.write().await;

        if data.posts.iter().any(|p| p.id == post.id) {
            tracing::warn!(id = %post.id, "Generated post id already exists");
        }

        data.posts.push(post.clone());
        tracing::debug!(id = %post.id, author = %post.author, total = data.posts.len(), "Added post");
        post
    }

    /// Authors for `ids`, in the same order. Unknown ids yield
    /// `Author::default()`.
    pub async fn authors_for(&self, ids: &[String]) -> Vec<Author> {
        let data = self.data.read().await;
        let lookups = self.author_lookups.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(ids = ids.len(), lookups, "Resolving author batch");
        resolve_authors(&data.authors, ids)
    }

    pub async fn author_of(&self, id: &str) -> Author {
        let data = self.data.read().await;
        self.author_lookups.fetch_add(1, Ordering::Relaxed);
        data.authors
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of author list scans made so far.
    pub fn author_lookups(&self) -> usize {
        self.author_lookups.load(Ordering::Relaxed)
    }
}

fn resolve_authors(authors: &[Author], ids: &[String]) -> Vec<Author> {
    let by_id: HashMap<&str, &Author> = authors.iter().map(|a| (a.id.as_str(), a)).collect();

    ids.iter()
        .map(|id| by_id.get(id.as_str()).map(|a| (*a).clone()).unwrap_or_default())
        .collect()
}
