use chrono::{DateTime, Utc};

use crate::model::{Author, Post};

pub fn seed_authors() -> Vec<Author> {
    vec![
        Author::new("id123", "Foo Cai"),
        Author::new("id456", "Bar Li"),
        Author::new("id789", "Lives Zhao"),
    ]
}

pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post::new("p1", "first post!", "id123")
            .with_body("I was here first!")
            .with_created_at(now),
        Post::new("p2", "graphql", "id789")
            .with_body("did you hear about Thunder?")
            .with_created_at(now),
    ]
}
