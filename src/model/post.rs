use chrono::{DateTime, Utc};

pub const POST_ID_PREFIX: &str = "p";
pub const KEY_PREFIX: &str = "key-";

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,

    /// Id of the author. Not checked against the author list.
    pub author: String,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            created_at: Utc::now(),
            author: author.into(),
        }
    }

    /// Builds a post from caller input, stamped at `now`.
    ///
    /// The id is the prefix followed by `now` in whole Unix seconds, so two
    /// posts created within the same second share an id.
    pub fn from_new(new: NewPost, now: DateTime<Utc>) -> Self {
        Self {
            id: Self::id_at(now),
            title: new.title,
            body: new.body,
            created_at: now,
            author: new.author,
        }
    }

    pub fn id_at(now: DateTime<Utc>) -> String {
        format!("{}{}", POST_ID_PREFIX, now.timestamp())
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn key(&self) -> String {
        format!("{}{}", KEY_PREFIX, self.id)
    }

    /// Time elapsed between creation and `now`, clamped at zero.
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        (now - self.created_at).max(chrono::Duration::zero())
    }
}

/// Fields supplied by `addPost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_key_is_prefixed_id() {
        let post = Post::new("p1", "first post!", "id123");
        assert_eq!(post.key(), "key-p1");
        assert_eq!(post.key(), post.key());
    }

    #[test]
    fn test_from_new_uses_unix_seconds() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let post = Post::from_new(
            NewPost {
                title: "x".to_string(),
                body: "y".to_string(),
                author: "id456".to_string(),
            },
            now,
        );

        assert_eq!(post.id, format!("p{}", now.timestamp()));
        assert_eq!(post.created_at, now);
        assert_eq!(post.title, "x");
        assert_eq!(post.body, "y");
        assert_eq!(post.author, "id456");
    }

    #[test]
    fn test_same_second_ids_collide() {
        let a = Utc.timestamp_millis_opt(1_700_000_000_100).unwrap();
        let b = Utc.timestamp_millis_opt(1_700_000_000_900).unwrap();
        assert_eq!(Post::id_at(a), Post::id_at(b));
    }

    #[test]
    fn test_age_never_negative() {
        let now = Utc::now();
        let post = Post::new("p1", "t", "a").with_created_at(now + chrono::Duration::seconds(10));
        assert_eq!(post.age_at(now), chrono::Duration::zero());
    }
}
