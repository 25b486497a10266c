// tests/support/builders.rs
use serde_json::{Value, json};

/// JSON body for `POST /api/v1/articles`.
pub struct ArticleRequestBuilder {
    title: String,
    content: String,
    hashtag: Option<String>,
}

impl ArticleRequestBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            content: "Test content".into(),
            hashtag: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn hashtag(mut self, hashtag: impl Into<String>) -> Self {
        self.hashtag = Some(hashtag.into());
        self
    }

    pub fn build(self) -> Value {
        json!({
            "title": self.title,
            "content": self.content,
            "hashtag": self.hashtag,
        })
    }
}
