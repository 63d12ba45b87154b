use medium_core::{Reply, Result};

use crate::{client::MediumClient, request::Request};

impl MediumClient {
    pub async fn search_users(&self, query: &str) -> Result<Reply> {
        self.search("users", query).await
    }

    pub async fn search_articles(&self, query: &str) -> Result<Reply> {
        self.search("articles", query).await
    }

    pub async fn search_publications(&self, query: &str) -> Result<Reply> {
        self.search("publications", query).await
    }

    pub async fn search_lists(&self, query: &str) -> Result<Reply> {
        self.search("lists", query).await
    }

    pub async fn search_tags(&self, query: &str) -> Result<Reply> {
        self.search("tags", query).await
    }

    async fn search(&self, kind: &str, query: &str) -> Result<Reply> {
        self.get(Request::new(format!("/search/{}", kind)).param("query", query))
            .await
    }
}
