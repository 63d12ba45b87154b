use medium_core::{models::FeedMode, Reply, Result};

use crate::{client::MediumClient, request::Request};

impl MediumClient {
    pub async fn get_tag_info(&self, tag: &str) -> Result<Reply> {
        self.get(Request::new(format!("/tag/{}", tag))).await
    }

    pub async fn get_related_tags(&self, tag: &str) -> Result<Reply> {
        self.get(Request::new(format!("/related_tags/{}", tag))).await
    }

    pub async fn get_root_tags(&self) -> Result<Reply> {
        self.get(Request::new("/root_tags")).await
    }

    pub async fn get_top_writers(&self, topic: &str, count: Option<u32>) -> Result<Reply> {
        self.get(Request::new(format!("/top_writers/{}", topic)).opt("count", count))
            .await
    }

    pub async fn get_latest_posts(&self, topic: &str) -> Result<Reply> {
        self.get(Request::new(format!("/latestposts/{}", topic))).await
    }

    pub async fn get_top_feeds(
        &self,
        tag: &str,
        mode: FeedMode,
        after: Option<u32>,
        count: Option<u32>,
    ) -> Result<Reply> {
        let request = Request::new(format!("/topfeeds/{}/{}", tag, mode.as_str()))
            .opt("after", after)
            .opt("count", count);
        self.get(request).await
    }

    pub async fn get_recommended_feed(&self, tag: &str, page: Option<u32>) -> Result<Reply> {
        self.get(Request::new(format!("/recommended_feed/{}", tag)).opt("page", page))
            .await
    }

    pub async fn get_recommended_users(&self, tag: &str) -> Result<Reply> {
        self.get(Request::new(format!("/recommended_users/{}", tag)))
            .await
    }

    /// Articles archived under `tag`. `next` is the cursor returned by a
    /// previous call for the same year/month.
    pub async fn get_archived_articles(
        &self,
        tag: &str,
        year: Option<u16>,
        month: Option<u8>,
        next: Option<&str>,
    ) -> Result<Reply> {
        let request = Request::new(format!("/archived_articles/{}", tag))
            .opt("year", year)
            .opt("month", month)
            .opt("next", next);
        self.get(request).await
    }
}
