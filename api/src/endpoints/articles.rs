use medium_core::{extract_article_id, MediumError, Reply, Result};

use crate::{client::MediumClient, request::Request};

impl MediumClient {
    pub async fn get_article_info(&self, article_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/article/{}", article_id)))
            .await
    }

    /// Plain-text body of the article
    pub async fn get_article_content(&self, article_id: &str) -> Result<Reply<String>> {
        self.get_field(Request::new(format!("/article/{}/content", article_id)), "content")
            .await
    }

    pub async fn get_article_markdown(&self, article_id: &str) -> Result<Reply<String>> {
        self.get_field(
            Request::new(format!("/article/{}/markdown", article_id)),
            "markdown",
        )
        .await
    }

    /// Rendered HTML; `fullpage` asks for a standalone document
    pub async fn get_article_html(
        &self,
        article_id: &str,
        fullpage: Option<bool>,
    ) -> Result<Reply<String>> {
        let request =
            Request::new(format!("/article/{}/html", article_id)).opt("fullpage", fullpage);
        self.get_field(request, "html").await
    }

    pub async fn get_article_assets(&self, article_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/article/{}/assets", article_id)))
            .await
    }

    pub async fn get_article_responses(&self, article_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/article/{}/responses", article_id)))
            .await
    }

    pub async fn get_article_fans(&self, article_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/article/{}/fans", article_id)))
            .await
    }

    pub async fn get_article_related(&self, article_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/article/{}/related", article_id)))
            .await
    }

    pub async fn get_article_recommended(&self, article_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/article/{}/recommended", article_id)))
            .await
    }

    /// Look up an article from its public URL.
    ///
    /// Fails with `InvalidInput`, without any request, when no article id
    /// can be read from `url`.
    pub async fn get_article_by_url(&self, url: &str) -> Result<Reply> {
        let article_id = extract_article_id(url)
            .ok_or_else(|| MediumError::InvalidInput(format!("no article id in {:?}", url)))?;
        self.get_article_info(&article_id).await
    }
}
