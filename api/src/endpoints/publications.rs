use medium_core::{Reply, Result};

use crate::{client::MediumClient, request::Request};

impl MediumClient {
    /// Resolve a publication slug to its id
    pub async fn get_publication_id(&self, slug: &str) -> Result<Reply<String>> {
        self.get_field(
            Request::new(format!("/publication/id_for/{}", slug)),
            "publication_id",
        )
        .await
    }

    pub async fn get_publication_info(&self, publication_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/publication/{}", publication_id)))
            .await
    }

    /// `from` is a `YYYY-MM-DDTHH:MM:SS` timestamp to page backwards from
    pub async fn get_publication_articles(
        &self,
        publication_id: &str,
        from: Option<&str>,
    ) -> Result<Reply> {
        let request =
            Request::new(format!("/publication/{}/articles", publication_id)).opt("from", from);
        self.get(request).await
    }

    pub async fn get_publication_newsletter(&self, publication_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/publication/{}/newsletter", publication_id)))
            .await
    }

    pub async fn get_publication_editors(&self, publication_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/publication/{}/editors", publication_id)))
            .await
    }
}
