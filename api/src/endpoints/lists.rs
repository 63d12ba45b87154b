use medium_core::{Reply, Result};

use crate::{client::MediumClient, request::Request};

impl MediumClient {
    pub async fn get_list_info(&self, list_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/list/{}", list_id))).await
    }

    pub async fn get_list_articles(&self, list_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/list/{}/articles", list_id)))
            .await
    }

    pub async fn get_list_responses(&self, list_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/list/{}/responses", list_id)))
            .await
    }
}
