use medium_core::{Reply, Result};

use crate::{client::MediumClient, request::Request};

impl MediumClient {
    /// Resolve a username to its user id
    pub async fn get_user_id(&self, username: &str) -> Result<Reply<String>> {
        self.get_field(Request::new(format!("/user/id_for/{}", username)), "id")
            .await
    }

    pub async fn get_user_info(&self, user_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}", user_id))).await
    }

    /// Article ids written by the user, newest first. `after` continues
    /// from a previously returned article id.
    pub async fn get_user_articles(&self, user_id: &str, after: Option<&str>) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/articles", user_id)).opt("after", after))
            .await
    }

    pub async fn get_user_top_articles(&self, user_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/top_articles", user_id)))
            .await
    }

    pub async fn get_user_followers(
        &self,
        user_id: &str,
        count: Option<u32>,
        after: Option<&str>,
    ) -> Result<Reply> {
        let request = Request::new(format!("/user/{}/followers", user_id))
            .opt("count", count)
            .opt("after", after);
        self.get(request).await
    }

    pub async fn get_user_following(&self, user_id: &str, count: Option<u32>) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/following", user_id)).opt("count", count))
            .await
    }

    pub async fn get_user_interests(&self, user_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/interests", user_id)))
            .await
    }

    pub async fn get_user_lists(&self, user_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/lists", user_id))).await
    }

    pub async fn get_user_publications(&self, user_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/publications", user_id)))
            .await
    }

    pub async fn get_user_books(&self, user_id: &str) -> Result<Reply> {
        self.get(Request::new(format!("/user/{}/books", user_id))).await
    }

    /// Whether `user_id` follows `target_id` (a user or publication id)
    pub async fn is_user_following(&self, user_id: &str, target_id: &str) -> Result<Reply> {
        self.get(Request::new(format!(
            "/user/{}/is_following/{}",
            user_id, target_id
        )))
        .await
    }
}
