pub mod article_id;
pub mod error;
pub mod models;
pub mod reply;

pub use article_id::extract_article_id;
pub use error::{MediumError, Result};
pub use reply::{ApiFailure, Reply};
