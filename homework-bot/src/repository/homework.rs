//! Homework repository
//!
//! Fetches raw homework statuses from the review API.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Lower time bound, Unix epoch seconds
    ///
    /// # Returns
    /// The response body, not yet validated
    async fn fetch(&self, from_date: i64) -> Result<Value, ClientError>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch(&self, from_date: i64) -> Result<Value, ClientError> {
        self.client.homework_statuses(from_date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_delegates_to_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("from_date", "17"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"homeworks": []})))
            .expect(1)
            .mount(&server)
            .await;

        let repo: Box<dyn HomeworkRepository> = Box::new(HttpHomeworkRepository::new(
            PracticumClient::new(server.uri(), "token"),
        ));
        assert_eq!(repo.fetch(17).await.unwrap(), json!({"homeworks": []}));
    }
}
