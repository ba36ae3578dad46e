use crate::api::{
    ApiClient, ApiError, FacilityRequest, MessageResponse, NewRequest, RequestUpdate,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<FacilityRequest>, ApiError> {
        self.client.list_requests().await
    }

    /// Returns the backend's confirmation message, empty when none was sent.
    pub async fn create(&self, payload: NewRequest) -> Result<String, ApiError> {
        let value = self.client.create_request(&payload).await?;
        let response: MessageResponse = serde_json::from_value(value).unwrap_or_default();
        Ok(response.message)
    }

    pub async fn update(&self, id: &str, payload: RequestUpdate) -> Result<(), ApiError> {
        self.client.update_request(id, &payload).await.map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_request(id).await.map(|_| ())
    }
}
