use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, FacilityRequest, NewRequest, RequestUpdate},
};

fn create_form(payload: &NewRequest) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in payload.text_fields() {
        form = form.text(name, value);
    }
    if let Some(attachment) = &payload.attachment {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.mime_type)
            .map_err(|e| ApiError::validation(format!("Invalid attachment type: {}", e)))?;
        form = form.part("file", part);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_requests(&self) -> Result<Vec<FacilityRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send_json(self.http_client().get(format!("{}/capture", base_url)))
            .await
    }

    pub async fn create_request(&self, payload: &NewRequest) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let form = create_form(payload)?;
        self.send_json(
            self.http_client()
                .post(format!("{}/requests", base_url))
                .multipart(form),
        )
        .await
    }

    pub async fn update_request(&self, id: &str, payload: &RequestUpdate) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send_json(
            self.http_client()
                .patch(format!("{}/requests/{}", base_url, id))
                .json(payload),
        )
        .await
    }

    pub async fn delete_request(&self, id: &str) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send_json(
            self.http_client()
                .delete(format!("{}/requests/{}", base_url, id)),
        )
        .await
    }
}
