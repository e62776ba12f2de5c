use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::FormioConfig;
use crate::error::{AppError, Upstream};
use crate::models::form::{FormSchema, SubmissionData};

/// CRUD operations against the forms backend.
///
/// Every call is a single HTTP request; the parsed JSON body is returned as-is.
#[async_trait]
pub trait FormsBackend: Send + Sync {
    async fn list_forms(&self) -> Result<Value, AppError>;

    async fn get_form(&self, form_id: &str) -> Result<Value, AppError>;

    async fn create_form(&self, form: &FormSchema) -> Result<Value, AppError>;

    async fn update_form(&self, form_id: &str, form: &FormSchema) -> Result<Value, AppError>;

    async fn delete_form(&self, form_id: &str) -> Result<(), AppError>;

    async fn list_form_submissions(&self, form_id: &str) -> Result<Value, AppError>;

    async fn create_submission(
        &self,
        form_id: &str,
        submission: &SubmissionData,
    ) -> Result<Value, AppError>;

    async fn list_submissions(&self) -> Result<Value, AppError>;
}

/// Client for a form.io server
pub struct FormioClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FormioClient {
    pub fn new(config: &FormioConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with the static token header attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("Forms backend request: {} {}", method, url);

        self.client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("x-token", &self.api_key)
    }

    /// Send a request and turn any non-success status into an error
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let res = request
            .send()
            .await
            .map_err(|e| AppError::transport(Upstream::FormsBackend, e))?;

        let status = res.status();
        info!("Forms backend responded with status: {}", status);

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("Forms backend request failed ({}): {}", status, body);
            return Err(AppError::UpstreamRequestFailed {
                service: Upstream::FormsBackend,
                status: Some(status.as_u16()),
                body,
            });
        }

        Ok(res)
    }

    async fn send_json(&self, request: RequestBuilder) -> Result<Value, AppError> {
        let res = self.send(request).await?;
        res.json::<Value>()
            .await
            .map_err(|e| AppError::unparsable(Upstream::FormsBackend, e.to_string()))
    }
}

#[async_trait]
impl FormsBackend for FormioClient {
    async fn list_forms(&self) -> Result<Value, AppError> {
        info!("Fetching all forms");
        self.send_json(self.request(Method::GET, "/form")).await
    }

    async fn get_form(&self, form_id: &str) -> Result<Value, AppError> {
        info!("Fetching form {}", form_id);
        self.send_json(self.request(Method::GET, &format!("/form/{}", form_id)))
            .await
    }

    async fn create_form(&self, form: &FormSchema) -> Result<Value, AppError> {
        info!("Creating form");
        self.send_json(self.request(Method::POST, "/form").json(form))
            .await
    }

    async fn update_form(&self, form_id: &str, form: &FormSchema) -> Result<Value, AppError> {
        info!("Updating form {}", form_id);
        self.send_json(
            self.request(Method::PUT, &format!("/form/{}", form_id))
                .json(form),
        )
        .await
    }

    async fn delete_form(&self, form_id: &str) -> Result<(), AppError> {
        info!("Deleting form {}", form_id);
        // form.io answers a delete with a plain "OK" body
        self.send(self.request(Method::DELETE, &format!("/form/{}", form_id)))
            .await?;
        Ok(())
    }

    async fn list_form_submissions(&self, form_id: &str) -> Result<Value, AppError> {
        info!("Fetching submissions for form {}", form_id);
        self.send_json(self.request(Method::GET, &format!("/form/{}/submission", form_id)))
            .await
    }

    async fn create_submission(
        &self,
        form_id: &str,
        submission: &SubmissionData,
    ) -> Result<Value, AppError> {
        info!("Submitting data to form {}", form_id);
        self.send_json(
            self.request(Method::POST, &format!("/form/{}/submission", form_id))
                .json(submission),
        )
        .await
    }

    async fn list_submissions(&self) -> Result<Value, AppError> {
        info!("Fetching all submissions");
        self.send_json(self.request(Method::GET, "/submission")).await
    }
}
