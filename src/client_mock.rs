use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use crate::error::{AppError, Upstream};
use crate::models::chat::ChatRequest;
use crate::models::form::{FormSchema, SubmissionData};

// Mock of the forms backend client
mock! {
    pub FormsBackend {}

    #[async_trait]
    impl crate::client::FormsBackend for FormsBackend {
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
}

// Mock of the chat model client
mock! {
    pub ChatModel {}

    #[async_trait]
    impl crate::openai::ChatModel for ChatModel {
        async fn complete(&self, request: ChatRequest) -> Result<String, AppError>;
    }
}

fn not_found(what: &str) -> AppError {
    AppError::UpstreamRequestFailed {
        service: Upstream::FormsBackend,
        status: Some(404),
        body: format!("{} not found", what),
    }
}

// A simple in-memory store standing in for the forms backend
pub struct MockDataStore {
    forms: Mutex<Vec<Value>>,
    submissions: Mutex<Vec<Value>>,
}

impl MockDataStore {
    pub fn new() -> Self {
        Self {
            forms: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn forms(&self) -> Vec<Value> {
        self.forms.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<Value> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn insert_form(&self, form: &FormSchema) -> Value {
        let mut forms = self.forms.lock().unwrap();
        let mut stored = Value::Object(form.clone());
        stored["_id"] = json!(format!("form{}", forms.len() + 1));
        forms.push(stored.clone());
        stored
    }

    pub fn find_form(&self, form_id: &str) -> Option<Value> {
        self.forms
            .lock()
            .unwrap()
            .iter()
            .find(|f| f["_id"] == form_id)
            .cloned()
    }

    pub fn replace_form(&self, form_id: &str, form: &FormSchema) -> Option<Value> {
        let mut forms = self.forms.lock().unwrap();
        let slot = forms.iter_mut().find(|f| f["_id"] == form_id)?;
        let mut stored = Value::Object(form.clone());
        stored["_id"] = json!(form_id);
        *slot = stored.clone();
        Some(stored)
    }

    pub fn remove_form(&self, form_id: &str) -> bool {
        let mut forms = self.forms.lock().unwrap();
        let before = forms.len();
        forms.retain(|f| f["_id"] != form_id);
        forms.len() != before
    }

    pub fn insert_submission(&self, form_id: &str, submission: &SubmissionData) -> Value {
        let mut submissions = self.submissions.lock().unwrap();
        let mut stored = Value::Object(submission.clone());
        stored["_id"] = json!(format!("sub{}", submissions.len() + 1));
        stored["form"] = json!(form_id);
        stored["created"] = json!("2025-03-30T01:00:00.000Z");
        submissions.push(stored.clone());
        stored
    }

    pub fn submissions_for(&self, form_id: &str) -> Vec<Value> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s["form"] == form_id)
            .cloned()
            .collect()
    }
}

// Helper function to set up a mock backend backed by the in-memory store
pub fn setup_mock_backend() -> (MockFormsBackend, Arc<MockDataStore>) {
    let data_store = Arc::new(MockDataStore::new());
    let mut backend = MockFormsBackend::new();

    let store = Arc::clone(&data_store);
    backend
        .expect_list_forms()
        .returning(move || Ok(Value::Array(store.forms())));

    let store = Arc::clone(&data_store);
    backend
        .expect_get_form()
        .returning(move |form_id| store.find_form(form_id).ok_or_else(|| not_found("Form")));

    let store = Arc::clone(&data_store);
    backend
        .expect_create_form()
        .returning(move |form| Ok(store.insert_form(form)));

    let store = Arc::clone(&data_store);
    backend.expect_update_form().returning(move |form_id, form| {
        store
            .replace_form(form_id, form)
            .ok_or_else(|| not_found("Form"))
    });

    let store = Arc::clone(&data_store);
    backend.expect_delete_form().returning(move |form_id| {
        if store.remove_form(form_id) {
            Ok(())
        } else {
            Err(not_found("Form"))
        }
    });

    let store = Arc::clone(&data_store);
    backend
        .expect_list_form_submissions()
        .returning(move |form_id| Ok(Value::Array(store.submissions_for(form_id))));

    let store = Arc::clone(&data_store);
    backend
        .expect_create_submission()
        .returning(move |form_id, submission| Ok(store.insert_submission(form_id, submission)));

    let store = Arc::clone(&data_store);
    backend
        .expect_list_submissions()
        .returning(move || Ok(Value::Array(store.submissions())));

    (backend, data_store)
}
