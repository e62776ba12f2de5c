//! Form Digitizer Service
//!
//! Backend for turning photos and scans of paper forms into form.io
//! schemas. A vision model infers the schema, a text model can refine it,
//! and a form.io server stores the forms and their submissions.
//!
//! # Modules
//!
//! - `client`: `FormioClient`, CRUD calls against the forms backend
//! - `openai`: `OpenAiClient`, chat completions for the pipelines
//! - `services`: extraction, enhancement and report generation
//! - `handlers` / `routes`: the REST surface

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openai;
pub mod routes;
pub mod services;

#[cfg(test)]
mod client_mock;
#[cfg(test)]
mod test_fixtures;

// Re-export the main API types for ease of use
pub use client::{FormioClient, FormsBackend};
pub use config::Config;
pub use error::AppError;
pub use handlers::AppState;
pub use openai::{ChatModel, OpenAiClient};
pub use routes::create_router;
