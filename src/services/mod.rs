pub mod enhancement;
pub mod extraction;
pub mod prompts;
pub mod report;
