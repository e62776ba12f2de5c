pub mod chat;
pub mod form;
pub mod report;
