pub mod app;
pub mod calendar;
pub mod document;
pub mod error;
pub mod messages;
pub mod progress;
pub mod quote;
pub mod task;
pub mod view;
