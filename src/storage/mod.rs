pub mod data_storage;
pub mod session;
pub mod store;
