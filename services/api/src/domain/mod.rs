pub mod credential;
pub mod repository;
pub mod types;
