pub mod error;
pub mod password;
pub mod service;
pub mod token;
