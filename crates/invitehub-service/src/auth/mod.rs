//! Login.

pub mod service;

pub use service::AuthService;
