//! Common utilities shared by the adapters.
pub mod validator;
