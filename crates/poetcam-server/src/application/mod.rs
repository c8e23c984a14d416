//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! domain services and external gateways.

mod poetry_service;

pub use poetry_service::PoetryService;
