//! Service Ports
//!
//! Abstract interfaces for external services.

mod poem_gateway;

pub use poem_gateway::*;
