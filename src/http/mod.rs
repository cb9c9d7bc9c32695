//! HTTP plumbing shared by all services.

pub mod extract;
pub mod response;
