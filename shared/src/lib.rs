//! Shared types for the Carte menu platform
//!
//! Common request/response types used between carte-server and its
//! clients (dashboard and published menu pages).

pub mod client;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{API_CODE_SUCCESS, ApiResponse};
