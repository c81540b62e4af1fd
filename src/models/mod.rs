//! Data models for the Vynn dashboard.
//!
//! These models match the frontend TypeScript interfaces so the same JSON travels
//! between the backend, the client and the preview core.

mod badge;
mod profile;
mod template;
mod upload;

pub use badge::*;
pub use profile::*;
pub use template::*;
pub use upload::*;
