//! Admin Command Layer
//!
//! Handlers behind the admin panel, one module per collection. The auth
//! gate (session cookie + admin role) lives outside this crate; these
//! handlers assume it already passed. Errors cross this boundary as plain
//! message strings for the UI banner.

mod contact_cmd;
mod education_cmd;
mod experience_cmd;
mod photo_cmd;
mod project_cmd;
mod social_link_cmd;
mod tech_stack_cmd;

pub use contact_cmd::*;
pub use education_cmd::*;
pub use experience_cmd::*;
pub use photo_cmd::*;
pub use project_cmd::*;
pub use social_link_cmd::*;
pub use tech_stack_cmd::*;
