//! Utility functions shared by the shell.
//!
//! - **Link resolution**: turning a menu link into an absolute URL that is safe
//!   to hand to the system opener

mod link;

pub use link::{resolve_link, LinkError};
