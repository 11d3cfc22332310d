//! Screen-specific content rendering.
//!
//! Each screen draws into the content area between the title and status
//! bars; overlays and toasts are layered on top by `render`.

pub mod dashboard;
pub mod loading;
pub mod login;
