//! Terminal UI: layout, input dispatch, and shared styles
//!
//! - `render` - frame layout, overlays, and toasts
//! - `input` - keyboard handling per screen and overlay
//! - `screens` - content rendering for each screen
//! - `styles` - the shared color palette and text styles

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;
