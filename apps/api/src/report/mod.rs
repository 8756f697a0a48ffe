//! Report rendering — turns a proposal set into a paginated PDF.

pub mod metrics;
pub mod renderer;

pub use renderer::{format_yen, render_report};
