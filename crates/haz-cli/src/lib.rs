//! CLI library components for the Hyacinth asset zip builder.

pub mod confirm;
pub mod logging;
pub mod pipeline;
