//! CLI library components for the service area builder.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
