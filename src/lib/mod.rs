//! Renders a project page inside the hosting portal's frame.

pub mod config;
pub mod fragment;
pub mod pipeline;
pub mod serve;
pub mod templates;
pub mod types;
pub mod utils;
