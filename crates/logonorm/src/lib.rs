//! logonorm — fetch remote institution logos and standardize them into
//! uniform square PNGs with a transparent border.

pub mod dataset;
pub mod fetch;
pub mod pipeline;
pub mod policy;
pub mod standardize;
pub mod types;

pub use fetch::LogoFetcher;
pub use pipeline::{LogoPipeline, PipelineConfig};
pub use policy::should_process;
pub use standardize::{standardize, StandardizeOptions};
pub use types::*;
