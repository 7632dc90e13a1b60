pub mod combine;
pub mod crowd;
pub mod genre_filter;
pub mod geo;
pub mod pipeline;
pub mod text;
pub mod types;

pub use pipeline::recommend;
pub use types::{Diagnostic, RecommendationReport, Weights};
