pub mod normalize;
pub mod pipeline;

pub use normalize::{is_canonical, normalize};
pub use pipeline::{Pipeline, PipelineReport};
