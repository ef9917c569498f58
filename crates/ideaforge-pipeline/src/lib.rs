pub mod ideas;
pub mod orchestrator;
pub mod roadmap;

pub use ideas::IdeaGenerator;
pub use orchestrator::{IdeaOutcome, Pipeline};
pub use roadmap::RoadmapGenerator;
