pub mod walk;

pub use walk::{VisitedDir, walk_repository};
