pub mod path;
pub mod shortest_paths;
pub mod snapshot;

pub use path::Path;
pub use shortest_paths::ShortestPaths;
pub use snapshot::PathSnapshot;
