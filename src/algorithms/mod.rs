//! Algorithms built strictly on the public operator surface.

mod bfs;

pub use bfs::search;
