//! Workflow planner: task dependencies, topological order, critical path.

mod graph;

pub use graph::{CriticalPath, DependencyGraph};
