//! Helpers for exercising the library: seeded graph generators and a plain
//! BFS oracle to check the union-find partition against.

pub mod oracle;
pub mod random_graphs;
