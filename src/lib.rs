//! # rod_cutter
//!
//! A Rust library answering one question: given a structure of rods joined at
//! their endpoints (an undirected multigraph), how many rods can be cut
//! without disconnecting any pair of joints that was connected before?
//!
//! Per connected component every edge beyond a spanning tree is removable, so
//! the answer is the sum over components of `edges - (vertices - 1)`.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ```
//! use rod_cutter::rods_to_cut;
//!
//! assert_eq!(rods_to_cut("1,2 3,4 3,4").unwrap(), 1);
//! assert_eq!(rods_to_cut("1,2 1,3 1,4 2,3 3,4 2,4").unwrap(), 3);
//! ```

pub mod components;
pub mod input;
pub mod output;
pub mod redundancy;
pub mod testing;
pub mod types;

pub use input::ValidationError;
pub use input::from_str;
pub use redundancy::rods_to_cut;
pub use types::MultiGraph;
pub use types::VertexId;
