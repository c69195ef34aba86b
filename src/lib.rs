//! Helper data structures for trajectory and social-network analysis: a
//! growable typed vector, a packed-triangular pairwise similarity table keyed
//! by vertex identifiers, an explicit-vivification nested mapping and a
//! goodness-of-fit helper for externally fitted curves.

pub mod error;
pub mod grow;
pub mod io;
pub mod nested;
pub mod regression;
pub mod similarity;
pub mod stats;

mod usage_tests;

pub use crate::error::{Error, Result};
pub use crate::grow::{GrowMatrix, GrowVec};
pub use crate::nested::NestedMap;
pub use crate::similarity::SimilarityTable;
pub use crate::stats::VertexDictionary;
