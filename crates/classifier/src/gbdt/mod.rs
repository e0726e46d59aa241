//! Integer-only gradient boosted decision tree classifier
//!
//! # Model Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "scale": 1000000,
//!   "num_class": 3,
//!   "num_features": 6,
//!   "trees": [
//!     {
//!       "class": 0,
//!       "weight": 1000000,
//!       "nodes": [
//!         {"id":0,"left":1,"right":2,"feature_idx":4,"threshold":5000000,"leaf":null},
//!         {"id":1,"left":-1,"right":-1,"feature_idx":-1,"threshold":0,"leaf":800000},
//!         {"id":2,"left":-1,"right":-1,"feature_idx":-1,"threshold":0,"leaf":-400000}
//!       ]
//!     }
//!   ],
//!   "bias": 0,
//!   "post_scale": 1000000
//! }
//! ```
//!
//! Thresholds, leaves and weights are integers at `scale`. Features are
//! converted to the same scale before traversal, and a split goes left when
//! `feature <= threshold`.

pub mod model;
pub mod tree;

pub use model::{Model, FORMAT_VERSION, MAX_SCALE, SCALE};
pub use tree::{Node, Tree};
