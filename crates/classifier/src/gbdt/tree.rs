//! Decision trees with fixed-point splits.
//!
//! Thresholds and leaf values are integers at the owning model's scale.

use serde::{Deserialize, Serialize};

/// A decision tree node (internal or leaf)
///
/// Internal nodes carry `feature_idx >= 0` and child indices into the owning
/// tree's node list. Leaves carry `feature_idx == -1` and a `leaf` value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Node {
    /// Node ID (informational; traversal uses positions)
    pub id: i32,

    /// Left child index (-1 for leaves)
    pub left: i32,

    /// Right child index (-1 for leaves)
    pub right: i32,

    /// Feature index to split on (-1 for leaves)
    #[serde(rename = "feature_idx", alias = "feature")]
    pub feature_idx: i32,

    /// Split threshold (fixed-point)
    pub threshold: i64,

    /// Leaf margin (fixed-point)
    pub leaf: Option<i64>,
}

impl Node {
    pub fn internal(id: i32, feature_idx: i32, threshold: i64, left: i32, right: i32) -> Self {
        Self {
            id,
            left,
            right,
            feature_idx,
            threshold,
            leaf: None,
        }
    }

    pub fn leaf(id: i32, value: i64) -> Self {
        Self {
            id,
            left: -1,
            right: -1,
            feature_idx: -1,
            threshold: 0,
            leaf: Some(value),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.feature_idx == -1 || self.leaf.is_some()
    }
}

/// One boosted tree, contributing to the margin of a single class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tree {
    /// Tree nodes (node 0 is the root)
    pub nodes: Vec<Node>,

    /// Weight applied to the leaf value (fixed-point)
    pub weight: i64,

    /// Class whose margin this tree adds to
    #[serde(default)]
    pub class: u32,
}

impl Tree {
    pub fn new(nodes: Vec<Node>, weight: i64) -> Self {
        Self::for_class(nodes, weight, 0)
    }

    pub fn for_class(nodes: Vec<Node>, weight: i64, class: u32) -> Self {
        Self {
            nodes,
            weight,
            class,
        }
    }

    /// Walk from the root to a leaf and return its value.
    ///
    /// Goes left when `feature <= threshold`. Malformed structure (bad child
    /// or feature index) evaluates to 0.
    pub fn evaluate(&self, features: &[i64]) -> i64 {
        let mut idx = 0usize;

        // A well-formed tree reaches a leaf in at most `nodes.len()` steps.
        for _ in 0..=self.nodes.len() {
            let Some(node) = self.nodes.get(idx) else {
                return 0;
            };

            if node.is_leaf() {
                return node.leaf.unwrap_or(0);
            }

            let Some(&value) = usize::try_from(node.feature_idx)
                .ok()
                .and_then(|f| features.get(f))
            else {
                return 0;
            };

            let next = if value <= node.threshold {
                node.left
            } else {
                node.right
            };
            idx = match usize::try_from(next) {
                Ok(i) => i,
                Err(_) => return 0,
            };
        }

        0
    }

    /// Validate tree structure
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("Tree has no nodes".to_string());
        }

        let len = self.nodes.len() as i32;
        for (i, node) in self.nodes.iter().enumerate() {
            if node.is_leaf() {
                if node.leaf.is_none() {
                    return Err(format!("Leaf node {i} has no leaf value"));
                }
                continue;
            }
            if node.left < 0 || node.left >= len {
                return Err(format!("Node {} has invalid left child: {}", i, node.left));
            }
            if node.right < 0 || node.right >= len {
                return Err(format!("Node {} has invalid right child: {}", i, node.right));
            }
            if node.feature_idx < 0 {
                return Err(format!(
                    "Internal node {} has invalid feature index: {}",
                    i, node.feature_idx
                ));
            }
        }

        Ok(())
    }

    /// Largest feature index referenced by any split, if the tree has splits
    pub fn max_feature_idx(&self) -> Option<usize> {
        self.nodes
            .iter()
            .filter(|n| !n.is_leaf())
            .filter_map(|n| usize::try_from(n.feature_idx).ok())
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // IgA (feature 4) <= 2.5 g/L at 1e6 scale
    fn iga_stump() -> Tree {
        Tree::for_class(
            vec![
                Node::internal(0, 4, 2_500_000, 1, 2),
                Node::leaf(1, -300_000),
                Node::leaf(2, 700_000),
            ],
            1_000_000,
            2,
        )
    }

    #[test]
    fn node_kinds() {
        let split = Node::internal(0, 3, 12345, 1, 2);
        assert!(!split.is_leaf());
        let leaf = Node::leaf(1, -234);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.leaf, Some(-234));
    }

    #[test]
    fn threshold_ties_go_left() {
        let tree = iga_stump();
        let below = [0, 0, 0, 0, 1_000_000, 0];
        let equal = [0, 0, 0, 0, 2_500_000, 0];
        let above = [0, 0, 0, 0, 2_500_001, 0];
        assert_eq!(tree.evaluate(&below), -300_000);
        assert_eq!(tree.evaluate(&equal), -300_000);
        assert_eq!(tree.evaluate(&above), 700_000);
    }

    #[test]
    fn missing_feature_evaluates_to_zero() {
        assert_eq!(iga_stump().evaluate(&[0, 0]), 0);
    }

    #[test]
    fn cycles_terminate() {
        let looping = Tree::new(vec![Node::internal(0, 0, 10, 0, 0)], 1_000_000);
        assert_eq!(looping.evaluate(&[5]), 0);
    }

    #[test]
    fn validation_rejects_bad_children() {
        assert!(iga_stump().validate().is_ok());

        let broken = Tree::new(
            vec![
                Node::internal(0, 0, 50, 5, 2),
                Node::leaf(1, 100),
                Node::leaf(2, 200),
            ],
            1_000_000,
        );
        assert!(broken.validate().is_err());
        assert!(Tree::new(vec![], 1_000_000).validate().is_err());
    }

    #[test]
    fn class_defaults_to_zero_when_absent() {
        let json = concat!(
            r#"{"nodes":[{"id":0,"left":-1,"right":-1,"feature":-1,"threshold":0,"leaf":5}],"#,
            r#""weight":1000000}"#
        );
        let tree: Tree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.class, 0);
        assert_eq!(tree.max_feature_idx(), None);
        assert_eq!(iga_stump().max_feature_idx(), Some(4));
    }
}
