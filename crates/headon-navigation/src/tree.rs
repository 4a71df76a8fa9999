//! Arena-backed search tree.
//!
//! Nodes live in a `Vec` and refer to their parent by index, so walking back
//! from a leaf never depends on floating-point key equality. Nodes are only
//! ever appended and never re-parented, which keeps the structure acyclic.

#![warn(missing_docs)]

use core::fmt;

use headon_geometry::{Point, distance};

use crate::error::NavigationError;

/// Index of a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order. The root is `0`.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point in the tree plus the index of the node it was grown from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Location of the node.
    pub point: Point,
    /// Parent node; `None` only for the root.
    pub parent: Option<NodeId>,
}

/// A rooted tree of reachable points.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a tree holding only `root`.
    pub fn with_root(root: Point) -> Self {
        Tree {
            nodes: vec![Node { point: root, parent: None }],
        }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes (not even a root).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Location of node `id`.
    pub fn point(&self, id: NodeId) -> Result<Point, NavigationError> {
        self.get(id)
            .map(|node| node.point)
            .ok_or(NavigationError::UnknownNode(id.index()))
    }

    /// Appends `point` as a child of `parent`.
    ///
    /// # Returns
    /// * `Result<NodeId, NavigationError>` - Id of the new node, or
    ///   `UnknownNode` if `parent` is not in this tree
    pub fn insert(&mut self, point: Point, parent: NodeId) -> Result<NodeId, NavigationError> {
        if parent.index() >= self.nodes.len() {
            return Err(NavigationError::UnknownNode(parent.index()));
        }
        self.nodes.push(Node { point, parent: Some(parent) });
        Ok(NodeId(self.nodes.len() - 1))
    }

    /// Finds the node closest to `target` by linear scan.
    ///
    /// Ties keep the first node found with the strictly smallest distance.
    ///
    /// # Returns
    /// * `Result<NodeId, NavigationError>` - Id of the nearest node, or `EmptyTree`
    pub fn nearest(&self, target: Point) -> Result<NodeId, NavigationError> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, node) in self.nodes.iter().enumerate() {
            let d = distance(node.point, target);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((idx, d)),
            }
        }
        best.map(|(idx, _)| NodeId(idx)).ok_or(NavigationError::EmptyTree)
    }

    /// Walks parent links from `leaf` back to the root and returns the points
    /// in root-to-leaf order.
    pub fn path_to(&self, leaf: NodeId) -> Result<Vec<Point>, NavigationError> {
        let mut path = Vec::new();
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get(id).ok_or(NavigationError::UnknownNode(id.index()))?;
            path.push(node.point);
            current = node.parent;
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_on_empty_tree() {
        let tree = Tree::default();
        assert!(tree.is_empty());
        assert_eq!(
            tree.nearest(Point::new(0.0, 0.0)),
            Err(NavigationError::EmptyTree)
        );
    }

    #[test]
    fn test_insert_and_nearest() {
        let mut tree = Tree::with_root(Point::new(0.0, 0.0));
        let root = tree.nearest(Point::new(0.0, 0.0)).unwrap();
        let a = tree.insert(Point::new(10.0, 0.0), root).unwrap();
        let b = tree.insert(Point::new(0.0, 10.0), root).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.nearest(Point::new(9.0, 1.0)).unwrap(), a);
        assert_eq!(tree.nearest(Point::new(1.0, 9.0)).unwrap(), b);
        assert_eq!(tree.nearest(Point::new(-5.0, -5.0)).unwrap(), root);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let mut tree = Tree::with_root(Point::new(-1.0, 0.0));
        let root = NodeId(0);
        tree.insert(Point::new(1.0, 0.0), root).unwrap();
        // equidistant from both nodes
        assert_eq!(tree.nearest(Point::new(0.0, 5.0)).unwrap(), root);
    }

    #[test]
    fn test_insert_unknown_parent() {
        let mut tree = Tree::with_root(Point::new(0.0, 0.0));
        assert_eq!(
            tree.insert(Point::new(1.0, 1.0), NodeId(7)),
            Err(NavigationError::UnknownNode(7))
        );
    }

    #[test]
    fn test_path_to_runs_root_to_leaf() {
        let mut tree = Tree::with_root(Point::new(0.0, 0.0));
        let a = tree.insert(Point::new(1.0, 0.0), NodeId(0)).unwrap();
        let _side = tree.insert(Point::new(0.0, 1.0), NodeId(0)).unwrap();
        let b = tree.insert(Point::new(2.0, 0.0), a).unwrap();
        let path = tree.path_to(b).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]
        );
        assert_eq!(tree.path_to(NodeId(0)).unwrap(), vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn test_duplicate_points_are_distinct_nodes() {
        // identical coordinates must not collapse into one node
        let mut tree = Tree::with_root(Point::new(0.0, 0.0));
        let a = tree.insert(Point::new(0.0, 0.0), NodeId(0)).unwrap();
        assert_eq!(a.index(), 1);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.path_to(a).unwrap().len(), 2);
    }
}
