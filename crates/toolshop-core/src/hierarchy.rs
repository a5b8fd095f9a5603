//! # Hierarchy Builder
//!
//! Turns a flat list of parent-pointer records (categories, menu items)
//! into the two shapes the UI needs.
//!
//! ```text
//! flat input                          flatten()                 build_tree()
//! ──────────                          ─────────                 ────────────
//! {1, parent: -, order 2}             1 Products     depth 0    Home
//! {2, parent: -, order 1}             2 Home ...                Products
//! {3, parent: 1, order 1}   ───►      ─────────────────         └── Electric Tools
//! {4, parent: 9, order 1}             2 Home         depth 0
//!                                     1 Products     depth 0    (4 is unreachable:
//!                                     3 Electric     depth 1     parent 9 missing)
//! ```
//!
//! ## Ordering Rules
//! - Pre-order: a parent is immediately followed by all of its descendants.
//! - Siblings are ordered by [`ParentLinked::sibling_order`] when the record
//!   has one, otherwise by input position. Sorting is stable, so equal
//!   orders keep input position.
//!
//! ## Reachability
//! Only records reachable from a root (no parent) are emitted. A record whose
//! parent id is dangling, or which sits on a parent cycle, has no path to a
//! root and is left out; [`unreachable`] lists those records. The builder
//! tracks visited ids, so malformed input can never make it loop.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::{Category, MenuItem};

// =============================================================================
// Parent-Linked Records
// =============================================================================

/// A record that points at its parent by id.
pub trait ParentLinked {
    fn node_id(&self) -> i64;

    fn parent_id(&self) -> Option<i64>;

    /// Explicit sibling position, if the record carries one.
    fn sibling_order(&self) -> Option<i64> {
        None
    }
}

impl ParentLinked for Category {
    fn node_id(&self) -> i64 {
        self.id
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }
}

impl ParentLinked for MenuItem {
    fn node_id(&self) -> i64 {
        self.id
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn sibling_order(&self) -> Option<i64> {
        Some(self.order)
    }
}

// =============================================================================
// Output Shapes
// =============================================================================

/// A record annotated with its depth (0 for roots).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Depthed<T> {
    #[serde(flatten)]
    pub item: T,
    pub depth: usize,
}

/// A record with its ordered children, for nested rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

// =============================================================================
// Builders
// =============================================================================

/// Groups records by parent id, each group in sibling order.
fn children_by_parent<T: ParentLinked>(items: &[T]) -> HashMap<Option<i64>, Vec<&T>> {
    let mut index: HashMap<Option<i64>, Vec<&T>> = HashMap::new();
    for item in items {
        index.entry(item.parent_id()).or_default().push(item);
    }
    for siblings in index.values_mut() {
        siblings.sort_by_key(|s| s.sibling_order());
    }
    index
}

/// Flattens the forest into a depth-annotated pre-order list.
///
/// ## Example
/// ```rust
/// use toolshop_core::hierarchy::flatten;
/// use toolshop_core::types::Category;
///
/// let cat = |id, parent_id| Category {
///     id,
///     name: format!("c{id}"),
///     slug: format!("c{id}"),
///     parent_id,
/// };
/// let flat = flatten(&[cat(1, None), cat(2, None), cat(3, Some(1))]);
/// let order: Vec<_> = flat.iter().map(|d| (d.item.id, d.depth)).collect();
/// assert_eq!(order, vec![(1, 0), (3, 1), (2, 0)]);
/// ```
pub fn flatten<T: ParentLinked + Clone>(items: &[T]) -> Vec<Depthed<T>> {
    let index = children_by_parent(items);
    let mut out = Vec::with_capacity(items.len());
    let mut visited = HashSet::new();

    // Explicit stack; children are pushed in reverse so they pop in order.
    let mut stack: Vec<(&T, usize)> = index
        .get(&None)
        .map(|roots| roots.iter().rev().map(|r| (*r, 0)).collect())
        .unwrap_or_default();

    while let Some((item, depth)) = stack.pop() {
        if !visited.insert(item.node_id()) {
            continue;
        }
        out.push(Depthed {
            item: item.clone(),
            depth,
        });
        if let Some(children) = index.get(&Some(item.node_id())) {
            stack.extend(children.iter().rev().map(|c| (*c, depth + 1)));
        }
    }

    out
}

/// Builds the nested tree of everything reachable from the roots.
pub fn build_tree<T: ParentLinked + Clone>(items: &[T]) -> Vec<TreeNode<T>> {
    fn grow<T: ParentLinked + Clone>(
        parent: Option<i64>,
        index: &HashMap<Option<i64>, Vec<&T>>,
        visited: &mut HashSet<i64>,
    ) -> Vec<TreeNode<T>> {
        let Some(children) = index.get(&parent) else {
            return Vec::new();
        };
        let mut nodes = Vec::with_capacity(children.len());
        for child in children {
            if !visited.insert(child.node_id()) {
                continue;
            }
            nodes.push(TreeNode {
                item: (*child).clone(),
                children: grow(Some(child.node_id()), index, visited),
            });
        }
        nodes
    }

    let index = children_by_parent(items);
    let mut visited = HashSet::new();
    grow(None, &index, &mut visited)
}

/// Records that [`flatten`] leaves out: dangling parents and parent cycles.
pub fn unreachable<T: ParentLinked + Clone>(items: &[T]) -> Vec<&T> {
    let reachable: HashSet<i64> = flatten(items).iter().map(|d| d.item.node_id()).collect();
    items
        .iter()
        .filter(|item| !reachable.contains(&item.node_id()))
        .collect()
}

// =============================================================================
// Re-parenting Checks
// =============================================================================

/// Whether giving `id` the parent `new_parent` would make `id` its own ancestor.
///
/// Walks the ancestor chain of `new_parent` using the current parent
/// pointers. A chain that ends at a root or a dangling id is fine; a chain
/// that reaches `id` is a cycle. A pre-existing cycle elsewhere in the chain
/// stops the walk.
///
/// ## Example
/// ```rust
/// use toolshop_core::hierarchy::would_create_cycle;
/// use toolshop_core::types::Category;
///
/// let cat = |id, parent_id| Category {
///     id,
///     name: String::new(),
///     slug: String::new(),
///     parent_id,
/// };
/// let items = [cat(1, None), cat(4, Some(1))];
/// assert!(would_create_cycle(&items, 1, Some(4)));
/// assert!(!would_create_cycle(&items, 4, None));
/// ```
pub fn would_create_cycle<T: ParentLinked>(items: &[T], id: i64, new_parent: Option<i64>) -> bool {
    let parents: HashMap<i64, Option<i64>> = items
        .iter()
        .map(|item| (item.node_id(), item.parent_id()))
        .collect();

    let mut seen = HashSet::new();
    let mut cursor = new_parent;
    while let Some(current) = cursor {
        if current == id {
            return true;
        }
        if !seen.insert(current) {
            return false;
        }
        cursor = parents.get(&current).copied().flatten();
    }
    false
}

/// Number of ancestor hops from `id` to its root, if `id` is reachable.
pub fn depth_of<T: ParentLinked + Clone>(items: &[T], id: i64) -> Option<usize> {
    flatten(items)
        .into_iter()
        .find(|d| d.item.node_id() == id)
        .map(|d| d.depth)
}

// =============================================================================
// Unit Tests
// =============================================================================
