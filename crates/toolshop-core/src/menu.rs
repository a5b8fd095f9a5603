//! # Menu Working Copy
//!
//! The admin menu editor works on a private copy of one menu's items and
//! only touches the store when the copy is saved.
//!
//! ## Editing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   store.menu_items ──load()──► MenuWorkingCopy ──save()──► store       │
//! │                                    │      ▲                             │
//! │                                    ▼      │                             │
//! │              add_item · move_up · move_down · indent · outdent · remove │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Working Order
//! The copy keeps its items in a list; list position is the sibling order
//! while editing. What the editor displays is the flattened hierarchy of that
//! list (see [`crate::hierarchy::flatten`]).
//!
//! `move_up` / `move_down` swap the item with its neighbour in the working
//! list, repeating until the displayed order changes. Parent pointers are not
//! touched, so a root below a parent's subtree steps over the whole subtree in
//! one move, and a first child cannot rise above its own parent. A move that
//! reaches the end of the list without changing the display leaves the copy
//! as it was and reports `false`.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::hierarchy::{self, Depthed, TreeNode};
use crate::types::{MenuId, MenuItem, MenuItemDraft, MenuItemId};
use crate::validation::validate_menu_item_draft;

/// Items of one menu in committed order (by `order`, stable).
pub fn items_in_order(items: &[MenuItem], menu_id: MenuId) -> Vec<MenuItem> {
    let mut selected: Vec<MenuItem> = items
        .iter()
        .filter(|i| i.menu_id == menu_id)
        .cloned()
        .collect();
    selected.sort_by_key(|i| i.order);
    selected
}

/// Nested tree of one menu, for rendering header/footer navigation.
pub fn menu_tree(items: &[MenuItem], menu_id: MenuId) -> Vec<TreeNode<MenuItem>> {
    hierarchy::build_tree(&items_in_order(items, menu_id))
}

/// An unsaved edit buffer for one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuWorkingCopy {
    menu_id: MenuId,
    items: Vec<MenuItem>,
}

impl MenuWorkingCopy {
    /// Starts editing `menu_id` from the committed items.
    pub fn load(menu_id: MenuId, committed: &[MenuItem]) -> Self {
        MenuWorkingCopy {
            menu_id,
            items: items_in_order(committed, menu_id),
        }
    }

    pub fn menu_id(&self) -> MenuId {
        self.menu_id
    }

    /// Items in working order, including any whose parent was removed.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items with `order` replaced by working position, for flattening.
    fn positioned(items: &[MenuItem]) -> Vec<MenuItem> {
        items
            .iter()
            .zip(1_i64..)
            .map(|(item, position)| MenuItem {
                order: position,
                ..item.clone()
            })
            .collect()
    }

    fn display_ids(items: &[MenuItem]) -> Vec<MenuItemId> {
        hierarchy::flatten(&Self::positioned(items))
            .into_iter()
            .map(|d| d.item.id)
            .collect()
    }

    /// The depth-annotated display list.
    ///
    /// Entries carry their original `order`, not their working position.
    pub fn flattened(&self) -> Vec<Depthed<MenuItem>> {
        hierarchy::flatten(&Self::positioned(&self.items))
            .into_iter()
            .filter_map(|d| {
                let original = self.items.iter().find(|i| i.id == d.item.id)?;
                Some(Depthed {
                    item: original.clone(),
                    depth: d.depth,
                })
            })
            .collect()
    }

    fn flattened_ids(&self) -> Vec<MenuItemId> {
        Self::display_ids(&self.items)
    }

    /// Reorders the list: flattened ids first, then everything unreachable
    /// in its previous relative order.
    fn adopt_order(&mut self, ids: &[MenuItemId]) {
        let mut reordered = Vec::with_capacity(self.items.len());
        for id in ids {
            if let Some(pos) = self.items.iter().position(|i| i.id == *id) {
                reordered.push(self.items.remove(pos));
            }
        }
        reordered.append(&mut self.items);
        self.items = reordered;
    }

    fn position_in(ids: &[MenuItemId], id: MenuItemId) -> CoreResult<usize> {
        ids.iter()
            .position(|i| *i == id)
            .ok_or(CoreError::MenuItemNotFound(id))
    }

    fn item_mut(&mut self, id: MenuItemId) -> CoreResult<&mut MenuItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::MenuItemNotFound(id))
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Appends a new root item with `order = max + 1` (1 when empty).
    pub fn add_item(&mut self, id: MenuItemId, draft: MenuItemDraft) -> CoreResult<&MenuItem> {
        validate_menu_item_draft(&draft)?;

        let order = self.items.iter().map(|i| i.order).max().map_or(1, |m| m + 1);
        self.items.push(MenuItem {
            id,
            menu_id: self.menu_id,
            title: draft.title.trim().to_string(),
            kind: draft.kind,
            value: draft.value.trim().to_string(),
            parent_id: None,
            order,
        });

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Moves `id` one place up in the display.
    ///
    /// Returns `false` when nothing can move it up.
    pub fn move_up(&mut self, id: MenuItemId) -> CoreResult<bool> {
        self.shift(id, |pos, _| pos.checked_sub(1))
    }

    /// Moves `id` one place down in the display.
    ///
    /// Returns `false` when nothing can move it down.
    pub fn move_down(&mut self, id: MenuItemId) -> CoreResult<bool> {
        self.shift(id, |pos, len| Some(pos + 1).filter(|next| *next < len))
    }

    /// Swaps `id` step by step through the working list until the display
    /// changes. `step` yields the neighbouring position, or `None` at the edge.
    fn shift<F>(&mut self, id: MenuItemId, step: F) -> CoreResult<bool>
    where
        F: Fn(usize, usize) -> Option<usize>,
    {
        let mut pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(CoreError::MenuItemNotFound(id))?;

        let before = self.flattened_ids();
        let mut trial = self.items.clone();
        while let Some(next) = step(pos, trial.len()) {
            trial.swap(pos, next);
            pos = next;
            if Self::display_ids(&trial) != before {
                self.items = trial;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Makes `id` a child of the entry directly above it in the display list.
    ///
    /// Returns `false` for the first entry.
    pub fn indent(&mut self, id: MenuItemId) -> CoreResult<bool> {
        let ids = self.flattened_ids();
        let pos = Self::position_in(&ids, id)?;
        if pos == 0 {
            return Ok(false);
        }

        let new_parent = ids[pos - 1];
        if hierarchy::would_create_cycle(&self.items, id, Some(new_parent)) {
            return Err(CoreError::HierarchyCycle {
                id,
                parent_id: new_parent,
            });
        }

        self.item_mut(id)?.parent_id = Some(new_parent);
        Ok(true)
    }

    /// Promotes `id` to a root item (never to its grandparent).
    pub fn outdent(&mut self, id: MenuItemId) -> CoreResult<()> {
        self.item_mut(id)?.parent_id = None;
        Ok(())
    }

    /// Removes `id` and its direct children.
    ///
    /// Grandchildren stay in the copy with a dangling parent and drop out of
    /// the display list. Returns how many items were removed.
    pub fn remove(&mut self, id: MenuItemId) -> CoreResult<usize> {
        if !self.items.iter().any(|i| i.id == id) {
            return Err(CoreError::MenuItemNotFound(id));
        }
        let before = self.items.len();
        self.items.retain(|i| i.id != id && i.parent_id != Some(id));
        Ok(before - self.items.len())
    }

    /// Produces the committed item list: display order renumbered `1..N`,
    /// followed by unreachable items.
    pub fn save(&self) -> Vec<MenuItem> {
        let mut ordered = self.clone();
        ordered.adopt_order(&self.flattened_ids());
        ordered
            .items
            .into_iter()
            .zip(1_i64..)
            .map(|(item, order)| MenuItem { order, ..item })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
