//! # Menu Commands
//!
//! Committed menus for rendering, and the menu editor.
//!
//! ## Editor Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  edit_menu(menuId) ──► working copy held in MenuEditorState             │
//! │       │                                                                 │
//! │       ├── menu_add_item / menu_remove                                   │
//! │       ├── menu_move_up / menu_move_down                                 │
//! │       ├── menu_indent / menu_outdent                                    │
//! │       │        (each returns the flattened, depth-annotated list)       │
//! │       │                                                                 │
//! │       ├── save_menu ────────► store.save_menu, order renumbered 1..N    │
//! │       └── cancel_menu_edit ─► working copy dropped, store untouched     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use toolshop_core::{
    Depthed, Menu, MenuId, MenuItem, MenuItemDraft, MenuItemId, MenuWorkingCopy, PageLink,
    TreeNode,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{MenuEditorState, StoreState};

/// The working copy as the editor renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorResponse {
    pub menu_id: MenuId,
    pub items: Vec<Depthed<MenuItem>>,
    /// Whether the last operation changed anything.
    pub changed: bool,
}

impl EditorResponse {
    fn of(copy: &MenuWorkingCopy, changed: bool) -> Self {
        EditorResponse {
            menu_id: copy.menu_id(),
            items: copy.flattened(),
            changed,
        }
    }
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuIdArgs {
    pub menu_id: MenuId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemIdArgs {
    pub id: MenuItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMenuItemArgs {
    pub item: MenuItemDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceMenuItemsArgs {
    pub menu_id: MenuId,
    pub items: Vec<MenuItem>,
}

// =============================================================================
// Committed Menus
// =============================================================================

pub fn get_menus(state: &StoreState) -> Result<Vec<Menu>, ApiError> {
    Ok(state.with_store(|s| s.menus().to_vec()))
}

pub fn get_menu_items(state: &StoreState, args: MenuIdArgs) -> Result<Vec<MenuItem>, ApiError> {
    Ok(state.with_store(|s| s.menu_items(args.menu_id)))
}

/// Nested items for header and footer navigation.
pub fn get_menu_tree(
    state: &StoreState,
    args: MenuIdArgs,
) -> Result<Vec<TreeNode<MenuItem>>, ApiError> {
    Ok(state.with_store(|s| s.menu_tree(args.menu_id))?)
}

pub fn get_available_pages(state: &StoreState) -> Result<Vec<PageLink>, ApiError> {
    Ok(state.with_store(|s| s.available_pages().to_vec()))
}

/// Replaces a menu's items in one step, bypassing the editor.
pub fn update_menu_items(
    state: &StoreState,
    args: ReplaceMenuItemsArgs,
) -> Result<Vec<MenuItem>, ApiError> {
    state.with_store_mut(|s| {
        s.update_menu_items(args.menu_id, args.items)?;
        Ok(s.menu_items(args.menu_id))
    })
}

// =============================================================================
// Editor
// =============================================================================

/// Opens a working copy of a menu. Any unsaved edit is discarded.
pub fn edit_menu(
    state: &StoreState,
    editor: &MenuEditorState,
    args: MenuIdArgs,
) -> Result<EditorResponse, ApiError> {
    let copy = state.with_store(|s| s.edit_menu(args.menu_id))?;
    if editor.is_editing() {
        debug!("Discarding unsaved menu edit");
    }
    let response = EditorResponse::of(&copy, false);
    editor.begin(copy);
    Ok(response)
}

pub fn menu_add_item(
    state: &StoreState,
    editor: &MenuEditorState,
    args: AddMenuItemArgs,
) -> Result<EditorResponse, ApiError> {
    state.with_store_mut(|s| {
        let id = s.next_id();
        editor.with_copy_mut(|copy| -> Result<EditorResponse, ApiError> {
            copy.add_item(id, args.item)?;
            Ok(EditorResponse::of(copy, true))
        })?
    })
}

pub fn menu_move_up(
    editor: &MenuEditorState,
    args: MenuItemIdArgs,
) -> Result<EditorResponse, ApiError> {
    editor.with_copy_mut(|copy| -> Result<EditorResponse, ApiError> {
        let changed = copy.move_up(args.id)?;
        Ok(EditorResponse::of(copy, changed))
    })?
}

pub fn menu_move_down(
    editor: &MenuEditorState,
    args: MenuItemIdArgs,
) -> Result<EditorResponse, ApiError> {
    editor.with_copy_mut(|copy| -> Result<EditorResponse, ApiError> {
        let changed = copy.move_down(args.id)?;
        Ok(EditorResponse::of(copy, changed))
    })?
}

/// Nests an item under the entry displayed above it.
pub fn menu_indent(
    editor: &MenuEditorState,
    args: MenuItemIdArgs,
) -> Result<EditorResponse, ApiError> {
    editor.with_copy_mut(|copy| -> Result<EditorResponse, ApiError> {
        let changed = copy.indent(args.id)?;
        Ok(EditorResponse::of(copy, changed))
    })?
}

/// Moves an item to the top level.
pub fn menu_outdent(
    editor: &MenuEditorState,
    args: MenuItemIdArgs,
) -> Result<EditorResponse, ApiError> {
    editor.with_copy_mut(|copy| -> Result<EditorResponse, ApiError> {
        copy.outdent(args.id)?;
        Ok(EditorResponse::of(copy, true))
    })?
}

/// Removes an item and its direct children.
pub fn menu_remove(
    editor: &MenuEditorState,
    args: MenuItemIdArgs,
) -> Result<EditorResponse, ApiError> {
    editor.with_copy_mut(|copy| -> Result<EditorResponse, ApiError> {
        let removed = copy.remove(args.id)?;
        Ok(EditorResponse::of(copy, removed > 0))
    })?
}

/// Commits the working copy and closes the editor.
pub fn save_menu(state: &StoreState, editor: &MenuEditorState) -> Result<Vec<MenuItem>, ApiError> {
    let saved = state.with_store_mut(|s| editor.with_copy_mut(|copy| s.save_menu(copy)))??;
    editor.discard();
    info!(items = saved.len(), "Menu saved");
    Ok(saved)
}

pub fn cancel_menu_edit(editor: &MenuEditorState) -> Result<bool, ApiError> {
    Ok(editor.discard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use toolshop_core::{MenuItemKind, ADMIN_PASSWORD, ADMIN_USERNAME};

    fn admin_state() -> (StoreState, MenuEditorState) {
        let state = StoreState::default();
        state
            .with_store_mut(|s| s.admin_login(ADMIN_USERNAME, ADMIN_PASSWORD))
            .unwrap();
        (state, MenuEditorState::new())
    }

    fn titles(response: &EditorResponse) -> Vec<(String, usize)> {
        response
            .items
            .iter()
            .map(|d| (d.item.title.clone(), d.depth))
            .collect()
    }

    #[test]
    fn test_editor_requires_open_session() {
        let (_, editor) = admin_state();
        let err = menu_move_up(&editor, MenuItemIdArgs { id: 1 }).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_edit_requires_admin() {
        let state = StoreState::default();
        let editor = MenuEditorState::new();
        let err = edit_menu(&state, &editor, MenuIdArgs { menu_id: 1 }).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_edit_and_save() {
        let (state, editor) = admin_state();
        let opened = edit_menu(&state, &editor, MenuIdArgs { menu_id: 1 }).unwrap();
        assert_eq!(
            titles(&opened),
            vec![
                ("Home".to_string(), 0),
                ("Products".to_string(), 0),
                ("Electric Tools".to_string(), 1),
                ("Price List".to_string(), 0),
            ]
        );

        // Price List nests under the entry above it, Electric Tools.
        let indented = menu_indent(&editor, MenuItemIdArgs { id: 4 }).unwrap();
        assert!(indented.changed);
        assert_eq!(indented.items[3].depth, 2);

        let unchanged = menu_move_up(&editor, MenuItemIdArgs { id: 1 }).unwrap();
        assert!(!unchanged.changed);

        let added = menu_add_item(
            &state,
            &editor,
            AddMenuItemArgs {
                item: MenuItemDraft {
                    title: "Cart".to_string(),
                    kind: MenuItemKind::Page,
                    value: "cart".to_string(),
                },
            },
        )
        .unwrap();
        assert_eq!(added.items.len(), 5);

        // Nothing is committed yet.
        assert_eq!(get_menu_items(&state, MenuIdArgs { menu_id: 1 }).unwrap().len(), 4);

        let saved = save_menu(&state, &editor).unwrap();
        assert_eq!(
            saved.iter().map(|i| i.order).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert!(!editor.is_editing());

        let tree = get_menu_tree(&state, MenuIdArgs { menu_id: 1 }).unwrap();
        assert_eq!(tree[1].children[0].children[0].item.id, 4);
    }

    #[test]
    fn test_move_reports_whether_display_changed() {
        let (state, editor) = admin_state();
        edit_menu(&state, &editor, MenuIdArgs { menu_id: 1 }).unwrap();

        // Price List passes the whole Products subtree in one move.
        let moved = menu_move_up(&editor, MenuItemIdArgs { id: 4 }).unwrap();
        assert!(moved.changed);
        assert_eq!(
            titles(&moved),
            vec![
                ("Home".to_string(), 0),
                ("Price List".to_string(), 0),
                ("Products".to_string(), 0),
                ("Electric Tools".to_string(), 1),
            ]
        );

        // A first child cannot rise above its own parent.
        let stuck = menu_move_up(&editor, MenuItemIdArgs { id: 3 }).unwrap();
        assert!(!stuck.changed);
        assert_eq!(stuck.items, moved.items);
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let (state, editor) = admin_state();
        edit_menu(&state, &editor, MenuIdArgs { menu_id: 1 }).unwrap();
        let removed = menu_remove(&editor, MenuItemIdArgs { id: 2 }).unwrap();
        assert_eq!(removed.items.len(), 2);

        assert!(cancel_menu_edit(&editor).unwrap());
        assert_eq!(get_menu_items(&state, MenuIdArgs { menu_id: 1 }).unwrap().len(), 4);
        assert_eq!(
            save_menu(&state, &editor).unwrap_err().code,
            ErrorCode::BusinessLogic
        );
    }
}
