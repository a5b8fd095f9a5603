//! # Menu Editor State
//!
//! Holds the menu working copy between `edit_menu` and `save_menu` /
//! `cancel_menu_edit`. At most one menu is edited at a time; starting a new
//! edit discards the previous uncommitted one.

use std::sync::{Arc, Mutex, PoisonError};

use toolshop_core::MenuWorkingCopy;

use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct MenuEditorState {
    copy: Arc<Mutex<Option<MenuWorkingCopy>>>,
}

impl MenuEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any edit in progress.
    pub fn begin(&self, copy: MenuWorkingCopy) {
        *self.copy.lock().unwrap_or_else(PoisonError::into_inner) = Some(copy);
    }

    /// Drops the edit in progress. Returns whether there was one.
    pub fn discard(&self) -> bool {
        self.copy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.copy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Runs `f` on the working copy, failing when no edit is in progress.
    pub fn with_copy_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut MenuWorkingCopy) -> R,
    {
        let mut guard = self.copy.lock().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_mut()
            .map(f)
            .ok_or_else(|| ApiError::business("No menu is being edited"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_edit_lifecycle() {
        let editor = MenuEditorState::new();
        assert!(!editor.is_editing());
        assert_eq!(
            editor.with_copy_mut(|c| c.menu_id()).map_err(|e| e.code),
            Err(ErrorCode::BusinessLogic)
        );

        editor.begin(MenuWorkingCopy::load(1, &[]));
        assert_eq!(editor.with_copy_mut(|c| c.menu_id()), Ok(1));

        assert!(editor.discard());
        assert!(!editor.discard());
    }
}
