//! # Menus
//!
//! Committed menus. Editing happens on a [`MenuWorkingCopy`]; this module
//! hands one out and takes it back on save, replacing all of the menu's
//! items at once.

use toolshop_core::hierarchy::TreeNode;
use toolshop_core::menu::{self, MenuWorkingCopy};
use toolshop_core::{CoreError, CoreResult, Menu, MenuId, MenuItem, PageLink};
use tracing::debug;

use super::Store;

impl Store {
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.iter().find(|m| m.id == id)
    }

    fn require_menu(&self, id: MenuId) -> CoreResult<()> {
        self.menu(id).map(|_| ()).ok_or(CoreError::MenuNotFound(id))
    }

    /// Items of a menu in committed order.
    pub fn menu_items(&self, menu_id: MenuId) -> Vec<MenuItem> {
        menu::items_in_order(&self.menu_items, menu_id)
    }

    /// Nested items of a menu for header/footer rendering.
    pub fn menu_tree(&self, menu_id: MenuId) -> CoreResult<Vec<TreeNode<MenuItem>>> {
        self.require_menu(menu_id)?;
        Ok(menu::menu_tree(&self.menu_items, menu_id))
    }

    /// Pages a menu item of kind `page` may link to.
    pub fn available_pages(&self) -> &[PageLink] {
        &self.pages
    }

    /// Replaces every item of `menu_id` with `items` in one step.
    ///
    /// Items are re-homed to `menu_id` regardless of what they carried.
    pub fn update_menu_items(&mut self, menu_id: MenuId, items: Vec<MenuItem>) -> CoreResult<()> {
        self.require_admin("Editing menus")?;
        self.require_menu(menu_id)?;

        let count = items.len();
        self.menu_items.retain(|i| i.menu_id != menu_id);
        self.menu_items
            .extend(items.into_iter().map(|item| MenuItem { menu_id, ..item }));

        debug!(menu_id = menu_id, items = count, "Replaced menu items");
        Ok(())
    }

    /// Starts an edit session on a menu.
    pub fn edit_menu(&self, menu_id: MenuId) -> CoreResult<MenuWorkingCopy> {
        self.require_admin("Editing menus")?;
        self.require_menu(menu_id)?;
        Ok(MenuWorkingCopy::load(menu_id, &self.menu_items))
    }

    /// Commits a working copy: display order renumbered `1..N`.
    pub fn save_menu(&mut self, copy: &MenuWorkingCopy) -> CoreResult<Vec<MenuItem>> {
        let saved = copy.save();
        self.update_menu_items(copy.menu_id(), saved.clone())?;
        Ok(saved)
    }
}
