//! # Categories
//!
//! Category CRUD plus the two hierarchy views the admin console shows.
//!
//! ## Deleting
//! ```text
//! before                      delete_category(1)        after
//! ──────                      ──────────────────        ─────
//! 1 Electric Tools            removes 1 and every       3 Cordless Drills
//! └── 2 Drills                category whose parent      (parent 2, now
//!     └── 3 Cordless Drills   is exactly 1                dangling)
//! ```
//!
//! Only direct children go with the deleted category. Grandchildren are
//! kept with a parent id that no longer resolves, and drop out of the
//! hierarchy views (see [`toolshop_core::hierarchy::unreachable`]).

use toolshop_core::hierarchy::{self, Depthed, TreeNode};
use toolshop_core::validation::{slugify, validate_category_name, validate_slug};
use toolshop_core::{Category, CategoryDraft, CategoryId, CoreError, CoreResult};
use tracing::debug;

use super::Store;

impl Store {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Depth-annotated list for the indented admin table.
    pub fn category_list(&self) -> Vec<Depthed<Category>> {
        hierarchy::flatten(&self.categories)
    }

    pub fn category_tree(&self) -> Vec<TreeNode<Category>> {
        hierarchy::build_tree(&self.categories)
    }

    /// Categories with a dangling parent or on a parent cycle.
    pub fn orphaned_categories(&self) -> Vec<&Category> {
        hierarchy::unreachable(&self.categories)
    }

    /// Validates name and slug (deriving the slug when blank) and checks
    /// that the parent, if any, exists.
    fn normalize_category(
        &self,
        name: &str,
        slug: &str,
        parent_id: Option<CategoryId>,
    ) -> CoreResult<(String, String)> {
        validate_category_name(name)?;
        let name = name.trim().to_string();

        let slug = match slug.trim() {
            "" => slugify(&name),
            given => given.to_string(),
        };
        validate_slug(&slug)?;

        if let Some(parent) = parent_id {
            if self.category(parent).is_none() {
                return Err(CoreError::CategoryNotFound(parent));
            }
        }

        Ok((name, slug))
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> CoreResult<Category> {
        self.require_admin("Adding categories")?;
        let (name, slug) = self.normalize_category(&draft.name, &draft.slug, draft.parent_id)?;

        let category = Category {
            id: self.next_id(),
            name,
            slug,
            parent_id: draft.parent_id,
        };
        debug!(
            id = category.id,
            slug = %category.slug,
            parent_id = ?category.parent_id,
            "Adding category"
        );
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Replaces a category. Re-parenting is refused when the new parent is
    /// the category itself or one of its descendants.
    pub fn update_category(&mut self, category: Category) -> CoreResult<Category> {
        self.require_admin("Updating categories")?;
        if self.category(category.id).is_none() {
            return Err(CoreError::CategoryNotFound(category.id));
        }
        let (name, slug) =
            self.normalize_category(&category.name, &category.slug, category.parent_id)?;

        if let Some(parent_id) = category.parent_id {
            if hierarchy::would_create_cycle(&self.categories, category.id, Some(parent_id)) {
                return Err(CoreError::HierarchyCycle {
                    id: category.id,
                    parent_id,
                });
            }
        }

        let updated = Category {
            name,
            slug,
            ..category
        };
        if let Some(slot) = self.categories.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated.clone();
        }
        debug!(id = updated.id, parent_id = ?updated.parent_id, "Updated category");
        Ok(updated)
    }

    /// Deletes a category and its direct children. Returns how many
    /// categories were removed.
    pub fn delete_category(&mut self, id: CategoryId) -> CoreResult<usize> {
        self.require_admin("Deleting categories")?;
        if self.category(id).is_none() {
            return Err(CoreError::CategoryNotFound(id));
        }

        let before = self.categories.len();
        self.categories.retain(|c| c.id != id && c.parent_id != Some(id));
        let removed = before - self.categories.len();

        debug!(id = id, removed = removed, "Deleted category");
        Ok(removed)
    }
}
