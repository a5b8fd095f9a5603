//! # Site Settings
//!
//! General and footer blocks are replaced whole. Shipping and payment
//! methods follow the same add / replace-by-id / delete pattern as products.

use toolshop_core::validation::{validate_method_name, validate_price};
use toolshop_core::{
    AppSettings, CoreError, CoreResult, DocumentHead, FooterSettings, GeneralSettings, MethodId,
    PaymentMethod, PaymentMethodDraft, ShippingMethod, ShippingMethodDraft,
};
use tracing::debug;

use super::Store;

impl Store {
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Title, meta description and favicon for the host page.
    pub fn document_head(&self) -> DocumentHead {
        self.settings.document_head()
    }

    /// Replaces the general block. Returns the document head it implies.
    pub fn update_general_settings(
        &mut self,
        general: GeneralSettings,
    ) -> CoreResult<DocumentHead> {
        self.require_admin("Editing settings")?;
        debug!(title = %general.title, "Updating general settings");
        self.settings.general = general;
        Ok(self.document_head())
    }

    pub fn update_footer_settings(&mut self, footer: FooterSettings) -> CoreResult<()> {
        self.require_admin("Editing settings")?;
        debug!("Updating footer settings");
        self.settings.footer = footer;
        Ok(())
    }

    // =========================================================================
    // Shipping Methods
    // =========================================================================

    pub fn add_shipping_method(
        &mut self,
        draft: ShippingMethodDraft,
    ) -> CoreResult<ShippingMethod> {
        self.require_admin("Editing shipping methods")?;
        validate_method_name(&draft.name)?;
        validate_price("cost", draft.cost)?;

        let method = ShippingMethod {
            id: self.next_id(),
            name: draft.name.trim().to_string(),
            cost: draft.cost,
        };
        debug!(id = method.id, cost = %method.cost, "Adding shipping method");
        self.settings.shipping_methods.push(method.clone());
        Ok(method)
    }

    pub fn update_shipping_method(&mut self, method: ShippingMethod) -> CoreResult<()> {
        self.require_admin("Editing shipping methods")?;
        validate_method_name(&method.name)?;
        validate_price("cost", method.cost)?;

        let slot = self
            .settings
            .shipping_methods
            .iter_mut()
            .find(|m| m.id == method.id)
            .ok_or(CoreError::ShippingMethodNotFound(method.id))?;
        debug!(id = method.id, cost = %method.cost, "Updating shipping method");
        *slot = method;
        Ok(())
    }

    pub fn delete_shipping_method(&mut self, id: MethodId) -> CoreResult<()> {
        self.require_admin("Editing shipping methods")?;
        let methods = &mut self.settings.shipping_methods;
        let before = methods.len();
        methods.retain(|m| m.id != id);
        if methods.len() == before {
            return Err(CoreError::ShippingMethodNotFound(id));
        }
        debug!(id = id, "Deleted shipping method");
        Ok(())
    }

    // =========================================================================
    // Payment Methods
    // =========================================================================

    pub fn add_payment_method(&mut self, draft: PaymentMethodDraft) -> CoreResult<PaymentMethod> {
        self.require_admin("Editing payment methods")?;
        validate_method_name(&draft.name)?;

        let method = PaymentMethod {
            id: self.next_id(),
            name: draft.name.trim().to_string(),
            description: draft.description,
        };
        debug!(id = method.id, "Adding payment method");
        self.settings.payment_methods.push(method.clone());
        Ok(method)
    }

    pub fn update_payment_method(&mut self, method: PaymentMethod) -> CoreResult<()> {
        self.require_admin("Editing payment methods")?;
        validate_method_name(&method.name)?;

        let slot = self
            .settings
            .payment_methods
            .iter_mut()
            .find(|m| m.id == method.id)
            .ok_or(CoreError::PaymentMethodNotFound(method.id))?;
        debug!(id = method.id, "Updating payment method");
        *slot = method;
        Ok(())
    }

    pub fn delete_payment_method(&mut self, id: MethodId) -> CoreResult<()> {
        self.require_admin("Editing payment methods")?;
        let methods = &mut self.settings.payment_methods;
        let before = methods.len();
        methods.retain(|m| m.id != id);
        if methods.len() == before {
            return Err(CoreError::PaymentMethodNotFound(id));
        }
        debug!(id = id, "Deleted payment method");
        Ok(())
    }
}
