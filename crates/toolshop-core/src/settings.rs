//! # Site Settings
//!
//! Site-wide settings edited from the admin console, and the document head
//! derived from them.
//!
//! ```text
//! AppSettings
//! ├── general          title, description, icon, favicon
//! ├── footer           about text, trust-seal links, copyright
//! ├── shipping_methods [{ id, name, cost }]
//! └── payment_methods  [{ id, name, description }]
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::MethodId;

/// Title, description and branding images.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeneralSettings {
    pub title: String,
    pub description: String,
    /// Site logo (URL or inline data). Empty means the built-in logo.
    pub icon: String,
    /// Browser favicon (URL or inline data). Empty means none.
    pub favicon: String,
}

/// Footer content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FooterSettings {
    pub about_us: String,
    pub enamad_link: String,
    pub samandehi_link: String,
    pub copyright_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingMethod {
    pub id: MethodId,
    pub name: String,
    pub cost: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShippingMethodDraft {
    pub name: String,
    pub cost: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentMethod {
    pub id: MethodId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentMethodDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// All admin-editable site settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub footer: FooterSettings,
    pub shipping_methods: Vec<ShippingMethod>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl AppSettings {
    /// Looks up a shipping method by id.
    pub fn shipping_method(&self, id: MethodId) -> Option<&ShippingMethod> {
        self.shipping_methods.iter().find(|m| m.id == id)
    }

    /// Looks up a payment method by id.
    pub fn payment_method(&self, id: MethodId) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.id == id)
    }

    /// The values the page title, meta description and favicon link follow.
    pub fn document_head(&self) -> DocumentHead {
        DocumentHead::from(&self.general)
    }
}

// =============================================================================
// Document Head
// =============================================================================

/// What the host page shows in `<title>`, `<meta name="description">` and
/// `<link rel="icon">`.
///
/// ## Sync Flow
/// ```text
/// update_general_settings ──► GeneralSettings ──► DocumentHead ──► page head
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DocumentHead {
    pub title: String,
    pub meta_description: String,
    pub favicon: Option<String>,
}

impl From<&GeneralSettings> for DocumentHead {
    fn from(general: &GeneralSettings) -> Self {
        let favicon = general.favicon.trim();
        DocumentHead {
            title: general.title.clone(),
            meta_description: general.description.clone(),
            favicon: (!favicon.is_empty()).then(|| favicon.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_head_follows_general_settings() {
        let mut settings = AppSettings::default();
        settings.general.title = "Online Tool Shop".to_string();
        settings.general.description = "Power and hand tools".to_string();

        let head = settings.document_head();
        assert_eq!(head.title, "Online Tool Shop");
        assert_eq!(head.meta_description, "Power and hand tools");
        assert_eq!(head.favicon, None);

        settings.general.favicon = "data:image/png;base64,AAAA".to_string();
        assert_eq!(
            settings.document_head().favicon.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_method_lookup() {
        let settings = AppSettings {
            shipping_methods: vec![ShippingMethod {
                id: 2,
                name: "Courier".to_string(),
                cost: Money::from_toman(55_000),
            }],
            ..AppSettings::default()
        };
        assert_eq!(settings.shipping_method(2).map(|m| m.cost.toman()), Some(55_000));
        assert!(settings.shipping_method(9).is_none());
        assert!(settings.payment_method(1).is_none());
    }
}
