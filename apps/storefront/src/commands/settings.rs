//! # Settings Commands
//!
//! Site settings, shipping and payment methods, and the document head the
//! host page mirrors into `<title>`, the meta description and the favicon.

use serde::Deserialize;
use toolshop_core::{
    AppSettings, CoreResult, DocumentHead, FooterSettings, GeneralSettings, MethodId, PaymentMethod,
    PaymentMethodDraft, ShippingMethod, ShippingMethodDraft,
};

use crate::error::ApiError;
use crate::state::StoreState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralArgs {
    pub general: GeneralSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterArgs {
    pub footer: FooterSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDraftArgs {
    pub method: ShippingMethodDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingArgs {
    pub method: ShippingMethod,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraftArgs {
    pub method: PaymentMethodDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentArgs {
    pub method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodIdArgs {
    pub id: MethodId,
}

pub fn get_settings(state: &StoreState) -> Result<AppSettings, ApiError> {
    Ok(state.with_store(|s| s.settings().clone()))
}

pub fn get_document_head(state: &StoreState) -> Result<DocumentHead, ApiError> {
    Ok(state.with_store(|s| s.document_head()))
}

/// Returns the new document head so the host can apply it right away.
pub fn update_general_settings(
    state: &StoreState,
    args: GeneralArgs,
) -> Result<DocumentHead, ApiError> {
    Ok(state.with_store_mut(|s| s.update_general_settings(args.general))?)
}

pub fn update_footer_settings(
    state: &StoreState,
    args: FooterArgs,
) -> Result<AppSettings, ApiError> {
    let settings = state.with_store_mut(|s| -> CoreResult<AppSettings> {
        s.update_footer_settings(args.footer)?;
        Ok(s.settings().clone())
    })?;
    Ok(settings)
}

pub fn add_shipping_method(
    state: &StoreState,
    args: ShippingDraftArgs,
) -> Result<ShippingMethod, ApiError> {
    Ok(state.with_store_mut(|s| s.add_shipping_method(args.method))?)
}

pub fn update_shipping_method(
    state: &StoreState,
    args: ShippingArgs,
) -> Result<ShippingMethod, ApiError> {
    let method = args.method;
    state.with_store_mut(|s| s.update_shipping_method(method.clone()))?;
    Ok(method)
}

pub fn delete_shipping_method(state: &StoreState, args: MethodIdArgs) -> Result<(), ApiError> {
    Ok(state.with_store_mut(|s| s.delete_shipping_method(args.id))?)
}

pub fn add_payment_method(
    state: &StoreState,
    args: PaymentDraftArgs,
) -> Result<PaymentMethod, ApiError> {
    Ok(state.with_store_mut(|s| s.add_payment_method(args.method))?)
}

pub fn update_payment_method(
    state: &StoreState,
    args: PaymentArgs,
) -> Result<PaymentMethod, ApiError> {
    let method = args.method;
    state.with_store_mut(|s| s.update_payment_method(method.clone()))?;
    Ok(method)
}

pub fn delete_payment_method(state: &StoreState, args: MethodIdArgs) -> Result<(), ApiError> {
    Ok(state.with_store_mut(|s| s.delete_payment_method(args.id))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use toolshop_core::{Money, ADMIN_PASSWORD, ADMIN_USERNAME};

    fn admin_state() -> StoreState {
        let state = StoreState::default();
        state
            .with_store_mut(|s| s.admin_login(ADMIN_USERNAME, ADMIN_PASSWORD))
            .unwrap();
        state
    }

    #[test]
    fn test_general_settings_return_document_head() {
        let state = admin_state();
        let mut general = get_settings(&state).unwrap().general;
        general.title = "Tool Depot".to_string();

        let head = update_general_settings(&state, GeneralArgs { general }).unwrap();
        assert_eq!(head.title, "Tool Depot");
        assert_eq!(get_document_head(&state).unwrap(), head);
    }

    #[test]
    fn test_shipping_methods() {
        let state = admin_state();
        let added = add_shipping_method(
            &state,
            ShippingDraftArgs {
                method: ShippingMethodDraft {
                    name: "Same Day".to_string(),
                    cost: Money::from_toman(90_000),
                },
            },
        )
        .unwrap();
        assert_eq!(get_settings(&state).unwrap().shipping_methods.len(), 4);

        delete_shipping_method(&state, MethodIdArgs { id: added.id }).unwrap();
        let err = delete_shipping_method(&state, MethodIdArgs { id: added.id }).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_settings_edit_requires_admin() {
        let state = StoreState::default();
        let err = update_footer_settings(
            &state,
            FooterArgs {
                footer: FooterSettings::default(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(get_settings(&state).unwrap().payment_methods.len(), 2);
    }
}
