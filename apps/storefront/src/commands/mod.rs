//! # Commands Module
//!
//! All commands exposed to the storefront and admin UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (dispatcher, wire format)
//! ├── catalog.rs   ◄─── Product grid, search, browsing
//! ├── cart.rs      ◄─── Cart manipulation, checkout
//! ├── session.rs   ◄─── Login, logout, price tier, customer dashboard
//! ├── admin.rs     ◄─── Products, categories, orders, admin dashboard
//! ├── menus.rs     ◄─── Menu rendering and the menu editor
//! └── settings.rs  ◄─── Site settings, shipping/payment methods
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Host UI writes one line:                                               │
//! │  {"id":7,"command":"add_to_cart","args":{"productId":5,"quantity":2}}   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  handle_line ──► invoke(app, "add_to_cart", args)                       │
//! │                       │                                                 │
//! │                       ├── args deserialised into AddToCartArgs          │
//! │                       ├── cart::add_to_cart(&app.store, args)           │
//! │                       └── result serialised                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Host UI reads one line:                                                │
//! │  {"id":7,"ok":true,"data":{"lines":[...],"total":700000,...}}           │
//! │  {"id":7,"ok":false,"error":{"code":"NOT_FOUND","message":"..."}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! fn get_cart(state: &StoreState)
//!
//! // Only needs the editor
//! fn menu_indent(editor: &MenuEditorState, args: MenuItemIdArgs)
//!
//! // Needs both
//! fn save_menu(state: &StoreState, editor: &MenuEditorState)
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod menus;
pub mod session;
pub mod settings;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Wire Format
// =============================================================================

/// One command invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Echoed back so the caller can match responses.
    #[serde(default)]
    pub id: Option<Value>,
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

/// One command result.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    fn from_result(id: Option<Value>, result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response {
                id,
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Response {
                id,
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Parses and runs one JSON line. Never fails; errors become responses.
pub fn handle_line(app: &AppState, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            let result = invoke(app, &request.command, request.args);
            if let Err(e) = &result {
                debug!(command = %request.command, code = ?e.code, "Command failed");
            }
            Response::from_result(request.id, result)
        }
        Err(e) => {
            warn!(error = %e, "Malformed request line");
            let error = ApiError::validation(format!("Malformed request: {}", e));
            Response::from_result(None, Err(error))
        }
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Deserialises command arguments. `null` counts as "no arguments".
fn parse<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(args)?)
}

fn reply<T: Serialize>(result: Result<T, ApiError>) -> Result<Value, ApiError> {
    serde_json::to_value(result?).map_err(|e| ApiError::internal(e.to_string()))
}

/// Runs a named command against the application state.
pub fn invoke(app: &AppState, command: &str, args: Value) -> Result<Value, ApiError> {
    debug!(command = %command, "invoke");
    let store = &app.store;
    let editor = &app.menu_editor;

    match command {
        // Catalog
        "get_products" => reply(catalog::get_products(store)),
        "search_products" => reply(catalog::search_products(store, parse(args)?)),
        "quick_search" => reply(catalog::quick_search(store, parse(args)?)),
        "get_product" => reply(catalog::get_product(store, parse(args)?)),
        "view_product" => reply(catalog::view_product(store, parse(args)?)),
        "get_product_categories" => reply(catalog::get_product_categories(store)),
        "get_home_sections" => reply(catalog::get_home_sections(store)),
        "get_browsing" => reply(catalog::get_browsing(store)),
        "set_category_filter" => reply(catalog::set_category_filter(store, parse(args)?)),

        // Cart
        "get_cart" => reply(cart::get_cart(store)),
        "add_to_cart" => reply(cart::add_to_cart(store, parse(args)?)),
        "update_cart_quantity" => reply(cart::update_cart_quantity(store, parse(args)?)),
        "remove_from_cart" => reply(cart::remove_from_cart(store, parse(args)?)),
        "clear_cart" => reply(cart::clear_cart(store)),
        "place_order" => reply(cart::place_order(store, &app.config, parse(args)?)),

        // Session
        "get_session" => reply(session::get_session(store)),
        "login" => reply(session::login(store, parse(args)?)),
        "admin_login" => reply(session::admin_login(store, parse(args)?)),
        "logout" => reply(session::logout(store)),
        "set_price_tier" => reply(session::set_price_tier(store, parse(args)?)),
        "get_customer_dashboard" => reply(session::get_customer_dashboard(store)),

        // Admin
        "get_admin_stats" => reply(admin::get_admin_stats(store)),
        "get_orders" => reply(admin::get_orders(store)),
        "update_order_status" => reply(admin::update_order_status(store, parse(args)?)),
        "add_product" => reply(admin::add_product(store, parse(args)?)),
        "update_product" => reply(admin::update_product(store, parse(args)?)),
        "delete_product" => reply(admin::delete_product(store, parse(args)?)),
        "get_category_list" => reply(admin::get_category_list(store)),
        "get_category_tree" => reply(admin::get_category_tree(store)),
        "get_orphaned_categories" => reply(admin::get_orphaned_categories(store)),
        "add_category" => reply(admin::add_category(store, parse(args)?)),
        "update_category" => reply(admin::update_category(store, parse(args)?)),
        "delete_category" => reply(admin::delete_category(store, parse(args)?)),

        // Menus
        "get_menus" => reply(menus::get_menus(store)),
        "get_menu_items" => reply(menus::get_menu_items(store, parse(args)?)),
        "get_menu_tree" => reply(menus::get_menu_tree(store, parse(args)?)),
        "get_available_pages" => reply(menus::get_available_pages(store)),
        "update_menu_items" => reply(menus::update_menu_items(store, parse(args)?)),
        "edit_menu" => reply(menus::edit_menu(store, editor, parse(args)?)),
        "menu_add_item" => reply(menus::menu_add_item(store, editor, parse(args)?)),
        "menu_move_up" => reply(menus::menu_move_up(editor, parse(args)?)),
        "menu_move_down" => reply(menus::menu_move_down(editor, parse(args)?)),
        "menu_indent" => reply(menus::menu_indent(editor, parse(args)?)),
        "menu_outdent" => reply(menus::menu_outdent(editor, parse(args)?)),
        "menu_remove" => reply(menus::menu_remove(editor, parse(args)?)),
        "save_menu" => reply(menus::save_menu(store, editor)),
        "cancel_menu_edit" => reply(menus::cancel_menu_edit(editor)),

        // Settings
        "get_settings" => reply(settings::get_settings(store)),
        "get_document_head" => reply(settings::get_document_head(store)),
        "update_general_settings" => reply(settings::update_general_settings(store, parse(args)?)),
        "update_footer_settings" => reply(settings::update_footer_settings(store, parse(args)?)),
        "add_shipping_method" => reply(settings::add_shipping_method(store, parse(args)?)),
        "update_shipping_method" => reply(settings::update_shipping_method(store, parse(args)?)),
        "delete_shipping_method" => reply(settings::delete_shipping_method(store, parse(args)?)),
        "add_payment_method" => reply(settings::add_payment_method(store, parse(args)?)),
        "update_payment_method" => reply(settings::update_payment_method(store, parse(args)?)),
        "delete_payment_method" => reply(settings::delete_payment_method(store, parse(args)?)),

        // Host
        "get_config" => reply(Ok(&app.config)),

        other => Err(ApiError::unknown_command(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_invoke_round_trip() {
        let app = AppState::default();
        let cart = invoke(&app, "add_to_cart", json!({ "productId": 5, "quantity": 2 })).unwrap();
        assert_eq!(cart["total"], 700_000);
        assert_eq!(cart["itemCount"], 1);

        let cart = invoke(&app, "get_cart", Value::Null).unwrap();
        assert_eq!(cart["lines"][0]["product"]["sku"], "IP-10");
    }

    #[test]
    fn test_invoke_errors() {
        let app = AppState::default();
        assert_eq!(
            invoke(&app, "launch_rocket", Value::Null).unwrap_err().code,
            ErrorCode::UnknownCommand
        );
        assert_eq!(
            invoke(&app, "add_to_cart", json!({ "quantity": 2 }))
                .unwrap_err()
                .code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            invoke(&app, "edit_menu", json!({ "menuId": 1 }))
                .unwrap_err()
                .code,
            ErrorCode::Unauthorized
        );
    }

    #[test]
    fn test_handle_line() {
        let app = AppState::default();
        let response = handle_line(&app, r#"{"id":7,"command":"get_document_head"}"#);
        assert!(response.ok);
        assert_eq!(response.id, Some(json!(7)));
        assert_eq!(response.data.unwrap()["title"], "Online Tool Shop");

        let response = handle_line(&app, "not json");
        assert!(!response.ok);
        assert_eq!(response.error.map(|e| e.code), Some(ErrorCode::ValidationError));

        let json = serde_json::to_value(handle_line(&app, r#"{"command":"nope"}"#)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "UNKNOWN_COMMAND");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_admin_flow_over_invoke() {
        let app = AppState::default();
        invoke(
            &app,
            "admin_login",
            json!({ "username": "admin", "password": "admin" }),
        )
        .unwrap();

        let list = invoke(&app, "get_category_list", Value::Null).unwrap();
        assert_eq!(list[0]["name"], "Electric Tools");
        assert_eq!(list[0]["depth"], 0);

        let head = invoke(
            &app,
            "update_general_settings",
            json!({ "general": {
                "title": "Tool Depot",
                "description": "Tools",
                "icon": "",
                "favicon": ""
            }}),
        )
        .unwrap();
        assert_eq!(head["title"], "Tool Depot");
        assert_eq!(head["favicon"], Value::Null);
    }
}
