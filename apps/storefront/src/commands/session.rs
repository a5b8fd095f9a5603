//! # Session Commands
//!
//! Customer login by mobile number, admin login, logout, the price tier
//! switch and the customer dashboard.

use serde::{Deserialize, Serialize};
use toolshop_core::{CustomerStats, Order, PriceTier, User};
use toolshop_store::Store;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// What the header and dashboard need to know about the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_admin: bool,
    /// The stored preference.
    pub price_tier: PriceTier,
    /// The tier prices are actually shown at.
    pub effective_price_tier: PriceTier,
}

impl From<&Store> for SessionResponse {
    fn from(store: &Store) -> Self {
        let session = store.session();
        SessionResponse {
            user: session.user.clone(),
            is_admin: session.is_admin,
            price_tier: session.price_tier,
            effective_price_tier: store.effective_price_tier(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDashboard {
    pub user: Option<User>,
    pub stats: CustomerStats,
    pub orders: Vec<Order>,
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginArgs {
    pub mobile: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTierArgs {
    pub tier: PriceTier,
}

// =============================================================================
// Commands
// =============================================================================

pub fn get_session(state: &StoreState) -> Result<SessionResponse, ApiError> {
    Ok(state.with_store(|s| SessionResponse::from(s)))
}

pub fn login(state: &StoreState, args: LoginArgs) -> Result<SessionResponse, ApiError> {
    state.with_store_mut(|s| {
        s.login(&args.mobile)?;
        Ok(SessionResponse::from(&*s))
    })
}

pub fn admin_login(state: &StoreState, args: AdminLoginArgs) -> Result<SessionResponse, ApiError> {
    debug!(username = %args.username, "admin_login command");
    state.with_store_mut(|s| {
        s.admin_login(&args.username, &args.password)?;
        Ok(SessionResponse::from(&*s))
    })
}

pub fn logout(state: &StoreState) -> Result<SessionResponse, ApiError> {
    Ok(state.with_store_mut(|s| {
        s.logout();
        SessionResponse::from(&*s)
    }))
}

pub fn set_price_tier(
    state: &StoreState,
    args: PriceTierArgs,
) -> Result<SessionResponse, ApiError> {
    Ok(state.with_store_mut(|s| {
        s.set_price_tier(args.tier);
        SessionResponse::from(&*s)
    }))
}

pub fn get_customer_dashboard(state: &StoreState) -> Result<CustomerDashboard, ApiError> {
    state.with_store(|s| {
        let stats = s.customer_stats()?;
        Ok(CustomerDashboard {
            user: s.current_user().cloned(),
            stats,
            orders: s.orders().to_vec(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_login_and_tier() {
        let state = StoreState::default();
        let session = set_price_tier(
            &state,
            PriceTierArgs {
                tier: PriceTier::Wholesale,
            },
        )
        .unwrap();
        assert_eq!(session.price_tier, PriceTier::Wholesale);
        assert_eq!(session.effective_price_tier, PriceTier::Retail);

        let session = login(
            &state,
            LoginArgs {
                mobile: "09123456789".to_string(),
            },
        )
        .unwrap();
        assert_eq!(session.user.map(|u| u.name), Some("Ali Mohammadi".to_string()));
        assert_eq!(session.effective_price_tier, PriceTier::Wholesale);

        let session = logout(&state).unwrap();
        assert!(session.user.is_none());
        assert_eq!(session.effective_price_tier, PriceTier::Retail);
    }

    #[test]
    fn test_login_failures() {
        let state = StoreState::default();
        let err = login(
            &state,
            LoginArgs {
                mobile: "12345".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = admin_login(
            &state,
            AdminLoginArgs {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert!(!get_session(&state).unwrap().is_admin);
    }

    #[test]
    fn test_customer_dashboard() {
        let state = StoreState::default();
        assert_eq!(
            get_customer_dashboard(&state).unwrap_err().code,
            ErrorCode::Unauthorized
        );

        admin_login(
            &state,
            AdminLoginArgs {
                username: "admin".to_string(),
                password: "admin".to_string(),
            },
        )
        .unwrap();
        let dashboard = get_customer_dashboard(&state).unwrap();
        assert_eq!(dashboard.stats.order_count, 2);
        assert_eq!(dashboard.orders[0].id, "DEF-456");
    }
}
