//! # Session
//!
//! Customer login, admin login and the price tier.
//!
//! ## Login Flow
//! ```text
//! login(mobile)
//!   │
//!   ├── 09 + 9 digits? ── no ──► ValidationError, session unchanged
//!   │
//!   └── yes ──► session.user = demo customer
//!
//! admin_login(username, password)
//!   │
//!   ├── admin/admin? ── no ──► InvalidCredentials (no lockout)
//!   │
//!   └── yes ──► is_admin = true, demo customer signed in if nobody is
//!
//! logout() ──► user = None, is_admin = false, tier = retail
//! ```

use toolshop_core::validation::validate_mobile;
use toolshop_core::{CoreError, CoreResult, PriceTier, User, ADMIN_PASSWORD, ADMIN_USERNAME};
use tracing::{debug, info, warn};

use super::{Session, Store};
use crate::seed;

impl Store {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin
    }

    /// Signs in the customer behind a mobile number.
    ///
    /// There is no account backend: any well-formed number signs in the
    /// demo customer.
    pub fn login(&mut self, mobile: &str) -> CoreResult<&User> {
        let mobile = mobile.trim();
        if let Err(e) = validate_mobile(mobile) {
            warn!(mobile = %mobile, "Rejected customer login");
            return Err(e.into());
        }

        let user = seed::demo_user();
        info!(user_id = user.id, "Customer logged in");
        Ok(self.session.user.insert(user))
    }

    /// Checks the admin credentials. On success the demo customer is also
    /// signed in, unless someone already is.
    pub fn admin_login(&mut self, username: &str, password: &str) -> CoreResult<()> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            warn!(username = %username, "Rejected admin login");
            return Err(CoreError::InvalidCredentials);
        }

        self.session.is_admin = true;
        if self.session.user.is_none() {
            self.session.user = Some(seed::demo_user());
        }
        info!("Admin logged in");
        Ok(())
    }

    /// Ends the session and resets the tier preference to retail.
    pub fn logout(&mut self) {
        info!(was_admin = self.session.is_admin, "Logged out");
        self.session = Session::default();
    }

    pub fn set_price_tier(&mut self, tier: PriceTier) {
        debug!(tier = %tier, "Price tier changed");
        self.session.price_tier = tier;
    }

    /// The tier prices are actually computed at.
    pub fn effective_price_tier(&self) -> PriceTier {
        self.session
            .price_tier
            .effective(self.session.is_authenticated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_valid_mobile() {
        let mut store = Store::with_mock_data();
        let user = store.login(" 09123456789 ").unwrap();
        assert_eq!(user.mobile, "09123456789");
        assert!(store.session().is_authenticated());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_login_with_invalid_mobile_changes_nothing() {
        let mut store = Store::with_mock_data();
        for mobile in ["", "0912345678", "9123456789", "0912345678x"] {
            assert!(matches!(store.login(mobile), Err(CoreError::Validation(_))));
        }
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_admin_login() {
        let mut store = Store::with_mock_data();
        assert_eq!(
            store.admin_login("admin", "wrong"),
            Err(CoreError::InvalidCredentials)
        );
        assert!(!store.is_admin());

        store.admin_login("admin", "admin").unwrap();
        assert!(store.is_admin());
        assert!(store.current_user().is_some());
    }

    #[test]
    fn test_logout_resets_tier() {
        let mut store = Store::with_mock_data();
        store.login("09123456789").unwrap();
        store.set_price_tier(PriceTier::Wholesale);
        assert_eq!(store.effective_price_tier(), PriceTier::Wholesale);

        store.logout();
        assert!(store.current_user().is_none());
        assert_eq!(store.session().price_tier, PriceTier::Retail);
        assert_eq!(store.effective_price_tier(), PriceTier::Retail);
    }
}
