use banklite_auth::Principal;
use banklite_core::UserId;

/// The user a request's bearer token resolved to.
///
/// Only present when the token matched a registered username; routes that
/// need a user answer 401 when it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    principal: Principal,
}

impl CurrentUser {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn user_id(&self) -> UserId {
        self.principal.user_id
    }

    pub fn username(&self) -> &str {
        &self.principal.username
    }
}
