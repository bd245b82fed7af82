#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Myself;

/// Authentication state tracking the current user and loading status.
///
/// Populated once per page from `/api/myself/`; the profile behind
/// `user.url` is still re-fetched by each action that needs it.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<Myself>,
    pub loading: bool,
}
