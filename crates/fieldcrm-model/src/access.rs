//! Role gate for application routes.
//!
//! A page declares the roles allowed to see it. Users outside that list are
//! sent to their own landing page instead: engineers to their route sheet,
//! everybody else to the admin dashboard.

use crate::enums::UserRole;

/// Landing page for back-office users.
pub const ADMIN_HOME: &str = "/_admin/dashboard";
/// Landing page for field engineers.
pub const ENGINEER_HOME: &str = "/cabinet/route";
/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Outcome of checking a user against a route's allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

impl RouteDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allow)
    }
}

/// Landing page for a role.
pub fn home_for(role: UserRole) -> &'static str {
    match role {
        UserRole::Engineer => ENGINEER_HOME,
        UserRole::Admin | UserRole::Supervisor => ADMIN_HOME,
    }
}

/// Check a typed role against an optional allow-list.
pub fn check_role(role: UserRole, allowed: Option<&[UserRole]>) -> RouteDecision {
    match allowed {
        None => RouteDecision::Allow,
        Some(allowed) if allowed.contains(&role) => RouteDecision::Allow,
        Some(_) => RouteDecision::Redirect(home_for(role)),
    }
}

/// Check the raw role string reported by the API.
///
/// `None` means there is no authenticated user. Role strings the client does
/// not know are never allowed through a restricted route.
pub fn guard_route(role: Option<&str>, allowed: Option<&[UserRole]>) -> RouteDecision {
    let Some(raw) = role else {
        return RouteDecision::Redirect(LOGIN_PATH);
    };
    match raw.parse::<UserRole>() {
        Ok(role) => check_role(role, allowed),
        Err(_) if allowed.is_none() => RouteDecision::Allow,
        Err(_) => RouteDecision::Redirect(ADMIN_HOME),
    }
}
