//! API-key identity and role checks.
//!
//! The middleware resolves every request to a [`Caller`]; handlers then gate each
//! operation on a role. Key comparison is constant-time to mitigate timing attacks.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::AppError;

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Roles a caller can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

/// Identity of the caller behind a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    roles: Vec<Role>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: &[Role]) -> Self {
        Self {
            roles: roles.to_vec(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Capability check wrapping every resource operation.
    pub fn require(&self, role: Role) -> Result<(), AppError> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Caller>().cloned().unwrap_or_default())
    }
}

/// Configured API keys and the roles each one grants.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    admin: Option<String>,
    user: Option<String>,
}

impl ApiKeys {
    pub fn new(admin: Option<String>, user: Option<String>) -> Self {
        Self { admin, user }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.admin_key.clone(), config.user_key.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.admin.is_none() && self.user.is_none()
    }

    /// Resolve a presented key to a caller. Unknown keys resolve to an anonymous caller.
    pub fn resolve(&self, provided: Option<&str>) -> Caller {
        let Some(provided) = provided else {
            return Caller::anonymous();
        };

        // Both comparisons always run.
        let is_admin = matches_key(provided, self.admin.as_deref());
        let is_user = matches_key(provided, self.user.as_deref());

        if is_admin {
            Caller::with_roles(&[Role::Admin, Role::User])
        } else if is_user {
            Caller::with_roles(&[Role::User])
        } else {
            Caller::anonymous()
        }
    }
}

/// Identity layer: attaches a [`Caller`] to every request. Never rejects on its own.
pub async fn identify_caller(keys: Arc<ApiKeys>, mut request: Request, next: Next) -> Response {
    let caller = keys.resolve(presented_key(&request).as_deref());
    request.extensions_mut().insert(caller);
    next.run(request).await
}

/// Read the key from `x-api-key`, falling back to an `Authorization: Bearer` token.
fn presented_key(request: &Request) -> Option<String> {
    let headers = request.headers();
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
        .map(|s| s.to_string())
}

fn matches_key(provided: &str, expected: Option<&str>) -> bool {
    match expected {
        Some(expected) => constant_time_compare(provided, expected),
        None => false,
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
