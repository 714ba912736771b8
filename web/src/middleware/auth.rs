use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use storage::models::{Role, User};
use storage::repository::user::UserRepository;

use crate::clients::identity::VerifiedIdentity;
use crate::error::WebError;
use crate::state::AppState;

/// The authenticated user, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Verify the bearer token against the identity provider and resolve it
/// to a stored user record. Unknown identities are 401 (the account was
/// never registered); deactivated accounts are 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(req.headers())?.to_string();
    let identity = state.identity.verify_token(&token).await?;

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .find_optional(&identity.uid)
        .await?
        .ok_or_else(|| WebError::Unauthorized("No account for this identity".to_string()))?;

    if !user.is_active {
        tracing::warn!(uid = %user.uid, "Deactivated account attempted access");
        return Err(WebError::Forbidden("Account is deactivated".to_string()));
    }

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Token verification for pre-account endpoints (registration,
/// invitation redemption), where no user record exists yet.
pub async fn verified_identity(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<VerifiedIdentity, WebError> {
    let token = bearer_token(headers)?;
    state.identity.verify_token(token).await
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, WebError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| WebError::Unauthorized("Missing bearer token".to_string()))
}

pub fn require_admin(user: &User) -> Result<(), WebError> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(WebError::Forbidden(
            "This action requires an administrative role".to_string(),
        ))
    }
}

/// The acting user must outrank `target` on the role hierarchy.
pub fn require_authority(user: &User, target: Role) -> Result<(), WebError> {
    if user.role.has_authority_over(target) {
        Ok(())
    } else {
        Err(WebError::Forbidden(format!(
            "Role '{}' has no authority over '{}'",
            user.role.as_token(),
            target.as_token()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_or_malformed_header_is_unauthorized() {
        assert!(bearer_token(&HeaderMap::new()).is_err());
        assert!(bearer_token(&headers_with("Basic abc")).is_err());
        assert!(bearer_token(&headers_with("Bearer ")).is_err());
    }
}
