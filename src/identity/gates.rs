//! Role and ownership gates. Both require a populated `RequestContext`, so
//! they can only run after token verification. Each role check pays one
//! store round trip keyed by the claim email; there is no caching.

use super::claims::RequestContext;
use crate::error::{AppError, AppResult};
use crate::store::{Role, Store};

/// Role gate: the stored record for the claim email must hold exactly the
/// required role. A missing record denies as well.
pub async fn require_role(store: &Store, ctx: &RequestContext, required: Role) -> AppResult<()> {
    match store.find_user_by_email(ctx.email()).await {
        Some(user) if user.role == required => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}

/// Ownership gate: the caller may only touch records whose owner email
/// matches their verified identity. Case-sensitive exact match.
pub fn require_owner(ctx: &RequestContext, target_email: &str) -> AppResult<()> {
    if ctx.email() == target_email {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Self-report role membership: a path/claim mismatch is denied outright,
/// otherwise the answer is a boolean. A missing record or a different stored
/// role reports `false` rather than an error.
pub async fn report_role(
    store: &Store,
    ctx: &RequestContext,
    email: &str,
    role: Role,
) -> AppResult<bool> {
    require_owner(ctx, email)?;
    Ok(store
        .find_user_by_email(email)
        .await
        .map(|u| u.role == role)
        .unwrap_or(false))
}
