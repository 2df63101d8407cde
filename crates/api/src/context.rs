use curio_auth::claims::Claims;

/// Requester context for a request (the authenticated caller's decoded
/// claims).
///
/// This is immutable and must be present for all protected routes; the
/// auth middleware inserts it before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterContext {
    claims: Claims,
}

impl RequesterContext {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn user_id(&self) -> &str {
        &self.claims.sub
    }
}
