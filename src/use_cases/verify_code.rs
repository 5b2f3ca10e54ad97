use crate::domain::codes::normalize_code;
use crate::domain::entities::{Role, Session};
use crate::domain::errors::AuthError;
use crate::domain::ports::{Clock, CodeRegistry, SessionStore, TokenGenerator};

// Response returned by the access code verification use case.
pub struct VerifyCodeResponse {
    pub guest_name: String,
    pub role: Role,
    pub token: String,
    pub expires_at: u64,
}

// Access code verification use case with injected dependencies.
pub struct VerifyCodeUseCase<C, S, R, T> {
    pub clock: C,
    pub store: S,
    pub registry: R,
    pub tokens: T,
    pub ttl_seconds: u64,
}

impl<C, S, R, T> VerifyCodeUseCase<C, S, R, T>
where
    C: Clock,
    S: SessionStore,
    R: CodeRegistry,
    T: TokenGenerator,
{
    pub async fn execute(&self, code: Option<String>) -> Result<VerifyCodeResponse, AuthError> {
        let code = code
            .filter(|code| !code.is_empty())
            .ok_or(AuthError::CodeRequired)?;

        let guest = self.registry.lookup(&code).ok_or(AuthError::InvalidCode)?;

        let token = self.tokens.generate();
        let created_at = self.clock.now_epoch_seconds();
        let expires_at = created_at + self.ttl_seconds;

        let session = Session {
            token: token.clone(),
            guest_name: guest.guest_name.clone(),
            role: guest.role,
            code: normalize_code(&code),
            created_at,
            expires_at,
        };

        self.store
            .insert(token.clone(), session)
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        Ok(VerifyCodeResponse {
            guest_name: guest.guest_name,
            role: guest.role,
            token,
            expires_at,
        })
    }
}
