use std::sync::Arc;
use crate::domain::ports::FairRepository;
use crate::error::AppError;
use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const CODE_LEN: usize = 8;
const MAX_ATTEMPTS: usize = 10;

/// Issues and validates the per-fair invite codes. Codes are 8 characters
/// from [A-Z0-9] and unique across all fairs' current codes; the unique index
/// on the store is the structural backstop for races between issue and commit.
pub struct InviteCodeAuthority {
    fairs: Arc<dyn FairRepository>,
}

impl InviteCodeAuthority {
    pub fn new(fairs: Arc<dyn FairRepository>) -> Self {
        Self { fairs }
    }

    /// Generates a fresh code, retrying on collision with any existing fair's
    /// current code. Exhausting the retry budget signals a capacity problem,
    /// not a user error.
    pub async fn issue(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let candidate = generate_candidate();
            if self.fairs.find_by_invite_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }
        Err(AppError::Exhausted)
    }

    /// Case-insensitive comparison against the fair's current code. Input is
    /// normalized to uppercase; stored codes are already uppercase.
    pub fn validate(stored_code: &str, submitted: &str) -> bool {
        normalize(submitted) == stored_code
    }
}

pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn generate_candidate() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::fair::Fair;
    use async_trait::async_trait;

    struct AlwaysCollidingFairRepo;

    #[async_trait]
    impl FairRepository for AlwaysCollidingFairRepo {
        async fn create(&self, _fair: &Fair) -> Result<Fair, AppError> {
            unimplemented!()
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
        async fn find_by_invite_code(&self, code: &str) -> Result<Option<Fair>, AppError> {
            Ok(Some(Fair::new("Taken".to_string(), None, None, None, code.to_string())))
        }
        async fn list(&self) -> Result<Vec<Fair>, AppError> {
            Ok(vec![])
        }
        async fn update(&self, _fair: &Fair) -> Result<Fair, AppError> {
            unimplemented!()
        }
        async fn toggle_live(&self, _id: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
        async fn update_invite_code(&self, _id: &str, _code: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
    }

    struct EmptyFairRepo;

    #[async_trait]
    impl FairRepository for EmptyFairRepo {
        async fn create(&self, _fair: &Fair) -> Result<Fair, AppError> {
            unimplemented!()
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
        async fn find_by_invite_code(&self, _code: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
        async fn list(&self) -> Result<Vec<Fair>, AppError> {
            Ok(vec![])
        }
        async fn update(&self, _fair: &Fair) -> Result<Fair, AppError> {
            unimplemented!()
        }
        async fn toggle_live(&self, _id: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
        async fn update_invite_code(&self, _id: &str, _code: &str) -> Result<Option<Fair>, AppError> {
            Ok(None)
        }
    }

    #[test]
    fn test_generated_codes_match_charset_and_length() {
        for _ in 0..100 {
            let code = generate_candidate();
            assert_eq!(code.len(), CODE_LEN);
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "Unexpected character in code {}",
                code
            );
        }
    }

    #[tokio::test]
    async fn test_issue_succeeds_when_no_collision() {
        let authority = InviteCodeAuthority::new(Arc::new(EmptyFairRepo));
        let code = authority.issue().await.expect("issue failed");
        assert_eq!(code.len(), CODE_LEN);
    }

    #[tokio::test]
    async fn test_issue_exhausts_after_bounded_retries() {
        let authority = InviteCodeAuthority::new(Arc::new(AlwaysCollidingFairRepo));
        let result = authority.issue().await;
        assert!(matches!(result, Err(AppError::Exhausted)));
    }

    #[test]
    fn test_validate_normalizes_case_and_whitespace() {
        assert!(InviteCodeAuthority::validate("AB12CD34", "ab12cd34"));
        assert!(InviteCodeAuthority::validate("AB12CD34", "  AB12CD34 "));
        assert!(!InviteCodeAuthority::validate("AB12CD34", "AB12CD35"));
        assert!(!InviteCodeAuthority::validate("AB12CD34", ""));
    }
}
