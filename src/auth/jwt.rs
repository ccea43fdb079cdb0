use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,       // user id
    pub role: String,
    pub exp: usize,        // expiry timestamp
    pub iat: usize,        // issued at
}

pub fn generate(user_id: &str, role: &str, secret: &str, expiry_hours: u64) -> Result<String> {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: now + (expiry_hours as usize * 3600),
        iat: now,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-for-unit-tests-only";

    #[test]
    fn test_generate_and_verify_token() {
        let token = generate("user-123", "normal", TEST_SECRET, 24)
            .expect("Should generate token");
        assert!(!token.is_empty());

        let claims = verify(&token, TEST_SECRET)
            .expect("Should verify valid token");
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.role, "normal");
    }

    #[test]
    fn test_verify_wrong_secret_fails() {
        let token = generate("user-123", "admin", TEST_SECRET, 24)
            .expect("Should generate token");

        let result = verify(&token, "wrong-secret");
        assert!(result.is_err(), "Verification with wrong secret should fail");
    }

    #[test]
    fn test_verify_malformed_token_fails() {
        let result = verify("not.a.valid.jwt", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_empty_token_fails() {
        let result = verify("", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_claims_carry_issued_at_and_expiry() {
        let token = generate("user-456", "admin", TEST_SECRET, 1)
            .expect("Should generate token");
        let claims = verify(&token, TEST_SECRET).expect("Should verify");
        assert_eq!(claims.exp, claims.iat + 3600);
    }
}
