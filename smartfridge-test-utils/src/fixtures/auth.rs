use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::{constant::TEST_JWT_EXPIRY_HOURS, error::TestError, TestContext};

impl TestContext {
    pub fn auth<'a>(&'a self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a TestContext,
}

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    iat: i64,
    exp: i64,
}

impl<'a> AuthFixtures<'a> {
    /// Mint a bearer token for `email` signed with the context's secret.
    pub fn bearer_token(&self, email: &str) -> Result<String, TestError> {
        let now = Utc::now();
        let claims = TestClaims {
            sub: email,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TEST_JWT_EXPIRY_HOURS)).timestamp(),
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.setup.jwt_secret.as_bytes()),
        )?)
    }

    /// Mint a token that expired an hour ago.
    pub fn expired_token(&self, email: &str) -> Result<String, TestError> {
        let issued = Utc::now() - Duration::hours(2);
        let claims = TestClaims {
            sub: email,
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(TEST_JWT_EXPIRY_HOURS)).timestamp(),
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.setup.jwt_secret.as_bytes()),
        )?)
    }
}
