//! Constant values shared by tests.
//!
//! None of these are real credentials.

/// Secret used to sign bearer tokens in tests.
pub static TEST_JWT_SECRET: &str = "smartfridge-test-secret";

/// Lifetime in hours of bearer tokens minted by the auth fixtures.
pub const TEST_JWT_EXPIRY_HOURS: i64 = 1;

/// Placeholder stored as the password hash for fixture users that never log in.
pub static TEST_PASSWORD_HASH: &str = "not-a-real-hash";
