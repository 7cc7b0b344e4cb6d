
use smartfridge_test_utils::{constant::TEST_JWT_SECRET, prelude::*};

use crate::server::model::app::JwtConfig;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_hours: 1,
    }
}
