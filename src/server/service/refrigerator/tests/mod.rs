mod create;

use entity::sea_orm_active_enums::RefrigeratorRole;
use smartfridge_test_utils::prelude::*;

use crate::server::error::{refrigerator::RefrigeratorError, Error};
