
use chrono::NaiveDate;
use smartfridge_test_utils::prelude::*;

use crate::server::error::{grocery::GroceryError, refrigerator::RefrigeratorError, Error};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
