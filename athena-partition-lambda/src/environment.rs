// Copyright 2021-Present Datadog, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::var;
use std::fmt::Debug;
use std::str::FromStr;

use once_cell::sync::Lazy;
use tracing::{error, info};

use crate::partition::PartitionClock;

pub const PARTITION_CLOCK_ENV_KEY: &str = "ATHENA_PARTITION_CLOCK";
pub const ENABLE_VERBOSE_JSON_LOGS_ENV_KEY: &str = "ATHENA_PARTITION_ENABLE_VERBOSE_JSON_LOGS";

pub static PARTITION_CLOCK: Lazy<PartitionClock> =
    Lazy::new(|| get_from_env(PARTITION_CLOCK_ENV_KEY, PartitionClock::default()));

pub static ENABLE_VERBOSE_JSON_LOGS: Lazy<bool> =
    Lazy::new(|| var(ENABLE_VERBOSE_JSON_LOGS_ENV_KEY).is_ok_and(|v| v.as_str() == "true"));

/// Reads and parses `key` from the environment, falling back to `default_value` when the variable
/// is unset or unparseable.
pub fn get_from_env<T: FromStr + Debug>(key: &str, default_value: T) -> T {
    if let Ok(value_str) = var(key) {
        if let Ok(value) = T::from_str(&value_str) {
            info!(value=?value, "setting `{}` from environment", key);
            return value;
        } else {
            error!(value_str=%value_str, "failed to parse `{}` from environment", key);
        }
    }
    info!(value=?default_value, "setting `{}` from default", key);
    default_value
}
