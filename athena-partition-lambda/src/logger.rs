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

use anyhow::Context;
use time::format_description::BorrowedFormatItem;
use tracing::Level;
use tracing_subscriber::fmt::format::{FmtSpan, JsonFields};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::environment::ENABLE_VERBOSE_JSON_LOGS;

const LOG_TARGETS: [&str; 2] = ["athena_partition_lambda", "athena_partition_aws"];

fn fmt_env_filter(level: Level) -> EnvFilter {
    if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        return EnvFilter::builder().from_env_lossy();
    }
    let default_directives = LOG_TARGETS
        .map(|target| format!("{target}={level}"))
        .join(",");
    EnvFilter::builder().parse_lossy(default_directives)
}

fn log_timestamp_format() -> Vec<BorrowedFormatItem<'static>> {
    // Millisecond precision, the Rfc3339 formatter would print nanoseconds.
    time::format_description::parse_borrowed::<2>(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z",
    )
    .expect("log timestamp format should be valid")
}

fn fmt_time_format() -> UtcTime<Vec<BorrowedFormatItem<'static>>> {
    UtcTime::new(log_timestamp_format())
}

fn compact_fmt_layer<S>(level: Level) -> impl Layer<S>
where
    S: for<'a> LookupSpan<'a>,
    S: tracing::Subscriber,
{
    let event_format = tracing_subscriber::fmt::format()
        .with_target(true)
        .with_timer(fmt_time_format())
        .compact();

    tracing_subscriber::fmt::layer::<S>()
        .event_format(event_format)
        .with_ansi(false)
        .with_filter(fmt_env_filter(level))
}

fn json_fmt_layer<S>(level: Level) -> impl Layer<S>
where
    S: for<'a> LookupSpan<'a>,
    S: tracing::Subscriber,
{
    let event_format = tracing_subscriber::fmt::format()
        .with_target(true)
        .with_timer(fmt_time_format())
        .json();
    tracing_subscriber::fmt::layer::<S>()
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .event_format(event_format)
        .fmt_fields(JsonFields::default())
        .with_ansi(false)
        .with_filter(fmt_env_filter(level))
}

fn fmt_layer<S>(level: Level) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: for<'a> LookupSpan<'a>,
    S: tracing::Subscriber,
{
    if *ENABLE_VERBOSE_JSON_LOGS {
        json_fmt_layer(level).boxed()
    } else {
        compact_fmt_layer(level).boxed()
    }
}

/// Registers the process-wide tracing subscriber. Must be called once, before the first
/// invocation is served.
pub fn setup_lambda_tracer(level: Level) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt_layer(level))
        .try_init()
        .context("failed to register tracing subscriber")?;
    Ok(())
}
