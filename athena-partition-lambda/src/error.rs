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

use thiserror::Error;

/// Result type for partition operations.
pub type PartitionResult<T> = Result<T, PartitionError>;

/// Errors that fail a partition invocation.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// A required key is absent from the invocation event.
    #[error("missing required event field `{field}`")]
    MissingInputField { field: &'static str },

    /// A required key is present in the invocation event but is not a string.
    #[error("event field `{field}` should be a string")]
    InvalidInputField { field: &'static str },

    /// The query service rejected or failed the statement submission.
    #[error("failed to submit query execution{}: {message}", format_code(.code))]
    Submission {
        code: Option<String>,
        message: String,
    },

    /// The query service accepted the statement but returned no execution id.
    #[error("query service returned no query execution id")]
    MissingExecutionId,
}

fn format_code(code: &Option<String>) -> String {
    match code {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}
