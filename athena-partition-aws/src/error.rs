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

use aws_runtime::retries::classifiers::{THROTTLING_ERRORS, TRANSIENT_ERRORS};
use aws_sdk_athena::error::ProvideErrorMetadata;

pub fn is_throttling_error<E: ProvideErrorMetadata>(error: &E) -> bool {
    error
        .code()
        .is_some_and(|code| THROTTLING_ERRORS.contains(&code))
}

pub fn is_transient_error<E: ProvideErrorMetadata>(error: &E) -> bool {
    error
        .code()
        .is_some_and(|code| TRANSIENT_ERRORS.contains(&code))
}

#[cfg(test)]
mod tests {
    use aws_sdk_athena::error::ErrorMetadata;
    use aws_sdk_athena::operation::start_query_execution::StartQueryExecutionError;

    use super::*;

    fn start_query_execution_error(code: Option<&str>) -> StartQueryExecutionError {
        let mut error_metadata = ErrorMetadata::builder().message("something went wrong");
        if let Some(code) = code {
            error_metadata = error_metadata.code(code);
        }
        StartQueryExecutionError::generic(error_metadata.build())
    }

    #[test]
    fn test_is_throttling_error() {
        let error = start_query_execution_error(Some("ThrottlingException"));
        assert!(is_throttling_error(&error));
        assert!(!is_transient_error(&error));

        let error = start_query_execution_error(Some("InvalidRequestException"));
        assert!(!is_throttling_error(&error));

        let error = start_query_execution_error(None);
        assert!(!is_throttling_error(&error));
    }

    #[test]
    fn test_is_transient_error() {
        let error = start_query_execution_error(Some("RequestTimeout"));
        assert!(is_transient_error(&error));
        assert!(!is_throttling_error(&error));

        let error = start_query_execution_error(Some("AccessDeniedException"));
        assert!(!is_transient_error(&error));
    }
}
