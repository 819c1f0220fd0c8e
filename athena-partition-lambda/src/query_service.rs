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

use async_trait::async_trait;
use athena_partition_aws::error::{is_throttling_error, is_transient_error};
use aws_sdk_athena::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_athena::types::{QueryExecutionContext, ResultConfiguration};
use tracing::{error, instrument};

use crate::error::{PartitionError, PartitionResult};

/// Opaque identifier of one asynchronous statement submission.
pub type QueryExecutionId = String;

/// A statement submission: what to run, against which database, and where results go.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartQueryExecution {
    pub query_string: String,
    pub database: String,
    pub output_location: String,
}

/// Submits statements to a managed query service without waiting for their completion.
#[cfg_attr(any(test, feature = "testsuite"), mockall::automock)]
#[async_trait]
pub trait QueryService: Send + Sync + 'static {
    /// Starts the execution of a statement and returns its execution id as soon as the service
    /// accepted it. The statement may still be running, fail, or be rejected afterwards.
    async fn start_query_execution(
        &self,
        request: StartQueryExecution,
    ) -> PartitionResult<QueryExecutionId>;
}

/// [`QueryService`] backed by Amazon Athena.
#[derive(Clone, Debug)]
pub struct AthenaQueryService {
    client: aws_sdk_athena::Client,
}

impl AthenaQueryService {
    pub fn new(client: aws_sdk_athena::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueryService for AthenaQueryService {
    #[instrument(skip_all, fields(database = %request.database))]
    async fn start_query_execution(
        &self,
        request: StartQueryExecution,
    ) -> PartitionResult<QueryExecutionId> {
        let query_execution_context = QueryExecutionContext::builder()
            .database(request.database)
            .build();
        let result_configuration = ResultConfiguration::builder()
            .output_location(request.output_location)
            .build();

        let output = self
            .client
            .start_query_execution()
            .query_string(request.query_string)
            .query_execution_context(query_execution_context)
            .result_configuration(result_configuration)
            .send()
            .await
            .map_err(|sdk_error| {
                let code = sdk_error.code().map(str::to_string);
                error!(
                    code = code.as_deref(),
                    throttled = is_throttling_error(&sdk_error),
                    transient = is_transient_error(&sdk_error),
                    "failed to start Athena query execution"
                );
                PartitionError::Submission {
                    code,
                    message: DisplayErrorContext(&sdk_error).to_string(),
                }
            })?;

        output
            .query_execution_id()
            .map(str::to_string)
            .ok_or(PartitionError::MissingExecutionId)
    }
}
