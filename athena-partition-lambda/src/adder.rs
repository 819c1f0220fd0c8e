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

use tracing::{debug, info};

use crate::error::PartitionResult;
use crate::partition::{PartitionClock, PartitionDate, add_partition_statement};
use crate::query_service::{QueryExecutionId, QueryService, StartQueryExecution};
use crate::request::PartitionRequest;

/// Adds daily partitions by submitting `ALTER TABLE ... ADD PARTITION` statements.
///
/// The adder is built once per execution environment and reused by every invocation. It holds
/// no per-invocation state: calling it twice on the same day submits two statements.
pub struct PartitionAdder<Q> {
    query_service: Q,
    clock: PartitionClock,
}

impl<Q: QueryService> PartitionAdder<Q> {
    pub fn new(query_service: Q, clock: PartitionClock) -> Self {
        Self {
            query_service,
            clock,
        }
    }

    /// Submits the statement adding today's partition and returns the execution id.
    pub async fn add_todays_partition(
        &self,
        request: &PartitionRequest,
    ) -> PartitionResult<QueryExecutionId> {
        let today = self.clock.today();
        self.add_partition_for_date(request, today).await
    }

    pub async fn add_partition_for_date(
        &self,
        request: &PartitionRequest,
        date: PartitionDate,
    ) -> PartitionResult<QueryExecutionId> {
        let query_string = add_partition_statement(request, date);
        debug!(query_string = %query_string, "built partition statement");

        let query_execution_id = self
            .query_service
            .start_query_execution(StartQueryExecution {
                query_string,
                database: request.database.clone(),
                output_location: request.query_result_location.clone(),
            })
            .await?;

        info!(
            query_execution_id = %query_execution_id,
            table = %request.table,
            partition_date = %date,
            "QueryExecutionId: {query_execution_id}"
        );
        Ok(query_execution_id)
    }
}
