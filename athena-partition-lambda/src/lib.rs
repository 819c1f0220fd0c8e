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

//! AWS Lambda function adding today's partition to an Athena table.
//!
//! Each scheduled invocation reads the target database, table, storage prefix and query result
//! location from its event, then submits one `ALTER TABLE ... ADD PARTITION` statement through
//! Athena's `StartQueryExecution` API. The function returns as soon as Athena hands back the
//! query execution id. Whether the statement eventually succeeds is not observed.

mod adder;
pub mod environment;
mod error;
mod handler;
mod logger;
mod partition;
mod query_service;
mod request;

pub use adder::PartitionAdder;
pub use error::{PartitionError, PartitionResult};
pub use handler::handler;
pub use logger::setup_lambda_tracer;
pub use partition::{PartitionClock, PartitionDate, add_partition_statement};
#[cfg(any(test, feature = "testsuite"))]
pub use query_service::MockQueryService;
pub use query_service::{AthenaQueryService, QueryExecutionId, QueryService, StartQueryExecution};
pub use request::PartitionRequest;
