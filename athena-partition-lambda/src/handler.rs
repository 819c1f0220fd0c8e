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

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::adder::PartitionAdder;
use crate::query_service::QueryService;
use crate::request::PartitionRequest;

/// Handles one scheduled invocation: adds today's partition for the table named in the event.
///
/// Returns no output. Any error fails the invocation.
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<Q: QueryService>(
    event: LambdaEvent<Value>,
    partition_adder: &PartitionAdder<Q>,
) -> Result<(), Error> {
    debug!(payload = %event.payload, "received event");

    let request = PartitionRequest::from_event(&event.payload).map_err(|err| {
        error!(err = %err, "invalid event");
        err
    })?;

    if let Err(err) = partition_adder.add_todays_partition(&request).await {
        error!(err = %err, table = %request.table, "failed to add partition");
        return Err(err.into());
    }
    Ok(())
}
