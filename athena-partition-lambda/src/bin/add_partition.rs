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

use athena_partition_aws::new_athena_client;
use athena_partition_lambda::environment::PARTITION_CLOCK;
use athena_partition_lambda::{AthenaQueryService, PartitionAdder, handler, setup_lambda_tracer};
use lambda_runtime::service_fn;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_lambda_tracer(Level::INFO)?;
    info!("loading function");

    let partition_clock = *PARTITION_CLOCK;
    info!(
        partition_clock = %partition_clock,
        "partition dates follow the {partition_clock} calendar"
    );

    let athena_client = new_athena_client().await;
    let query_service = AthenaQueryService::new(athena_client);
    let partition_adder = PartitionAdder::new(query_service, partition_clock);

    let func = service_fn(|event| handler(event, &partition_adder));
    lambda_runtime::run(func)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
