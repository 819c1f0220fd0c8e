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

use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_types::region::Region;
use tokio::sync::OnceCell;

pub mod error;

pub const DEFAULT_AWS_REGION: Region = Region::from_static("us-east-1");

/// Initialises and returns the AWS config.
///
/// The region is resolved through the default provider chain (`AWS_REGION`, profile, IMDS) and
/// falls back to [`DEFAULT_AWS_REGION`].
pub async fn get_aws_config() -> &'static aws_config::SdkConfig {
    static SDK_CONFIG: OnceCell<aws_config::SdkConfig> = OnceCell::const_new();

    SDK_CONFIG
        .get_or_init(|| async {
            let region_provider =
                RegionProviderChain::default_provider().or_else(DEFAULT_AWS_REGION);
            aws_config::defaults(BehaviorVersion::latest())
                .region(region_provider)
                // A failed submission fails the invocation, the scheduler decides what happens next.
                .retry_config(RetryConfig::disabled())
                .load()
                .await
        })
        .await
}

/// Builds an Athena client over the process-wide AWS config.
///
/// The caller owns the client. The Lambda binary builds it once and reuses it for every
/// invocation served by the execution environment.
pub async fn new_athena_client() -> aws_sdk_athena::Client {
    let aws_config = get_aws_config().await;
    aws_sdk_athena::Client::new(aws_config)
}
