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

use serde_json::Value;

use crate::error::{PartitionError, PartitionResult};

const DATABASE_KEY: &str = "database";
const TABLE_KEY: &str = "table";
const LOCATION_KEY: &str = "location";
const QUERY_RESULT_LOCATION_KEY: &str = "query_result_location";

/// Parameters of one partition invocation, read from the scheduled event.
///
/// None of the fields are validated: `table` and `location_prefix` end up verbatim in the DDL
/// statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartitionRequest {
    /// Athena database the statement runs against.
    pub database: String,
    /// Table receiving the partition.
    pub table: String,
    /// Storage prefix under which `YYYY/MM/DD/` is appended.
    pub location_prefix: String,
    /// Where Athena writes the query results and metadata.
    pub query_result_location: String,
}

impl PartitionRequest {
    /// Builds a request from the invocation event payload.
    pub fn from_event(event: &Value) -> PartitionResult<Self> {
        Ok(Self {
            database: required_str(event, DATABASE_KEY)?,
            table: required_str(event, TABLE_KEY)?,
            location_prefix: required_str(event, LOCATION_KEY)?,
            query_result_location: required_str(event, QUERY_RESULT_LOCATION_KEY)?,
        })
    }
}

fn required_str(event: &Value, field: &'static str) -> PartitionResult<String> {
    match event.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(PartitionError::InvalidInputField { field }),
        None => Err(PartitionError::MissingInputField { field }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn scheduled_event() -> Value {
        json!({
            "database": "logs_db",
            "table": "elb_logs",
            "location": "s3://bucket/elb/",
            "query_result_location": "s3://bucket/results/",
        })
    }

    #[test]
    fn test_partition_request_from_event() {
        let request = PartitionRequest::from_event(&scheduled_event()).unwrap();
        assert_eq!(
            request,
            PartitionRequest {
                database: "logs_db".to_string(),
                table: "elb_logs".to_string(),
                location_prefix: "s3://bucket/elb/".to_string(),
                query_result_location: "s3://bucket/results/".to_string(),
            }
        );
    }

    #[test]
    fn test_partition_request_ignores_extra_fields() {
        let mut event = scheduled_event();
        event["source"] = json!("aws.events");
        event["detail-type"] = json!("Scheduled Event");
        let request = PartitionRequest::from_event(&event).unwrap();
        assert_eq!(request.table, "elb_logs");
    }

    #[test]
    fn test_partition_request_missing_field() {
        for field in [
            DATABASE_KEY,
            TABLE_KEY,
            LOCATION_KEY,
            QUERY_RESULT_LOCATION_KEY,
        ] {
            let mut event = scheduled_event();
            event.as_object_mut().unwrap().remove(field);
            let error = PartitionRequest::from_event(&event).unwrap_err();
            assert!(
                matches!(error, PartitionError::MissingInputField { field: missing } if missing == field),
                "unexpected error for `{field}`: {error:?}"
            );
        }
    }

    #[test]
    fn test_partition_request_non_string_field() {
        let mut event = scheduled_event();
        event["table"] = json!(42);
        let error = PartitionRequest::from_event(&event).unwrap_err();
        assert!(matches!(
            error,
            PartitionError::InvalidInputField { field: "table" }
        ));

        let mut event = scheduled_event();
        event["location"] = Value::Null;
        let error = PartitionRequest::from_event(&event).unwrap_err();
        assert!(matches!(
            error,
            PartitionError::InvalidInputField { field: "location" }
        ));
    }

    #[test]
    fn test_partition_request_from_non_object_event() {
        let error = PartitionRequest::from_event(&json!("2024-03-07")).unwrap_err();
        assert!(matches!(
            error,
            PartitionError::MissingInputField { field: "database" }
        ));
    }

    #[test]
    fn test_partition_request_accepts_empty_strings() {
        let mut event = scheduled_event();
        event["location"] = json!("");
        let request = PartitionRequest::from_event(&event).unwrap();
        assert_eq!(request.location_prefix, "");
    }
}
