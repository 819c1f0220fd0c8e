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

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, Utc};

use crate::request::PartitionRequest;

/// Calendar date keying a daily partition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PartitionDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for PartitionDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl PartitionDate {
    /// Storage suffix of the partition, `YYYY/MM/DD/`.
    pub fn location_suffix(&self) -> String {
        let PartitionDate { year, month, day } = *self;
        format!("{year:04}/{month:02}/{day:02}/")
    }
}

impl fmt::Display for PartitionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Source of "today" for the partition date.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PartitionClock {
    /// Current date in UTC.
    #[default]
    Utc,
    /// Current date in the timezone of the execution environment (`TZ`, UTC on AWS Lambda
    /// unless overridden).
    Local,
}

impl PartitionClock {
    pub fn today(&self) -> PartitionDate {
        let date = match self {
            PartitionClock::Utc => Utc::now().date_naive(),
            PartitionClock::Local => Local::now().date_naive(),
        };
        PartitionDate::from(date)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionClock::Utc => "utc",
            PartitionClock::Local => "local",
        }
    }
}

impl fmt::Display for PartitionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionClock {
    type Err = String;

    fn from_str(clock_str: &str) -> Result<Self, Self::Err> {
        match clock_str.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(PartitionClock::Utc),
            "local" => Ok(PartitionClock::Local),
            _ => Err(format!(
                "unknown partition clock `{clock_str}`, expected `utc` or `local`"
            )),
        }
    }
}

/// Builds the `ALTER TABLE ... ADD PARTITION` statement for `date`.
///
/// `table` and the location prefix are interpolated as-is. Partition values are double-quoted.
pub fn add_partition_statement(request: &PartitionRequest, date: PartitionDate) -> String {
    let PartitionDate { year, month, day } = date;
    format!(
        r#"ALTER TABLE {table} ADD PARTITION (year="{year:04}", month="{month:02}", day="{day:02}") LOCATION "{location_prefix}{location_suffix}""#,
        table = request.table,
        location_prefix = request.location_prefix,
        location_suffix = date.location_suffix(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elb_logs_request() -> PartitionRequest {
        PartitionRequest {
            database: "logs_db".to_string(),
            table: "elb_logs".to_string(),
            location_prefix: "s3://bucket/elb/".to_string(),
            query_result_location: "s3://bucket/results/".to_string(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> PartitionDate {
        PartitionDate::from(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn test_add_partition_statement() {
        let statement = add_partition_statement(&elb_logs_request(), date(2024, 3, 7));
        assert_eq!(
            statement,
            r#"ALTER TABLE elb_logs ADD PARTITION (year="2024", month="03", day="07") LOCATION "s3://bucket/elb/2024/03/07/""#
        );
    }

    #[test]
    fn test_add_partition_statement_two_digit_month_and_day() {
        let statement = add_partition_statement(&elb_logs_request(), date(2023, 12, 31));
        assert_eq!(
            statement,
            r#"ALTER TABLE elb_logs ADD PARTITION (year="2023", month="12", day="31") LOCATION "s3://bucket/elb/2023/12/31/""#
        );
    }

    #[test]
    fn test_add_partition_statement_does_not_sanitize() {
        let request = PartitionRequest {
            table: "`weird table`".to_string(),
            location_prefix: "s3://bucket/no-trailing-slash".to_string(),
            ..elb_logs_request()
        };
        let statement = add_partition_statement(&request, date(2024, 1, 2));
        assert_eq!(
            statement,
            r#"ALTER TABLE `weird table` ADD PARTITION (year="2024", month="01", day="02") LOCATION "s3://bucket/no-trailing-slash2024/01/02/""#
        );
    }

    #[test]
    fn test_partition_date_padding() {
        let partition_date = date(987, 1, 9);
        assert_eq!(partition_date.location_suffix(), "0987/01/09/");
        assert_eq!(partition_date.to_string(), "0987-01-09");
    }

    #[test]
    fn test_partition_clock_from_str() {
        assert_eq!("utc".parse::<PartitionClock>().unwrap(), PartitionClock::Utc);
        assert_eq!("UTC".parse::<PartitionClock>().unwrap(), PartitionClock::Utc);
        assert_eq!(
            " local ".parse::<PartitionClock>().unwrap(),
            PartitionClock::Local
        );
        assert!("europe/paris".parse::<PartitionClock>().is_err());
        assert_eq!(PartitionClock::default(), PartitionClock::Utc);
    }

    #[test]
    fn test_partition_clock_utc_today() {
        let before = PartitionDate::from(Utc::now().date_naive());
        let today = PartitionClock::Utc.today();
        let after = PartitionDate::from(Utc::now().date_naive());
        assert!(today == before || today == after);
    }
}
