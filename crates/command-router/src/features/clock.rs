//! Time, date and weekday commands, read from the local clock.

use super::FeatureHandler;
use crate::error::RouterResult;
use async_trait::async_trait;
use chrono::Local;

pub struct TimeFeature;

#[async_trait]
impl FeatureHandler for TimeFeature {
    fn name(&self) -> &'static str {
        "time"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["time"]
    }

    // "set timer ..." contains "time" and would never reach the timer.
    fn matches(&self, command: &str) -> bool {
        command.contains("time") && !command.contains("set timer")
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        Ok(format!(
            "The current time is {}.",
            Local::now().format("%H:%M:%S")
        ))
    }
}

pub struct DateFeature;

#[async_trait]
impl FeatureHandler for DateFeature {
    fn name(&self) -> &'static str {
        "date"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["date"]
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        Ok(format!("Today's date is {}.", Local::now().format("%Y-%m-%d")))
    }
}

/// Matches "day" anywhere, including "today" and "holiday".
pub struct DayFeature;

#[async_trait]
impl FeatureHandler for DayFeature {
    fn name(&self) -> &'static str {
        "day"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["day"]
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        Ok(format!("Today is {}.", Local::now().format("%A")))
    }
}
