//! Reminder and timer commands.
//!
//! Both parse an amount and unit out of the command, hand a delayed task
//! to the scheduler and confirm right away.

use super::FeatureHandler;
use crate::error::RouterResult;
use crate::scheduler::{ScheduledTask, Scheduler};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

static REMINDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"remind me to (.+) in (\d+) (minutes?|hours?)").expect("valid reminder regex")
});

static TIMER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"set timer for (\d+) (seconds?|minutes?|hours?)").expect("valid timer regex")
});

/// Seconds per unit, accepting singular and plural.
fn unit_seconds(unit: &str) -> Option<u64> {
    match unit.trim_end_matches('s') {
        "second" => Some(1),
        "minute" => Some(60),
        "hour" => Some(3600),
        _ => None,
    }
}

/// A parsed "<amount> <unit>" duration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    amount: u64,
    unit: String,
    delay: Duration,
}

impl Span {
    /// `None` when the amount does not fit or the delay overflows.
    fn parse(amount: &str, unit: &str) -> Option<Self> {
        let amount: u64 = amount.parse().ok()?;
        let secs = amount.checked_mul(unit_seconds(unit)?)?;
        Some(Self {
            amount,
            unit: unit.to_string(),
            delay: Duration::from_secs(secs),
        })
    }
}

/// Parsed reminder: task text and when to fire.
fn parse_reminder(command: &str) -> Option<(String, Span)> {
    let caps = REMINDER_PATTERN.captures(command)?;
    let span = Span::parse(&caps[2], &caps[3])?;
    Some((caps[1].to_string(), span))
}

fn parse_timer(command: &str) -> Option<Span> {
    let caps = TIMER_PATTERN.captures(command)?;
    Span::parse(&caps[1], &caps[2])
}

pub struct ReminderFeature {
    scheduler: Arc<dyn Scheduler>,
}

impl ReminderFeature {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self { scheduler }
    }
}

#[async_trait]
impl FeatureHandler for ReminderFeature {
    fn name(&self) -> &'static str {
        "reminder"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["remind me to"]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let Some((task, span)) = parse_reminder(command) else {
            return Ok("I couldn't understand your reminder request.".into());
        };

        debug!(task = %task, delay_secs = span.delay.as_secs(), "Setting reminder");
        self.scheduler
            .schedule(span.delay, ScheduledTask::reminder(&task))?;

        Ok(format!(
            "Reminder set: '{}' in {} {}(s).",
            task, span.amount, span.unit
        ))
    }
}

pub struct TimerFeature {
    scheduler: Arc<dyn Scheduler>,
}

impl TimerFeature {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self { scheduler }
    }
}

#[async_trait]
impl FeatureHandler for TimerFeature {
    fn name(&self) -> &'static str {
        "timer"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["set timer"]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let Some(span) = parse_timer(command) else {
            return Ok("Please specify the duration for the timer.".into());
        };

        debug!(delay_secs = span.delay.as_secs(), "Setting timer");
        self.scheduler
            .schedule(span.delay, ScheduledTask::timer(span.amount, &span.unit))?;

        Ok(format!(
            "Setting a timer for {} {}(s).",
            span.amount, span.unit
        ))
    }
}
