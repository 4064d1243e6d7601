use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::utils::ensure_dir;

use super::CalculationResult;

/// Anonymous record of one successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub price: u64,
    pub years: u32,
    pub months: u32,
    pub daily_cost: u64,
    pub monthly_cost: u64,
    pub yearly_cost: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TelemetryEvent {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            product_name: result.product_name.clone(),
            price: result.price,
            years: result.years,
            months: result.months,
            daily_cost: result.daily_cost,
            monthly_cost: result.monthly_cost,
            yearly_cost: result.yearly_cost,
            user_agent: None,
            referrer: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Telemetry rejected: {0}")]
    Rejected(String),
}

pub trait TelemetrySink: Send + Sync {
    fn submit(&self, event: &TelemetryEvent) -> Result<(), TelemetryError>;
}

/// Appends one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TelemetrySink for JsonLinesSink {
    fn submit(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let mut line = serde_json::to_string(event)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Fire-and-forget submission; a missing sink disables reporting.
#[derive(Default)]
pub struct TelemetryReporter {
    sink: Option<Box<dyn TelemetrySink>>,
}

impl TelemetryReporter {
    pub fn new(sink: Box<dyn TelemetrySink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn report(&self, event: &TelemetryEvent) {
        let Some(sink) = &self.sink else {
            return;
        };
        match sink.submit(event) {
            Ok(()) => debug!("telemetry submitted"),
            Err(err) => warn!(error = %err, "failed to submit telemetry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn event() -> TelemetryEvent {
        TelemetryEvent {
            product_name: Some("Laptop".into()),
            price: 150_000,
            years: 3,
            months: 0,
            daily_cost: 136,
            monthly_cost: 4_080,
            yearly_cost: 49_640,
            user_agent: None,
            referrer: None,
            created_at: Utc::now(),
        }
    }

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<TelemetryEvent>>>);

    impl TelemetrySink for Recording {
        fn submit(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
            self.0.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    struct Failing;

    impl TelemetrySink for Failing {
        fn submit(&self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
            Err(TelemetryError::Rejected("offline".into()))
        }
    }

    #[test]
    fn disabled_reporter_does_nothing() {
        let reporter = TelemetryReporter::disabled();
        assert!(!reporter.is_enabled());
        reporter.report(&event());
    }

    #[test]
    fn events_reach_the_sink() {
        let sink = Recording::default();
        let reporter = TelemetryReporter::new(Box::new(sink.clone()));
        assert!(reporter.is_enabled());
        reporter.report(&event());
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn sink_failures_are_swallowed() {
        TelemetryReporter::new(Box::new(Failing)).report(&event());
    }

    #[test]
    fn json_lines_append() {
        let temp = TempDir::new().expect("temp dir");
        let sink = JsonLinesSink::new(temp.path().join("nested").join("telemetry.jsonl"));
        sink.submit(&event()).unwrap();
        sink.submit(&event().with_user_agent("nichiwari_cli/0.1.0")).unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["daily_cost"], 136);
        assert!(first["created_at"].is_string());
        assert!(first.get("user_agent").is_none());
        let second: TelemetryEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.user_agent.as_deref(), Some("nichiwari_cli/0.1.0"));
    }
}
