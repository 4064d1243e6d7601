use tracing::info;

use crate::storage::{KeyValueStore, MemoryStore};

use super::services::{
    CalculateDailyCostInput, CalculationResult, CalculationService, HistoryService, ProductInput,
    ServiceError, TelemetryEvent, TelemetryReporter,
};

pub const DEFAULT_PRODUCT_NAME: &str = "Item";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculateParams {
    pub name: Option<String>,
    pub price: f64,
    pub years: i64,
    pub months: i64,
}

/// One calculator screen: the latest result or error, plus the collaborators
/// that successes are forwarded to.
pub struct Calculator {
    history: HistoryService<Box<dyn KeyValueStore>>,
    telemetry: TelemetryReporter,
    user_agent: Option<String>,
    result: Option<CalculationResult>,
    error: Option<ServiceError>,
}

impl Calculator {
    pub fn new(
        history: HistoryService<Box<dyn KeyValueStore>>,
        telemetry: TelemetryReporter,
    ) -> Self {
        Self {
            history,
            telemetry,
            user_agent: None,
            result: None,
            error: None,
        }
    }

    /// Memory-backed history, telemetry off.
    pub fn in_memory() -> Self {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        Self::new(HistoryService::new(store), TelemetryReporter::disabled())
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn calculate(&mut self, params: CalculateParams) -> Option<&CalculationResult> {
        // Only an absent name falls back to the default; whitespace is validated as typed.
        let product_name = params.name.filter(|name| !name.is_empty());
        let input = CalculateDailyCostInput {
            products: vec![ProductInput {
                name: product_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
                price: params.price,
                years: params.years,
                months: params.months,
            }],
        };

        let outcome = CalculationService::execute(&input).and_then(|output| {
            CalculationResult::from_output(&output, product_name).ok_or_else(|| {
                ServiceError::Invalid("expected exactly one product".into())
            })
        });

        match outcome {
            Ok(result) => {
                info!(daily = result.daily_cost, "calculation succeeded");
                self.history.add_to_history(result.clone());
                let mut event = TelemetryEvent::from_result(&result);
                event.user_agent = self.user_agent.clone();
                self.telemetry.report(&event);
                self.error = None;
                self.result = Some(result);
            }
            Err(err) => {
                info!(error = %err, "calculation rejected");
                self.result = None;
                self.error = Some(err);
            }
        }
        self.result.as_ref()
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ServiceError> {
        self.error.as_ref()
    }

    /// User-facing message for the last failure.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
    }

    pub fn history(&self) -> &HistoryService<Box<dyn KeyValueStore>> {
        &self.history
    }

    pub fn telemetry(&self) -> &TelemetryReporter {
        &self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{TelemetryError, TelemetrySink};
    use crate::errors::{CostError, ValidationError};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<TelemetryEvent>>>);

    impl TelemetrySink for Recording {
        fn submit(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
            self.0.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    fn params(name: Option<&str>, price: f64, years: i64, months: i64) -> CalculateParams {
        CalculateParams {
            name: name.map(str::to_string),
            price,
            years,
            months,
        }
    }

    #[test]
    fn success_records_history_and_telemetry() {
        let sink = Recording::default();
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let mut calculator = Calculator::new(
            HistoryService::new(store),
            TelemetryReporter::new(Box::new(sink.clone())),
        )
        .with_user_agent("test-agent");

        let result = calculator
            .calculate(params(Some("Laptop"), 150_000.0, 3, 0))
            .cloned()
            .expect("valid calculation");
        assert_eq!(result.daily_cost, 136);
        assert_eq!(result.product_name.as_deref(), Some("Laptop"));
        assert!(calculator.error().is_none());
        assert_eq!(calculator.history().get_history().len(), 1);

        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].user_agent.as_deref(), Some("test-agent"));
        assert_eq!(events[0].price, 150_000);
    }

    #[test]
    fn failure_clears_result_and_keeps_message() {
        let mut calculator = Calculator::in_memory();
        calculator.calculate(params(None, 36_500.0, 1, 0));
        assert!(calculator.result().is_some());

        assert!(calculator.calculate(params(None, 36_500.0, 0, 0)).is_none());
        assert!(calculator.result().is_none());
        assert!(matches!(
            calculator.error(),
            Some(ServiceError::Cost(CostError::Validation(
                ValidationError::PeriodTooShort
            )))
        ));
        assert_eq!(
            calculator.error_message().as_deref(),
            Some("Usage period must be at least 1 month")
        );
        assert_eq!(calculator.history().get_history().len(), 1);
    }

    #[test]
    fn empty_name_uses_default_and_is_not_recorded() {
        let mut calculator = Calculator::in_memory();
        let result = calculator
            .calculate(params(Some(""), 3_000.0, 0, 3))
            .cloned()
            .unwrap();
        assert_eq!(result.product_name, None);
        assert_eq!(result.daily_cost, 32);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut calculator = Calculator::in_memory();
        assert!(calculator
            .calculate(params(Some("   "), 3_000.0, 0, 3))
            .is_none());
        assert!(matches!(
            calculator.error(),
            Some(ServiceError::Cost(CostError::Validation(
                ValidationError::EmptyName
            )))
        ));
        assert!(calculator.error_message().is_some());
        assert!(calculator.history().get_history().is_empty());
    }

    #[test]
    fn names_are_length_checked_untrimmed() {
        let mut calculator = Calculator::in_memory();
        let padded = format!("{} ", "a".repeat(100));
        assert!(calculator
            .calculate(params(Some(padded.as_str()), 3_000.0, 0, 3))
            .is_none());
        assert!(matches!(
            calculator.error(),
            Some(ServiceError::Cost(CostError::Validation(
                ValidationError::NameTooLong { len: 101, max: 100 }
            )))
        ));

        let exact = "a".repeat(100);
        let result = calculator
            .calculate(params(Some(exact.as_str()), 3_000.0, 0, 3))
            .cloned()
            .expect("100 characters is allowed");
        assert_eq!(result.product_name.as_deref(), Some(exact.as_str()));
    }

    #[test]
    fn reset_clears_state() {
        let mut calculator = Calculator::in_memory();
        calculator.calculate(params(None, -1.0, 1, 0));
        assert!(calculator.error().is_some());
        calculator.reset();
        assert!(calculator.error().is_none());
        assert!(calculator.result().is_none());
    }
}
