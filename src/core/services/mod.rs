pub mod calculation_service;
pub mod history_service;
pub mod telemetry_service;

pub use calculation_service::{
    CalculateDailyCostInput, CalculateDailyCostOutput, CalculationResult, CalculationService,
    ProductBreakdown, ProductInput,
};
pub use history_service::{HistoryService, SavedCalculation};
pub use telemetry_service::{
    JsonLinesSink, TelemetryError, TelemetryEvent, TelemetryReporter, TelemetrySink,
};

use crate::errors::{CostError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Cost(#[from] CostError),
    #[error("{0}")]
    Invalid(String),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Cost(err.into())
    }
}
