pub mod calculator;
pub mod services;

pub use calculator::{CalculateParams, Calculator};
