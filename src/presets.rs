//! Sample purchases for quick input, ascending by price.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::services::ProductInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorPreset {
    pub id: String,
    pub label: String,
    pub name: String,
    pub price: u64,
    pub years: u32,
    pub months: u32,
}

impl CalculatorPreset {
    fn new(id: &str, label: &str, name: &str, price: u64, years: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            name: name.into(),
            price,
            years,
            months: 0,
        }
    }

    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            price: self.price as f64,
            years: self.years as i64,
            months: self.months as i64,
        }
    }
}

// Prices follow 2024-2025 retail medians.
pub static CALCULATOR_PRESETS: Lazy<Vec<CalculatorPreset>> = Lazy::new(|| {
    vec![
        CalculatorPreset::new("kindle", "Kindle", "Kindle Paperwhite", 20_000, 4),
        CalculatorPreset::new("switch", "Game console", "Nintendo Switch 2", 50_000, 5),
        CalculatorPreset::new("robot-cleaner", "Vacuum", "Robot vacuum", 60_000, 5),
        CalculatorPreset::new("smartphone", "Smartphone", "iPhone 16", 125_000, 3),
        CalculatorPreset::new("pc", "MacBook", "MacBook Air M3", 165_000, 5),
        CalculatorPreset::new("appliance", "Appliance", "Drum washing machine", 200_000, 10),
        CalculatorPreset::new("gaming-pc", "Gaming PC", "Gaming PC", 230_000, 5),
        CalculatorPreset::new("camera", "Camera", "Full-frame camera", 250_000, 7),
    ]
});

pub fn calculator_presets() -> &'static [CalculatorPreset] {
    &CALCULATOR_PRESETS
}

pub fn find_preset(id: &str) -> Option<&'static CalculatorPreset> {
    calculator_presets()
        .iter()
        .find(|preset| preset.id.eq_ignore_ascii_case(id))
}
