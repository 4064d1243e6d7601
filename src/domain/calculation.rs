use serde::Serialize;

use crate::errors::IndexError;

use super::{daily_cost::DailyCost, product::Product};

/// An ordered basket of products whose daily costs are summed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Calculation {
    products: Vec<Product>,
}

impl Calculation {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes and returns the product at `index`.
    pub fn remove_product(&mut self, index: isize) -> Result<Product, IndexError> {
        if index < 0 {
            return Err(IndexError::Negative(index));
        }
        let index = index as usize;
        if index >= self.products.len() {
            return Err(IndexError::NotFound {
                index,
                len: self.products.len(),
            });
        }
        Ok(self.products.remove(index))
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Sums each product's already-floored daily cost.
    pub fn calculate_total_daily_cost(&self) -> DailyCost {
        self.products
            .iter()
            .map(Product::calculate_daily_cost)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
