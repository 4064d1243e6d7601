use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An everyday expense used as a yardstick for amortized costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub unit: String,
}

impl ComparisonItem {
    pub fn new(id: &str, name: &str, price: u64, unit: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            unit: unit.into(),
        }
    }
}

/// Built-in catalog, ascending by price.
pub static COMPARISON_ITEMS: Lazy<Vec<ComparisonItem>> = Lazy::new(|| {
    vec![
        // Small daily spending
        ComparisonItem::new("gum", "Chewing gum", 100, "pack"),
        ComparisonItem::new("vending", "Vending machine drink", 130, "bottle"),
        ComparisonItem::new("coffee", "Convenience store coffee", 150, "cup"),
        ComparisonItem::new("onigiri", "Rice ball", 150, "piece"),
        ComparisonItem::new("train", "Train fare (base)", 180, "ride"),
        ComparisonItem::new("bread", "Bakery bread", 250, "piece"),
        // Light meals
        ComparisonItem::new("convenience-bento", "Convenience store bento", 500, "box"),
        ComparisonItem::new("cafe-latte", "Cafe latte", 500, "cup"),
        ComparisonItem::new("manga", "Manga volume", 500, "volume"),
        ComparisonItem::new("book", "Paperback book", 700, "book"),
        ComparisonItem::new("lunch", "Lunch out", 800, "meal"),
        ComparisonItem::new("ramen", "Bowl of ramen", 900, "bowl"),
        ComparisonItem::new("subscription", "Video streaming plan", 1000, "month"),
        // Small treats
        ComparisonItem::new("dinner", "Dinner out", 1500, "meal"),
        ComparisonItem::new("karaoke", "Karaoke (2 hours)", 1500, "session"),
        ComparisonItem::new("spa", "Day trip to a hot spring", 1500, "visit"),
        ComparisonItem::new("movie", "Movie ticket", 1900, "ticket"),
        ComparisonItem::new("gym", "Gym visit", 2000, "visit"),
        // Weekend outings
        ComparisonItem::new("haircut", "Haircut", 4000, "visit"),
        ComparisonItem::new("drinking", "Night out drinking", 4000, "night"),
        ComparisonItem::new("smartphone", "Smartphone installment", 4000, "month"),
        ComparisonItem::new("massage", "Massage", 6000, "session"),
        ComparisonItem::new("theme-park", "Theme park ticket", 8000, "ticket"),
        ComparisonItem::new("concert", "Live concert", 8000, "ticket"),
        ComparisonItem::new("hotel", "Hotel stay", 8000, "night"),
        // Special occasions
        ComparisonItem::new("domestic-trip", "Weekend trip (1 night)", 30000, "trip"),
        ComparisonItem::new("ski-trip", "Ski trip (2 days)", 35000, "trip"),
    ]
});

pub fn comparison_items() -> &'static [ComparisonItem] {
    &COMPARISON_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_sorted_and_positive() {
        let items = comparison_items();
        assert!(items.len() >= 25);
        assert!(items.iter().all(|item| item.price > 0));
        assert!(items.windows(2).all(|pair| pair[0].price <= pair[1].price));
        assert_eq!(items.first().map(|item| item.price), Some(100));
        assert_eq!(items.last().map(|item| item.price), Some(35000));
    }

    #[test]
    fn ids_and_names_are_unique() {
        let items = comparison_items();
        let ids: HashSet<_> = items.iter().map(|item| item.id.as_str()).collect();
        let names: HashSet<_> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(names.len(), items.len());
    }
}
