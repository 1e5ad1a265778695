//! Test fixtures and builders
//!
//! Provides convenient builders for creating test receipts.

use receipt_points::core::models::{Item, Receipt};

/// Builder for creating test receipts
///
/// Defaults to a receipt that scores zero on every rule except the ones the
/// test changes: retailer `"_"`, even day, morning time, one item whose
/// description length is not a multiple of 3, and a total of `1.01`.
pub struct ReceiptBuilder {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Vec<Item>,
    total: String,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self {
            retailer: "_".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "09:00".to_string(),
            items: vec![Item::new("ab", "1.01")],
            total: "1.01".to_string(),
        }
    }

    pub fn retailer(mut self, retailer: &str) -> Self {
        self.retailer = retailer.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.purchase_date = date.to_string();
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.purchase_time = time.to_string();
        self
    }

    pub fn items(mut self, items: &[(&str, &str)]) -> Self {
        self.items = items.iter().map(|(d, p)| Item::new(*d, *p)).collect();
        self
    }

    pub fn total(mut self, total: &str) -> Self {
        self.total = total.to_string();
        self
    }

    pub fn build(self) -> Receipt {
        Receipt {
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self.items,
            total: self.total,
        }
    }
}

impl Default for ReceiptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The "Target" receipt from the service's published examples (28 points)
pub const TARGET_JSON: &str = r#"{
  "retailer": "Target",
  "purchaseDate": "2022-01-01",
  "purchaseTime": "13:01",
  "items": [
    {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
    {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
    {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
    {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
    {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
  ],
  "total": "35.35"
}"#;

/// The "M&M Corner Market" receipt from the service's published examples (109 points)
pub const CORNER_MARKET_JSON: &str = r#"{
  "retailer": "M&M Corner Market",
  "purchaseDate": "2022-03-20",
  "purchaseTime": "14:33",
  "items": [
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"},
    {"shortDescription": "Gatorade", "price": "2.25"}
  ],
  "total": "9.00"
}"#;

pub fn target_receipt() -> Receipt {
    serde_json::from_str(TARGET_JSON).unwrap()
}

pub fn corner_market_receipt() -> Receipt {
    serde_json::from_str(CORNER_MARKET_JSON).unwrap()
}

/// Serialize a receipt back to its wire JSON
pub fn to_json(receipt: &Receipt) -> String {
    serde_json::to_string(receipt).unwrap()
}
