use crate::shared::lenient;
use crate::shared::slug::slugify_dealer_name;
use serde::Deserialize;

/// Length of the model-range code at the start of a chassis number
pub const MODEL_RANGE_LEN: usize = 3;

/// Заказ: складской, перераспределение или позиция производственного графика.
///
/// Все поля необязательны: данные приходят как есть из внешней базы.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Order {
    #[serde(rename = "Chassis", default, deserialize_with = "lenient::opt_string")]
    pub chassis: Option<String>,
    #[serde(rename = "Dealer", default, deserialize_with = "lenient::opt_string")]
    pub dealer: Option<String>,
    #[serde(rename = "Customer", default, deserialize_with = "lenient::opt_string")]
    pub customer: Option<String>,
    #[serde(rename = "Model", default, deserialize_with = "lenient::opt_string")]
    pub model: Option<String>,
    #[serde(rename = "Model Year", default, deserialize_with = "lenient::opt_string")]
    pub model_year: Option<String>,
    #[serde(
        rename = "Forecast Production Date",
        default,
        deserialize_with = "lenient::opt_string"
    )]
    pub forecast_production_date: Option<String>,
    #[serde(rename = "Order Received Date", default, deserialize_with = "lenient::opt_string")]
    pub order_received_date: Option<String>,
    #[serde(rename = "Signed Plans Received", default, deserialize_with = "lenient::opt_string")]
    pub signed_plans_received: Option<String>,
    #[serde(rename = "Purchase Order Sent", default, deserialize_with = "lenient::opt_string")]
    pub purchase_order_sent: Option<String>,
    #[serde(rename = "Price Date", default, deserialize_with = "lenient::opt_string")]
    pub price_date: Option<String>,
    #[serde(rename = "Request Delivery Date", default, deserialize_with = "lenient::opt_string")]
    pub request_delivery_date: Option<String>,
    #[serde(rename = "Production Date", default, deserialize_with = "lenient::opt_string")]
    pub production_date: Option<String>,
    #[serde(rename = "Shipment", default, deserialize_with = "lenient::opt_string")]
    pub shipment: Option<String>,
}

impl Order {
    pub fn chassis_key(&self) -> &str {
        self.chassis.as_deref().unwrap_or_default()
    }

    pub fn dealer_slug(&self) -> String {
        slugify_dealer_name(self.dealer.as_deref().unwrap_or_default())
    }

    /// Складской заказ: поле Customer заканчивается на "stock"
    pub fn is_stock(&self) -> bool {
        self.customer
            .as_deref()
            .is_some_and(|c| c.to_lowercase().ends_with("stock"))
    }

    /// First three characters of the chassis, upper-cased.
    pub fn model_range(&self) -> String {
        self.chassis_key()
            .chars()
            .take(MODEL_RANGE_LEN)
            .collect::<String>()
            .to_uppercase()
    }

    /// Labelled milestone dates in display order, absent ones skipped.
    pub fn milestones(&self) -> Vec<(&'static str, &str)> {
        [
            ("Order Received", &self.order_received_date),
            ("Signed Plans Received", &self.signed_plans_received),
            ("Purchase Order Sent", &self.purchase_order_sent),
            ("Price Date", &self.price_date),
            ("Requested Delivery", &self.request_delivery_date),
            ("Production Date", &self.production_date),
            ("Shipment", &self.shipment),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(customer: &str) -> Order {
        Order {
            customer: Some(customer.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_decode_from_wire() {
        let order: Order = serde_json::from_value(json!({
            "Chassis": "NCA12345",
            "Dealer": "Acme Motors",
            "Customer": "Fleet Stock",
            "Model": "NC19",
            "Model Year": 2025,
            "Forecast Production Date": "2025-03-01",
            "Unknown Column": "ignored"
        }))
        .unwrap();

        assert_eq!(order.chassis_key(), "NCA12345");
        assert_eq!(order.model_year.as_deref(), Some("2025"));
        assert_eq!(order.dealer_slug(), "acme-motors");
        assert_eq!(order.shipment, None);
    }

    #[test]
    fn test_stock_classification() {
        assert!(order("Fleet Stock").is_stock());
        assert!(order("STOCK").is_stock());
        assert!(order("dealer stock").is_stock());
        assert!(!order("Fleet Stocked").is_stock());
        assert!(!order("Stock for J. Smith").is_stock());
        assert!(!Order::default().is_stock());
    }

    #[test]
    fn test_model_range() {
        let o = Order {
            chassis: Some("abcd1234".to_string()),
            ..Default::default()
        };
        assert_eq!(o.model_range(), "ABC");
        assert_eq!(Order::default().model_range(), "");
    }

    #[test]
    fn test_milestones_skip_empty() {
        let o = Order {
            order_received_date: Some("2025-01-02".to_string()),
            price_date: Some(String::new()),
            shipment: Some("SHIP-7".to_string()),
            ..Default::default()
        };
        assert_eq!(
            o.milestones(),
            vec![("Order Received", "2025-01-02"), ("Shipment", "SHIP-7")]
        );
    }
}
