use crate::domain::a001_dealer_config::{DealerConfig, DealerConfigs};
use crate::domain::a002_order::Order;
use crate::shared::lenient::{collection_entries, is_falsy};
use crate::shared::slug::prettify_dealer_name;
use serde_json::Value;
use std::collections::BTreeSet;

/// Коллекция заказов приходит массивом или объектом; пустые записи отбрасываются.
///
/// Only JSON objects are orders. serde would otherwise fill the fields of an
/// array entry by position.
pub fn decode_orders(value: Option<&Value>) -> Vec<Order> {
    let Some(value) = value else {
        return Vec::new();
    };

    collection_entries(value)
        .into_iter()
        .filter(|(_, raw)| !is_falsy(raw))
        .filter(|(key, raw)| {
            if !raw.is_object() {
                log::warn!("Skipping order '{}': not a record", key);
            }
            raw.is_object()
        })
        .filter_map(|(key, raw)| match serde_json::from_value::<Order>(raw.clone()) {
            Ok(order) => Some(order),
            Err(e) => {
                log::warn!("Skipping unreadable order '{}': {}", key, e);
                None
            }
        })
        .collect()
}

/// Orders whose slugified dealer name is in scope.
pub fn filter_by_dealers(orders: &[Order], dealer_slugs: &[String]) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| {
            let slug = order.dealer_slug();
            dealer_slugs.iter().any(|s| *s == slug)
        })
        .cloned()
        .collect()
}

pub fn stock_orders(orders: &[Order]) -> Vec<Order> {
    orders.iter().filter(|o| o.is_stock()).cloned().collect()
}

/// No range selected passes everything; otherwise both sides are compared upper-cased.
pub fn matches_model_range(order: &Order, range: Option<&str>) -> bool {
    match range.map(str::trim).filter(|r| !r.is_empty()) {
        None => true,
        Some(code) => order.model_range() == code.to_uppercase(),
    }
}

pub fn filter_by_model_range(orders: &[Order], range: Option<&str>) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| matches_model_range(o, range))
        .cloned()
        .collect()
}

/// Distinct model-range codes present in the orders, sorted.
pub fn model_range_options(orders: &[Order]) -> Vec<String> {
    orders
        .iter()
        .map(Order::model_range)
        .filter(|code| !code.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Имя дилера для заголовка.
///
/// With a selected member: its configured name, then its name as written on
/// one of its orders, then the prettified slug. Without one the same chain
/// runs for the portal's own config and slug.
pub fn dealer_display_name(
    dealer_slug: &str,
    config: Option<&DealerConfig>,
    selected_member: Option<&str>,
    all_configs: &DealerConfigs,
    orders: &[Order],
) -> String {
    let (slug, configured) = match selected_member.filter(|m| !m.is_empty()) {
        Some(member) => (member, all_configs.get(member).and_then(DealerConfig::name)),
        None => (dealer_slug, config.and_then(DealerConfig::name)),
    };

    if let Some(name) = configured {
        return name.to_string();
    }

    orders
        .iter()
        .filter(|order| order.dealer_slug() == slug)
        .find_map(|order| order.dealer.as_deref().filter(|d| !d.trim().is_empty()))
        .map(|d| d.trim().to_string())
        .unwrap_or_else(|| prettify_dealer_name(slug))
}
