use crate::shared::lenient::{self, collection_entries, scalar_to_string};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Aggregate
// ============================================================================

/// Настройки портала дилера: одиночный дилер или группа дилеров
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "DealerConfigRecord")]
pub enum DealerConfig {
    SingleDealer(SingleDealer),
    DealerGroup(DealerGroup),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleDealer {
    pub name: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DealerGroup {
    pub name: Option<String>,
    pub is_active: bool,
    /// Слаги дилеров группы, в исходном порядке (без дедупликации)
    pub included_dealers: Vec<String>,
}

/// All dealer configs keyed by dealer slug
pub type DealerConfigs = BTreeMap<String, DealerConfig>;

impl DealerConfig {
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Self::SingleDealer(d) => d.name.as_deref(),
            Self::DealerGroup(g) => g.name.as_deref(),
        };
        name.filter(|name| !name.is_empty())
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::SingleDealer(d) => d.is_active,
            Self::DealerGroup(g) => g.is_active,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::DealerGroup(_))
    }

    /// Members of a group, `None` for a single dealer.
    pub fn included_dealers(&self) -> Option<&[String]> {
        match self {
            Self::SingleDealer(_) => None,
            Self::DealerGroup(g) => Some(&g.included_dealers),
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DealerConfigRecord {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    is_active: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    is_group: bool,
    #[serde(default)]
    included_dealers: Option<Value>,
}

impl From<DealerConfigRecord> for DealerConfig {
    fn from(record: DealerConfigRecord) -> Self {
        let members = record.included_dealers.as_ref().and_then(member_slugs);

        if record.is_group || members.is_some() {
            Self::DealerGroup(DealerGroup {
                name: record.name,
                is_active: record.is_active,
                included_dealers: members.unwrap_or_default(),
            })
        } else {
            Self::SingleDealer(SingleDealer {
                name: record.name,
                is_active: record.is_active,
            })
        }
    }
}

// Список приходит массивом, либо объектом с числовыми ключами
fn member_slugs(value: &Value) -> Option<Vec<String>> {
    if !(value.is_array() || value.is_object()) {
        return None;
    }
    Some(
        collection_entries(value)
            .into_iter()
            .filter_map(|(_, v)| scalar_to_string(v))
            .collect(),
    )
}

/// Decode a single pushed config. `null` and unreadable records yield `None`.
pub fn dealer_config_from_value(value: Option<&Value>) -> Option<DealerConfig> {
    let value = value.filter(|v| v.is_object())?;
    match serde_json::from_value::<DealerConfig>(value.clone()) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Skipping unreadable dealer config: {}", e);
            None
        }
    }
}

/// Decode the all-configs snapshot, skipping unreadable entries.
pub fn dealer_configs_from_value(value: Option<&Value>) -> DealerConfigs {
    let Some(value) = value else {
        return DealerConfigs::new();
    };
    collection_entries(value)
        .into_iter()
        .filter_map(|(slug, v)| dealer_config_from_value(Some(v)).map(|config| (slug, config)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_dealer() {
        let config = dealer_config_from_value(Some(&json!({
            "name": "Acme Motors",
            "isActive": true
        })))
        .unwrap();

        assert!(!config.is_group());
        assert!(config.is_active());
        assert_eq!(config.name(), Some("Acme Motors"));
        assert_eq!(config.included_dealers(), None);
    }

    #[test]
    fn test_group_by_member_list() {
        let config = dealer_config_from_value(Some(&json!({
            "isActive": true,
            "includedDealers": ["north", "south", "north"]
        })))
        .unwrap();

        assert!(config.is_group());
        assert_eq!(config.name(), None);
        // дубликаты сохраняются
        assert_eq!(
            config.included_dealers().unwrap(),
            &["north".to_string(), "south".to_string(), "north".to_string()]
        );
    }

    #[test]
    fn test_group_flag_without_members() {
        let config = dealer_config_from_value(Some(&json!({
            "name": "Coastal Group",
            "isGroup": true,
            "isActive": false
        })))
        .unwrap();

        assert!(config.is_group());
        assert!(!config.is_active());
        assert_eq!(config.included_dealers().unwrap().len(), 0);
    }

    #[test]
    fn test_members_as_object() {
        let config = dealer_config_from_value(Some(&json!({
            "isActive": true,
            "includedDealers": { "0": "north", "1": "south" }
        })))
        .unwrap();
        assert_eq!(config.included_dealers().unwrap(), &["north".to_string(), "south".to_string()]);
    }

    #[test]
    fn test_missing_active_flag_is_inactive() {
        let config = dealer_config_from_value(Some(&json!({ "name": "X" }))).unwrap();
        assert!(!config.is_active());
    }

    #[test]
    fn test_null_and_scalar_configs() {
        assert_eq!(dealer_config_from_value(None), None);
        assert_eq!(dealer_config_from_value(Some(&Value::Null)), None);
        assert_eq!(dealer_config_from_value(Some(&json!("oops"))), None);
    }

    #[test]
    fn test_all_configs() {
        let all = dealer_configs_from_value(Some(&json!({
            "north": { "name": "North Coast RV", "isActive": true },
            "south": null,
            "group": { "isGroup": true, "includedDealers": ["north"] }
        })));
        assert_eq!(all.len(), 2);
        assert_eq!(all["north"].name(), Some("North Coast RV"));
        assert!(all["group"].is_group());
        assert!(dealer_configs_from_value(None).is_empty());
    }
}
