use crate::shared::lenient::{self, collection_entries};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Спецификация и план по шасси. Только для отображения.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpecPlanEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub spec: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub plan: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

impl SpecPlanEntry {
    pub fn is_empty(&self) -> bool {
        self.spec.is_none() && self.plan.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecPlans(BTreeMap<String, SpecPlanEntry>);

impl SpecPlans {
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        let entries = collection_entries(value)
            .into_iter()
            .filter_map(|(chassis, raw)| {
                let entry = match raw {
                    // допускается просто ссылка на план
                    Value::String(link) => SpecPlanEntry {
                        plan: Some(link.clone()),
                        ..Default::default()
                    },
                    Value::Object(_) => serde_json::from_value(raw.clone()).ok()?,
                    _ => return None,
                };
                Some((chassis, entry))
            })
            .collect();
        Self(entries)
    }

    pub fn get(&self, chassis: &str) -> Option<&SpecPlanEntry> {
        self.0.get(chassis).filter(|entry| !entry.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
