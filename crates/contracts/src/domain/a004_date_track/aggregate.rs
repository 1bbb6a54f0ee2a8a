use crate::shared::lenient::{self, collection_entries};
use serde::Deserialize;
use serde_json::Value;

/// Логистика по шасси: отгрузка с завода, выход из порта, приход в порт назначения
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DateTrackEntry {
    #[serde(rename = "Chassis Number", default, deserialize_with = "lenient::opt_string")]
    pub chassis_number: Option<String>,
    #[serde(rename = "Dispatched from Factory", default, deserialize_with = "lenient::opt_string")]
    pub dispatched_from_factory: Option<String>,
    #[serde(rename = "Left Port", default, deserialize_with = "lenient::opt_string")]
    pub left_port: Option<String>,
    #[serde(rename = "Received in Melbourne", default, deserialize_with = "lenient::opt_string")]
    pub received_in_melbourne: Option<String>,
}

impl DateTrackEntry {
    /// Milestones in shipping order with their display labels.
    pub fn milestones(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("Dispatched from Factory", self.dispatched_from_factory.as_deref()),
            ("Left Port", self.left_port.as_deref()),
            ("Received in Melbourne", self.received_in_melbourne.as_deref()),
        ]
    }
}

/// Date-track records in snapshot order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateTracks(Vec<(String, DateTrackEntry)>);

impl DateTracks {
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        let entries = collection_entries(value)
            .into_iter()
            .filter(|(_, raw)| raw.is_object())
            .filter_map(|(key, raw)| {
                serde_json::from_value::<DateTrackEntry>(raw.clone())
                    .ok()
                    .map(|entry| (key, entry))
            })
            .collect();
        Self(entries)
    }

    /// Exact key match first, then the first record whose
    /// `Chassis Number` equals the chassis.
    pub fn find_for_chassis(&self, chassis: &str) -> Option<&DateTrackEntry> {
        if chassis.is_empty() {
            return None;
        }
        self.0
            .iter()
            .find(|(key, _)| key == chassis)
            .or_else(|| {
                self.0
                    .iter()
                    .find(|(_, entry)| entry.chassis_number.as_deref() == Some(chassis))
            })
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
