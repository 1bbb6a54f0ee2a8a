//! Streaming snapshot model for the realtime database REST protocol.
//!
//! Сервер шлёт события `put` / `patch` с полями `path` и `data`.
//! Клиент держит у себя полный снапшот коллекции и после каждого события
//! отдаёт подписчику актуальное состояние целиком.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealtimeError {
    #[error("Unknown stream event: {0}")]
    UnknownEvent(String),

    #[error("Malformed {event} payload: {source}")]
    MalformedPayload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StreamPayload {
    pub path: String,
    #[serde(default)]
    pub data: Value,
}

/// Событие потока
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Put(StreamPayload),
    Patch(StreamPayload),
    KeepAlive,
    Cancel,
    AuthRevoked,
}

impl StreamEvent {
    /// Event names the client has to listen for.
    pub const NAMES: [&'static str; 5] = ["put", "patch", "keep-alive", "cancel", "auth_revoked"];

    pub fn parse(name: &str, raw: &str) -> Result<Self, RealtimeError> {
        let payload = |event: &str| {
            serde_json::from_str::<StreamPayload>(raw).map_err(|source| {
                RealtimeError::MalformedPayload {
                    event: event.to_string(),
                    source,
                }
            })
        };

        match name {
            "put" => Ok(Self::Put(payload(name)?)),
            "patch" => Ok(Self::Patch(payload(name)?)),
            "keep-alive" => Ok(Self::KeepAlive),
            "cancel" => Ok(Self::Cancel),
            "auth_revoked" => Ok(Self::AuthRevoked),
            other => Err(RealtimeError::UnknownEvent(other.to_string())),
        }
    }
}

/// What the subscriber should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// Snapshot changed, deliver it.
    Deliver,
    /// Nothing to deliver.
    Ignore,
    /// Server ended the stream.
    Closed,
}

/// Локальная копия коллекции, которую поддерживает поток событий.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    root: Value,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while the collection is empty or absent.
    pub fn current(&self) -> Option<Value> {
        match &self.root {
            Value::Null => None,
            other => Some(other.clone()),
        }
    }

    pub fn apply(&mut self, event: StreamEvent) -> StreamOutcome {
        match event {
            StreamEvent::Put(StreamPayload { path, data }) => {
                put_at(&mut self.root, &path, data);
                StreamOutcome::Deliver
            }
            StreamEvent::Patch(StreamPayload { path, data }) => {
                patch_at(&mut self.root, &path, data);
                StreamOutcome::Deliver
            }
            StreamEvent::KeepAlive => StreamOutcome::Ignore,
            StreamEvent::Cancel | StreamEvent::AuthRevoked => StreamOutcome::Closed,
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Replace the value at `path`. `null` removes the child.
pub fn put_at(root: &mut Value, path: &str, data: Value) {
    let segs = segments(path);
    let Some((last, parents)) = segs.split_last() else {
        *root = data;
        return;
    };

    if data.is_null() {
        remove_at(root, &segs);
        if is_empty_node(root) {
            *root = Value::Null;
        }
        return;
    }

    let mut node = root;
    for seg in parents {
        node = child_mut(node, seg);
    }
    *child_mut(node, last) = data;
}

/// Delete along an existing path only; parents left empty are removed too.
fn remove_at(node: &mut Value, segs: &[&str]) {
    match segs {
        [] => {}
        [last] => remove_child(node, last),
        [first, rest @ ..] => {
            let Some(child) = existing_child_mut(node, first) else {
                return;
            };
            remove_at(child, rest);
            if is_empty_node(child) {
                remove_child(node, first);
            }
        }
    }
}

fn existing_child_mut<'a>(node: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get_mut(idx)),
        _ => None,
    }
}

// База не хранит пустые узлы
fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.iter().all(Value::is_null),
        _ => false,
    }
}

/// Merge the children of `data` into the value at `path`.
pub fn patch_at(root: &mut Value, path: &str, data: Value) {
    let base = path.trim_end_matches('/');
    match data {
        Value::Object(children) => {
            for (key, value) in children {
                put_at(root, &format!("{base}/{key}"), value);
            }
        }
        other => put_at(root, path, other),
    }
}

fn child_mut<'a>(node: &'a mut Value, key: &str) -> &'a mut Value {
    let array_idx = match (&*node, key.parse::<usize>()) {
        (Value::Array(items), Ok(idx)) if idx < items.len() => Some(idx),
        _ => None,
    };

    if array_idx.is_none() && !node.is_object() {
        *node = into_object(std::mem::take(node));
    }

    match (node, array_idx) {
        (Value::Array(items), Some(idx)) => &mut items[idx],
        (Value::Object(map), _) => map.entry(key.to_string()).or_insert(Value::Null),
        _ => unreachable!("node is either an indexed array or an object here"),
    }
}

fn remove_child(node: &mut Value, key: &str) {
    match node {
        Value::Object(map) => {
            map.shift_remove(key);
        }
        Value::Array(items) => {
            if let Some(slot) = key.parse::<usize>().ok().and_then(|idx| items.get_mut(idx)) {
                *slot = Value::Null;
            }
        }
        _ => {}
    }
}

// Массив превращается в объект с индексами в качестве ключей
fn into_object(value: Value) -> Value {
    let mut map = Map::new();
    if let Value::Array(items) = value {
        for (idx, item) in items.into_iter().enumerate() {
            if !item.is_null() {
                map.insert(idx.to_string(), item);
            }
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn put(path: &str, data: Value) -> StreamEvent {
        StreamEvent::Put(StreamPayload {
            path: path.to_string(),
            data,
        })
    }

    #[test]
    fn test_parse_events() {
        let ev = StreamEvent::parse("put", r#"{"path":"/","data":{"a":1}}"#).unwrap();
        assert_eq!(ev, put("/", json!({ "a": 1 })));

        assert_eq!(StreamEvent::parse("keep-alive", "null").unwrap(), StreamEvent::KeepAlive);
        assert_eq!(StreamEvent::parse("cancel", "null").unwrap(), StreamEvent::Cancel);
        assert!(matches!(
            StreamEvent::parse("put", "not json"),
            Err(RealtimeError::MalformedPayload { .. })
        ));
        assert!(matches!(
            StreamEvent::parse("bogus", "{}"),
            Err(RealtimeError::UnknownEvent(_))
        ));
    }

    #[test]
    fn test_root_put_replaces_snapshot() {
        let mut snap = Snapshot::new();
        assert_eq!(snap.current(), None);

        assert_eq!(snap.apply(put("/", json!({ "A1": { "Dealer": "x" } }))), StreamOutcome::Deliver);
        assert_eq!(snap.current(), Some(json!({ "A1": { "Dealer": "x" } })));

        snap.apply(put("/", Value::Null));
        assert_eq!(snap.current(), None);
    }

    #[test]
    fn test_nested_put_and_delete() {
        let mut snap = Snapshot::new();
        snap.apply(put("/", json!({ "A1": { "Dealer": "x" }, "B2": { "Dealer": "y" } })));

        snap.apply(put("/A1/Customer", json!("Fleet Stock")));
        assert_eq!(snap.current().unwrap()["A1"]["Customer"], json!("Fleet Stock"));

        snap.apply(put("/B2", Value::Null));
        assert_eq!(snap.current(), Some(json!({ "A1": { "Dealer": "x", "Customer": "Fleet Stock" } })));
    }

    #[test]
    fn test_put_into_empty_snapshot_creates_parents() {
        let mut snap = Snapshot::new();
        snap.apply(put("/north/name", json!("North")));
        assert_eq!(snap.current(), Some(json!({ "north": { "name": "North" } })));
    }

    #[test]
    fn test_patch_merges_children() {
        let mut snap = Snapshot::new();
        snap.apply(put("/", json!({ "A1": { "Dealer": "x", "Model": "M1" } })));

        let outcome = snap.apply(StreamEvent::Patch(StreamPayload {
            path: "/A1".to_string(),
            data: json!({ "Model": "M2", "Model Year": 2025 }),
        }));
        assert_eq!(outcome, StreamOutcome::Deliver);
        assert_eq!(
            snap.current(),
            Some(json!({ "A1": { "Dealer": "x", "Model": "M2", "Model Year": 2025 } }))
        );
    }

    #[test]
    fn test_array_snapshot_updates_in_place() {
        let mut snap = Snapshot::new();
        snap.apply(put("/", json!([{ "Chassis": "A" }, { "Chassis": "B" }])));
        snap.apply(put("/1/Chassis", json!("C")));
        assert_eq!(snap.current(), Some(json!([{ "Chassis": "A" }, { "Chassis": "C" }])));

        snap.apply(put("/0", Value::Null));
        assert_eq!(snap.current(), Some(json!([null, { "Chassis": "C" }])));

        // индекс за пределами массива: массив становится объектом
        snap.apply(put("/5", json!({ "Chassis": "D" })));
        assert_eq!(snap.current(), Some(json!({ "1": { "Chassis": "C" }, "5": { "Chassis": "D" } })));
    }

    #[test]
    fn test_delete_of_missing_path_creates_nothing() {
        let mut snap = Snapshot::new();
        snap.apply(put("/A9/Customer", Value::Null));
        assert_eq!(snap.current(), None);

        snap.apply(put("/", json!({ "A1": { "Dealer": "x" } })));
        snap.apply(put("/B2/Customer", Value::Null));
        assert_eq!(snap.current(), Some(json!({ "A1": { "Dealer": "x" } })));
    }

    #[test]
    fn test_delete_prunes_empty_parents() {
        let mut snap = Snapshot::new();
        snap.apply(put("/", json!({ "A1": { "Customer": "x" }, "B2": { "Customer": "y" } })));

        snap.apply(put("/A1/Customer", Value::Null));
        assert_eq!(snap.current(), Some(json!({ "B2": { "Customer": "y" } })));

        snap.apply(put("/B2/Customer", Value::Null));
        assert_eq!(snap.current(), None);
    }

    #[test]
    fn test_control_events() {
        let mut snap = Snapshot::new();
        assert_eq!(snap.apply(StreamEvent::KeepAlive), StreamOutcome::Ignore);
        assert_eq!(snap.apply(StreamEvent::AuthRevoked), StreamOutcome::Closed);
    }
}
