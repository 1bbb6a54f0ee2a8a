//! Подписки на realtime базу через REST streaming (`text/event-stream`).
//!
//! Каждая подписка открывает свой `EventSource`, держит локальный снапшот
//! коллекции и после каждого `put` / `patch` отдаёт колбэку снапшот целиком.
//! Подписка закрывается ровно один раз: вызовом `cancel` или при drop.

use contracts::shared::config::RealtimeConfig;
use contracts::shared::realtime::{Snapshot, StreamEvent, StreamOutcome};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventSource, MessageEvent};

type Listener = Closure<dyn FnMut(MessageEvent)>;

pub struct Subscription {
    label: String,
    source: EventSource,
    listeners: Vec<(&'static str, Listener)>,
    _on_error: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    /// Stop delivery and release the stream.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for (name, listener) in &self.listeners {
            let _ = self
                .source
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
        self.source.set_onerror(None);
        self.source.close();
        log::debug!("realtime: unsubscribed from {}", self.label);
    }
}

/// Open a stream and feed every snapshot change into `callback`.
///
/// Returns `None` when the browser refuses to open the stream.
pub fn subscribe(
    label: &str,
    url: &str,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    let source = match EventSource::new(url) {
        Ok(source) => source,
        Err(e) => {
            log::error!("realtime: failed to open {} stream: {:?}", label, e);
            return None;
        }
    };

    let snapshot = Rc::new(RefCell::new(Snapshot::new()));
    let callback: Rc<dyn Fn(Option<Value>)> = Rc::new(callback);

    let listeners = StreamEvent::NAMES
        .iter()
        .filter_map(|&name| {
            let listener = stream_listener(label, name, &source, snapshot.clone(), callback.clone());
            match source.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref()) {
                Ok(()) => Some((name, listener)),
                Err(e) => {
                    log::error!("realtime: failed to listen for '{}' on {}: {:?}", name, label, e);
                    None
                }
            }
        })
        .collect();

    let on_error = {
        let label = label.to_string();
        let source = source.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            // браузер сам переподключается, пока поток не закрыт
            log::debug!("realtime: {} stream error, ready state {}", label, source.ready_state());
        })
    };
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    log::debug!("realtime: subscribed to {}", label);

    Some(Subscription {
        label: label.to_string(),
        source,
        listeners,
        _on_error: on_error,
    })
}

fn stream_listener(
    label: &str,
    name: &'static str,
    source: &EventSource,
    snapshot: Rc<RefCell<Snapshot>>,
    callback: Rc<dyn Fn(Option<Value>)>,
) -> Listener {
    let label = label.to_string();
    let source = source.clone();

    Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let raw = ev.data().as_string().unwrap_or_default();
        let event = match StreamEvent::parse(name, &raw) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("realtime: {}: {}", label, e);
                return;
            }
        };

        let outcome = snapshot.borrow_mut().apply(event);
        match outcome {
            StreamOutcome::Deliver => {
                let current = snapshot.borrow().current();
                callback(current);
            }
            StreamOutcome::Ignore => {}
            StreamOutcome::Closed => {
                log::warn!("realtime: {} stream closed by server ({})", label, name);
                source.close();
            }
        }
    })
}

pub fn subscribe_to_stock(
    config: &RealtimeConfig,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe("stock", &config.collection_url(&config.paths.stock), callback)
}

pub fn subscribe_to_reallocation(
    config: &RealtimeConfig,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe(
        "reallocation",
        &config.collection_url(&config.paths.reallocation),
        callback,
    )
}

pub fn subscribe_to_schedule(
    config: &RealtimeConfig,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe("schedule", &config.collection_url(&config.paths.schedule), callback)
}

pub fn subscribe_to_spec_plan(
    config: &RealtimeConfig,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe("spec plan", &config.collection_url(&config.paths.spec_plan), callback)
}

pub fn subscribe_to_date_track(
    config: &RealtimeConfig,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe("date track", &config.collection_url(&config.paths.date_track), callback)
}

pub fn subscribe_dealer_config(
    config: &RealtimeConfig,
    dealer_slug: &str,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe(
        &format!("dealer config '{}'", dealer_slug),
        &config.dealer_config_url(dealer_slug),
        callback,
    )
}

pub fn subscribe_all_dealer_configs(
    config: &RealtimeConfig,
    callback: impl Fn(Option<Value>) + 'static,
) -> Option<Subscription> {
    subscribe(
        "all dealer configs",
        &config.collection_url(&config.paths.dealer_configs),
        callback,
    )
}
