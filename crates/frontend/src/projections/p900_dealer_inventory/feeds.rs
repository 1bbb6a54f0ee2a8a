//! Живые данные страниц склада.
//!
//! Коллекции подписываются один раз на монтирование страницы, конфиг дилера
//! переподписывается при смене нормализованного слага. Все подписки
//! освобождаются в `on_cleanup`.

use crate::shared::realtime::{
    subscribe_all_dealer_configs, subscribe_dealer_config, subscribe_to_date_track,
    subscribe_to_reallocation, subscribe_to_schedule, subscribe_to_spec_plan, subscribe_to_stock,
    Subscription,
};
use contracts::domain::a001_dealer_config::{
    dealer_config_from_value, dealer_configs_from_value, DealerConfigs,
};
use contracts::domain::a002_order::Order;
use contracts::domain::a003_spec_plan::SpecPlans;
use contracts::domain::a004_date_track::DateTracks;
use contracts::projections::p900_dealer_inventory::{decode_orders, ConfigState};
use contracts::shared::config::PortalConfig;
use leptos::prelude::*;

/// Какие коллекции заказов нужны странице
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFeed {
    /// Склад и перераспределение
    StockAndReallocation,
    /// Производственный график (из него берутся складские заказы)
    Schedule,
}

/// Последние снапшоты всех коллекций страницы
#[derive(Clone, Copy)]
pub struct InventoryFeeds {
    pub config: RwSignal<ConfigState>,
    pub all_configs: RwSignal<DealerConfigs>,
    /// Stock or schedule, depending on the feed
    pub orders: RwSignal<Vec<Order>>,
    pub reallocation: RwSignal<Vec<Order>>,
    /// Cleared by the first snapshot of the order stream
    pub orders_loading: RwSignal<bool>,
    pub spec_plans: RwSignal<SpecPlans>,
    pub date_tracks: RwSignal<DateTracks>,
}

impl InventoryFeeds {
    fn new() -> Self {
        Self {
            config: RwSignal::new(ConfigState::Loading),
            all_configs: RwSignal::new(DealerConfigs::new()),
            orders: RwSignal::new(Vec::new()),
            reallocation: RwSignal::new(Vec::new()),
            orders_loading: RwSignal::new(true),
            spec_plans: RwSignal::new(SpecPlans::default()),
            date_tracks: RwSignal::new(DateTracks::default()),
        }
    }
}

pub fn use_inventory_feeds(dealer_slug: Memo<String>, feed: OrderFeed) -> InventoryFeeds {
    let realtime = expect_context::<PortalConfig>().realtime;
    let feeds = InventoryFeeds::new();

    let orders_callback = move |value: Option<serde_json::Value>| {
        feeds.orders.set(decode_orders(value.as_ref()));
        feeds.orders_loading.set(false);
    };

    let mut subscriptions = Vec::new();
    match feed {
        OrderFeed::StockAndReallocation => {
            subscriptions.push(subscribe_to_stock(&realtime, orders_callback));
            subscriptions.push(subscribe_to_reallocation(&realtime, move |value| {
                feeds.reallocation.set(decode_orders(value.as_ref()));
            }));
        }
        OrderFeed::Schedule => {
            subscriptions.push(subscribe_to_schedule(&realtime, orders_callback));
        }
    }
    subscriptions.push(subscribe_to_spec_plan(&realtime, move |value| {
        feeds.spec_plans.set(SpecPlans::from_value(value.as_ref()));
    }));
    subscriptions.push(subscribe_to_date_track(&realtime, move |value| {
        feeds.date_tracks.set(DateTracks::from_value(value.as_ref()));
    }));
    subscriptions.push(subscribe_all_dealer_configs(&realtime, move |value| {
        feeds.all_configs.set(dealer_configs_from_value(value.as_ref()));
    }));

    // Подписка, которую браузер не открыл, просто отсутствует
    let collections = StoredValue::new_local(subscriptions.into_iter().flatten().collect::<Vec<_>>());
    let config_subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let slug = dealer_slug.get();

        // старая подписка закрывается до открытия новой
        config_subscription.set_value(None);
        feeds.config.set(ConfigState::Loading);

        if slug.is_empty() {
            return;
        }

        let subscription = subscribe_dealer_config(&realtime, &slug, move |value| {
            feeds
                .config
                .set(ConfigState::Loaded(dealer_config_from_value(value.as_ref())));
        });
        config_subscription.set_value(subscription);
    });

    on_cleanup(move || {
        collections.update_value(|subs| subs.drain(..).for_each(Subscription::cancel));
        config_subscription.update_value(|sub| {
            if let Some(sub) = sub.take() {
                sub.cancel();
            }
        });
    });

    feeds
}
