use crate::projections::p900_dealer_inventory::ui::LoadingState;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use contracts::shared::config::PortalConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<PortalConfig>);

    // Конфиг грузится один раз до монтирования маршрутов
    spawn_local(async move {
        config.set(Some(load_config().await));
    });

    view! {
        {move || match config.get() {
            Some(config) => view! { <Portal config=config /> }.into_any(),
            None => view! { <LoadingState /> }.into_any(),
        }}
    }
}

#[component]
fn Portal(config: PortalConfig) -> impl IntoView {
    // Provide the portal config to the whole tree via context.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
