use super::order_list::OrderList;
use super::route::use_dealer_route;
use super::sidebar::DealerSidebar;
use super::states::{AccessDenied, EmptyState, LoadingState};
use crate::projections::p900_dealer_inventory::feeds::{use_inventory_feeds, OrderFeed};
use crate::shared::components::{PortalHeader, StatCard};
use crate::shared::export::export_orders;
use crate::shared::icons::icon;
use contracts::projections::p900_dealer_inventory::access::member_stock_path;
use contracts::projections::p900_dealer_inventory::{
    ExportCategory, PageState, PortalInputs, StockViewModel,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

/// Складские заказы из графика с выбором участника группы и модельного ряда
#[component]
pub fn StockPage() -> impl IntoView {
    let route = use_dealer_route();
    let feeds = use_inventory_feeds(route.dealer_slug, OrderFeed::Schedule);
    let model_range = RwSignal::new(String::new());

    let view_model = Memo::new(move |_| {
        let dealer_slug = route.dealer_slug.read();
        let config = feeds.config.read();
        let all_configs = feeds.all_configs.read();
        let schedule = feeds.orders.read();
        let selected_member = route.selected_member.read();
        let model_range = model_range.read();

        StockViewModel::compute(
            PortalInputs {
                dealer_slug: dealer_slug.as_str(),
                config: &*config,
                all_configs: &*all_configs,
                orders_loading: feeds.orders_loading.get(),
            },
            &schedule,
            selected_member.as_deref(),
            Some(model_range.as_str()),
        )
    });

    // Группа без выбранного участника: один раз уходим на первого участника
    let navigate = use_navigate();
    let redirected = StoredValue::new(false);
    Effect::new(move |_| {
        let Some(member) = view_model.with(|vm| vm.redirect_member.clone()) else {
            return;
        };
        if redirected.get_value() {
            return;
        }
        redirected.set_value(true);

        let path = member_stock_path(&route.raw_slug.get_untracked(), &member);
        log::info!("Redirecting group portal to {}", path);
        navigate(
            &path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    // фильтр ряда не переносится между участниками
    Effect::new(move |prev: Option<Option<String>>| {
        let member = route.selected_member.get();
        if prev.is_some_and(|prev| prev != member) {
            model_range.set(String::new());
        }
        member
    });

    let page_state = Memo::new(move |_| view_model.with(|vm| vm.page_state));
    let display_name = Signal::derive(move || view_model.with(|vm| vm.display_name.clone()));
    let orders = Signal::derive(move || view_model.with(|vm| vm.orders.clone()));
    let in_scope_empty = Memo::new(move |_| view_model.with(|vm| vm.in_scope_count == 0));

    let export = move || {
        let (orders, name) =
            view_model.with_untracked(|vm| (vm.orders.clone(), vm.display_name.clone()));
        feeds.date_tracks.with_untracked(|tracks| {
            export_orders(&orders, tracks, &name, ExportCategory::Stock)
        });
    };

    let range_filter = move || {
        view! {
            <label class="range-filter">
                {icon("filter")}
                <span class="range-filter__label">"Model range"</span>
                <select
                    class="range-filter__select"
                    prop:value=move || model_range.get()
                    on:change=move |ev| model_range.set(event_target_value(&ev))
                >
                    <option value="">"All ranges"</option>
                    <For
                        each=move || view_model.with(|vm| vm.range_options.clone())
                        key=|code| code.clone()
                        children=move |code: String| {
                            let label = code.clone();
                            view! { <option value=code>{label}</option> }
                        }
                    />
                </select>
            </label>
        }
    };

    let content = move || {
        view! {
            <div class="inventory-layout">
                <Show when=move || view_model.with(|vm| vm.is_group)>
                    <DealerSidebar
                        portal_name=Signal::derive(move || view_model.with(|vm| vm.portal_name.clone()))
                        members=Signal::derive(move || view_model.with(|vm| vm.members.clone()))
                        group_segment=route.raw_slug
                        selected=route.selected_member
                    />
                </Show>
                <div class="inventory-content">
                    <div class="stat-cards">
                        <StatCard
                            label="Stock orders"
                            icon_name="package"
                            value=Signal::derive(move || orders.with(Vec::len))
                            warn_on_zero=true
                        />
                        <StatCard
                            label="In scope"
                            icon_name="truck"
                            value=Signal::derive(move || view_model.with(|vm| vm.in_scope_count))
                            subtitle=Signal::derive(move || {
                                let range = model_range.get();
                                (!range.is_empty()).then(|| format!("Filtered by {}", range))
                            })
                        />
                    </div>
                    {range_filter}
                    <Show
                        when=move || orders.with(|o| !o.is_empty())
                        fallback=|| view! { <p class="inventory-section__empty">"No orders in this model range."</p> }
                    >
                        <OrderList
                            orders=orders
                            spec_plans=feeds.spec_plans
                            date_tracks=feeds.date_tracks
                        />
                    </Show>
                </div>
            </div>
        }
    };

    view! {
        <div class="inventory-page">
            <PortalHeader
                dealer_name=display_name
                section="Stock"
                is_group=Signal::derive(move || view_model.with(|vm| vm.is_group))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || orders.with(Vec::is_empty))
                    on_click=move |_| export()
                >
                    {icon("download")}
                    " Export to Excel"
                </Button>
            </PortalHeader>
            {move || match (page_state.get(), in_scope_empty.get()) {
                (PageState::AccessDenied, _) => view! { <AccessDenied /> }.into_any(),
                (PageState::Loading, _) => view! { <LoadingState /> }.into_any(),
                (PageState::Ready, true) => view! { <EmptyState /> }.into_any(),
                (PageState::Ready, false) => content().into_any(),
            }}
        </div>
    }
}
