use super::order_list::OrderList;
use super::route::use_dealer_route;
use super::sidebar::DealerSidebar;
use super::states::{AccessDenied, EmptyState, LoadingState};
use crate::projections::p900_dealer_inventory::feeds::{use_inventory_feeds, OrderFeed};
use crate::shared::components::{PortalHeader, StatCard};
use crate::shared::export::export_orders;
use crate::shared::icons::icon;
use contracts::domain::a002_order::Order;
use contracts::domain::a003_spec_plan::SpecPlans;
use contracts::domain::a004_date_track::DateTracks;
use contracts::projections::p900_dealer_inventory::{
    ExportCategory, InventoryViewModel, PageState, PortalInputs,
};
use leptos::prelude::*;
use thaw::*;

/// Склад и перераспределение дилера или группы
#[component]
pub fn InventoryPage() -> impl IntoView {
    let route = use_dealer_route();
    let feeds = use_inventory_feeds(route.dealer_slug, OrderFeed::StockAndReallocation);

    let view_model = Memo::new(move |_| {
        let dealer_slug = route.dealer_slug.read();
        let config = feeds.config.read();
        let all_configs = feeds.all_configs.read();
        let stock = feeds.orders.read();
        let reallocation = feeds.reallocation.read();

        InventoryViewModel::compute(
            PortalInputs {
                dealer_slug: dealer_slug.as_str(),
                config: &*config,
                all_configs: &*all_configs,
                orders_loading: feeds.orders_loading.get(),
            },
            &stock,
            &reallocation,
        )
    });

    let page_state = Memo::new(move |_| view_model.with(|vm| vm.page_state));
    let is_empty = Memo::new(move |_| view_model.with(InventoryViewModel::is_empty));
    let display_name = Signal::derive(move || view_model.with(|vm| vm.display_name.clone()));
    let stock_orders = Signal::derive(move || view_model.with(|vm| vm.stock_orders.clone()));
    let reallocation_orders =
        Signal::derive(move || view_model.with(|vm| vm.reallocation_orders.clone()));

    let export = move |category: ExportCategory| {
        let (orders, name) = view_model.with_untracked(|vm| {
            let orders = match category {
                ExportCategory::Stock => vm.stock_orders.clone(),
                ExportCategory::Reallocation => vm.reallocation_orders.clone(),
            };
            (orders, vm.display_name.clone())
        });
        feeds
            .date_tracks
            .with_untracked(|tracks| export_orders(&orders, tracks, &name, category));
    };

    let sections = move || {
        view! {
            <div class="inventory-layout">
                <Show when=move || view_model.with(|vm| vm.is_group)>
                    <DealerSidebar
                        portal_name=display_name
                        members=Signal::derive(move || view_model.with(|vm| vm.members.clone()))
                    />
                </Show>
                <div class="inventory-content">
                    <div class="stat-cards">
                        <StatCard
                            label="Stock"
                            icon_name="package"
                            value=Signal::derive(move || stock_orders.with(Vec::len))
                        />
                        <StatCard
                            label="Reallocation"
                            icon_name="truck"
                            value=Signal::derive(move || reallocation_orders.with(Vec::len))
                        />
                    </div>
                    <InventorySection
                        title="Stock"
                        orders=stock_orders
                        category=ExportCategory::Stock
                        on_export=export
                        spec_plans=feeds.spec_plans
                        date_tracks=feeds.date_tracks
                    />
                    <InventorySection
                        title="Reallocation"
                        orders=reallocation_orders
                        category=ExportCategory::Reallocation
                        on_export=export
                        spec_plans=feeds.spec_plans
                        date_tracks=feeds.date_tracks
                    />
                </div>
            </div>
        }
    };

    view! {
        <div class="inventory-page">
            <PortalHeader
                dealer_name=display_name
                section="Inventory"
                is_group=Signal::derive(move || view_model.with(|vm| vm.is_group))
            >
                {()}
            </PortalHeader>
            {move || match (page_state.get(), is_empty.get()) {
                (PageState::AccessDenied, _) => view! { <AccessDenied /> }.into_any(),
                (PageState::Loading, _) => view! { <LoadingState /> }.into_any(),
                (PageState::Ready, true) => view! { <EmptyState /> }.into_any(),
                (PageState::Ready, false) => sections().into_any(),
            }}
        </div>
    }
}

#[component]
fn InventorySection(
    title: &'static str,
    #[prop(into)] orders: Signal<Vec<Order>>,
    category: ExportCategory,
    on_export: impl Fn(ExportCategory) + Copy + Send + Sync + 'static,
    #[prop(into)] spec_plans: Signal<SpecPlans>,
    #[prop(into)] date_tracks: Signal<DateTracks>,
) -> impl IntoView {
    let count = move || orders.with(Vec::len);

    view! {
        <section class="inventory-section">
            <div class="inventory-section__header">
                <h2 class="inventory-section__title">
                    {title}
                    <span class="inventory-section__count">{count}</span>
                </h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || count() == 0)
                    on_click=move |_| on_export(category)
                >
                    {icon("download")}
                    " Export to Excel"
                </Button>
            </div>
            <Show
                when=move || { count() > 0 }
                fallback=|| view! { <p class="inventory-section__empty">"No orders."</p> }
            >
                <OrderList orders=orders spec_plans=spec_plans date_tracks=date_tracks />
            </Show>
        </section>
    }
}
