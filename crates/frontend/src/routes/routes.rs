use crate::projections::p900_dealer_inventory::ui::{InventoryPage, NotFound, StockPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="portal">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/dealer/:dealer_slug/inventory") view=InventoryPage />
                    <Route path=path!("/dealergroup/:dealer_slug/inventory") view=InventoryPage />
                    <Route path=path!("/dealer/:dealer_slug/inventorystock") view=StockPage />
                    <Route path=path!("/dealergroup/:dealer_slug/inventorystock") view=StockPage />
                    <Route
                        path=path!("/dealergroup/:dealer_slug/:selected_dealer/inventorystock")
                        view=StockPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
