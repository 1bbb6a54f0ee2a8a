use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="state-page state-page--denied">
            <div class="state-page__icon">{icon("alert-triangle")}</div>
            <h2 class="state-page__title">"Access Denied"</h2>
            <p class="state-page__text">
                "This dealer portal is currently inactive or does not exist."
            </p>
        </div>
    }
}

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="state-page state-page--loading">
            <Spinner />
            <p class="state-page__text">"Loading inventory..."</p>
        </div>
    }
}

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="state-page state-page--empty">
            <div class="state-page__icon">{icon("package")}</div>
            <p class="state-page__text">"No inventory orders found."</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="state-page">
            <h2 class="state-page__title">"Page not found"</h2>
        </div>
    }
}
