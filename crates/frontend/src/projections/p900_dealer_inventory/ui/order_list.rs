use crate::shared::icons::icon;
use contracts::domain::a002_order::Order;
use contracts::domain::a003_spec_plan::SpecPlans;
use contracts::domain::a004_date_track::DateTracks;
use leptos::prelude::*;
use thaw::*;

/// Карточки заказов с планами и логистикой
#[component]
pub fn OrderList(
    #[prop(into)] orders: Signal<Vec<Order>>,
    #[prop(into)] spec_plans: Signal<SpecPlans>,
    #[prop(into)] date_tracks: Signal<DateTracks>,
) -> impl IntoView {
    view! {
        <div class="order-list">
            <For
                each=move || orders.get().into_iter().enumerate()
                // шасси бывают пустыми и повторяются, поэтому ключ с индексом
                key=|(idx, order)| (*idx, order.chassis_key().to_string())
                children=move |(_, order)| {
                    view! { <OrderCard order=order spec_plans=spec_plans date_tracks=date_tracks /> }
                }
            />
        </div>
    }
}

fn field_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

#[component]
fn OrderCard(
    order: Order,
    spec_plans: Signal<SpecPlans>,
    date_tracks: Signal<DateTracks>,
) -> impl IntoView {
    let chassis = order.chassis_key().to_string();

    let fields = [
        ("Customer", field_value(&order.customer)),
        ("Model", field_value(&order.model)),
        ("Model Year", field_value(&order.model_year)),
        ("Dealer", field_value(&order.dealer)),
        ("Forecast Production", field_value(&order.forecast_production_date)),
    ];

    let milestones = order
        .milestones()
        .into_iter()
        .map(|(label, date)| {
            view! {
                <li class="order-card__milestone">
                    <span class="order-card__milestone-label">{label}</span>
                    <span class="order-card__milestone-date">{date.to_string()}</span>
                </li>
            }
        })
        .collect_view();

    let plan_chassis = chassis.clone();
    let spec_plan_view = move || {
        spec_plans.with(|plans| {
            plans.get(&plan_chassis).cloned().map(|entry| {
                view! {
                    <div class="order-card__plans">
                        {icon("file-text")}
                        {entry.spec.map(|url| view! {
                            <a class="order-card__link" href=url target="_blank" rel="noopener">"Spec"</a>
                        })}
                        {entry.plan.map(|url| view! {
                            <a class="order-card__link" href=url target="_blank" rel="noopener">"Plan"</a>
                        })}
                        {entry.status.map(|status| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                {status}
                            </Badge>
                        })}
                    </div>
                }
            })
        })
    };

    let track_chassis = chassis.clone();
    let date_track_view = move || {
        date_tracks.with(|tracks| {
            tracks.find_for_chassis(&track_chassis).map(|track| {
                track
                    .milestones()
                    .into_iter()
                    .map(|(label, date)| {
                        let done = date.is_some();
                        let date = date.unwrap_or("Pending").to_string();
                        view! {
                            <div class="order-card__track-step" class:order-card__track-step--done=done>
                                {icon("truck")}
                                <span class="order-card__track-label">{label}</span>
                                <span class="order-card__track-date">{date}</span>
                            </div>
                        }
                    })
                    .collect_view()
            })
        })
    };

    view! {
        <div class="order-card">
            <div class="order-card__header">
                <span class="order-card__chassis">{chassis}</span>
            </div>
            <dl class="order-card__fields">
                {fields
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="order-card__field">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <ul class="order-card__milestones">{milestones}</ul>
            {spec_plan_view}
            <div class="order-card__track">{date_track_view}</div>
        </div>
    }
}
