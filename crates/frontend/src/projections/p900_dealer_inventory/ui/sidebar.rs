use crate::shared::icons::icon;
use contracts::projections::p900_dealer_inventory::access::member_stock_path;
use contracts::projections::p900_dealer_inventory::MemberSummary;
use leptos::prelude::*;
use leptos_router::components::A;

type MemberRowKey = (usize, String, usize);

/// Список участников не дедуплицируется, поэтому ключ строки включает позицию
fn member_row_key((idx, member): &(usize, MemberSummary)) -> MemberRowKey {
    (*idx, member.slug.clone(), member.order_count)
}

/// Участники группы с количеством заказов
#[component]
pub fn DealerSidebar(
    #[prop(into)] portal_name: Signal<String>,
    #[prop(into)] members: Signal<Vec<MemberSummary>>,
    /// Сегмент группы из адреса; задан, если участники кликабельны
    #[prop(optional, into)]
    group_segment: Option<Signal<String>>,
    #[prop(optional, into)]
    selected: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let is_selected = move |slug: &str| {
        selected
            .map(|s| s.with(|s| s.as_deref() == Some(slug)))
            .unwrap_or(false)
    };

    view! {
        <aside class="dealer-sidebar">
            <div class="dealer-sidebar__title">
                {icon("users")}
                <span>{move || portal_name.get()}</span>
            </div>
            <ul class="dealer-sidebar__members">
                <For
                    each=move || members.get().into_iter().enumerate()
                    key=member_row_key
                    children=move |(_, member): (usize, MemberSummary)| {
                        let slug = member.slug.clone();
                        let label = view! {
                            <span class="dealer-sidebar__name">{member.name.clone()}</span>
                            <span class="dealer-sidebar__count">{member.order_count}</span>
                        };
                        let body = match group_segment {
                            Some(segment) => {
                                let href = member_stock_path(&segment.get_untracked(), &member.slug);
                                view! { <A href=href>{label}</A> }.into_any()
                            }
                            None => label.into_any(),
                        };
                        view! {
                            <li
                                class="dealer-sidebar__member"
                                class:dealer-sidebar__member--active=move || is_selected(&slug)
                            >
                                {body}
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}
