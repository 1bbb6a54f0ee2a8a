use crate::shared::icons::icon;
use leptos::prelude::*;

/// Разделяет тысячи неразрывным пробелом
fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<usize>,
    /// Highlight the card when the value is zero
    #[prop(optional)]
    warn_on_zero: bool,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let card_class = move || {
        if warn_on_zero && value.get() == 0 {
            "stat-card stat-card--warning"
        } else {
            "stat-card"
        }
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_count(value.get())}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
