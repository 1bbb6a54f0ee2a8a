use leptos::prelude::*;
use thaw::*;

/// Подпись под именем дилера: раздел портала и тип портала
fn portal_caption(section: &str, is_group: bool) -> String {
    if is_group {
        format!("{} / dealer group", section)
    } else {
        section.to_string()
    }
}

/// Шапка портала: имя дилера или группы, раздел и действия справа
#[component]
pub fn PortalHeader(
    /// Display name of the dealer, member or group
    #[prop(into)]
    dealer_name: Signal<String>,

    /// Раздел портала: "Inventory", "Stock"
    section: &'static str,

    #[prop(into)]
    is_group: Signal<bool>,

    /// Кнопки экспорта
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">
                        {move || dealer_name.get()}
                        <Show when=move || is_group.get()>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                "Group"
                            </Badge>
                        </Show>
                    </h1>
                    <div class="page-header__subtitle">
                        {move || portal_caption(section, is_group.get())}
                    </div>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_caption() {
        assert_eq!(portal_caption("Stock", false), "Stock");
        assert_eq!(portal_caption("Inventory", true), "Inventory / dealer group");
    }
}
