use contracts::shared::slug::normalize_dealer_slug;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Сегменты адреса портала
#[derive(Clone, Copy)]
pub struct DealerRoute {
    /// Segment exactly as it appears in the address
    pub raw_slug: Memo<String>,
    /// Segment with the random suffix stripped
    pub dealer_slug: Memo<String>,
    pub selected_member: Memo<Option<String>>,
}

pub fn use_dealer_route() -> DealerRoute {
    let params = use_params_map();

    let raw_slug = Memo::new(move |_| params.read().get("dealer_slug").unwrap_or_default());
    let dealer_slug = Memo::new(move |_| normalize_dealer_slug(&raw_slug.get()));
    let selected_member = Memo::new(move |_| {
        params
            .read()
            .get("selected_dealer")
            .map(|member| member.to_lowercase())
            .filter(|member| !member.is_empty())
    });

    DealerRoute {
        raw_slug,
        dealer_slug,
        selected_member,
    }
}
