//! Производные модели страниц склада.
//!
//! Модели пересчитываются целиком из последних снапшотов при любом изменении
//! входных данных; инкрементальных обновлений нет.

use super::access::{
    has_access, included_dealer_names, included_dealer_slugs, redirect_target,
    scoped_dealer_slugs, ConfigState, IncludedDealer,
};
use super::filter::{
    dealer_display_name, filter_by_dealers, filter_by_model_range, model_range_options,
    stock_orders,
};
use crate::domain::a001_dealer_config::{DealerConfig, DealerConfigs};
use crate::domain::a002_order::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    AccessDenied,
    #[default]
    Loading,
    Ready,
}

/// Denial wins over loading; loading lasts until both the config and the
/// order stream delivered their first snapshot.
pub fn page_state(config: &ConfigState, orders_loading: bool) -> PageState {
    if !config.is_loading() && !has_access(config) {
        PageState::AccessDenied
    } else if orders_loading || config.is_loading() {
        PageState::Loading
    } else {
        PageState::Ready
    }
}

/// Inputs shared by both inventory pages.
#[derive(Debug, Clone, Copy)]
pub struct PortalInputs<'a> {
    pub dealer_slug: &'a str,
    pub config: &'a ConfigState,
    pub all_configs: &'a DealerConfigs,
    pub orders_loading: bool,
}

impl PortalInputs<'_> {
    fn dealer_config(&self) -> Option<&DealerConfig> {
        self.config.config()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub slug: String,
    pub name: String,
    pub order_count: usize,
}

fn member_summaries(members: Option<&[IncludedDealer]>, orders: &[Order]) -> Vec<MemberSummary> {
    members
        .unwrap_or_default()
        .iter()
        .map(|member| MemberSummary {
            slug: member.slug.clone(),
            name: member.name.clone(),
            order_count: orders
                .iter()
                .filter(|o| o.dealer_slug() == member.slug)
                .count(),
        })
        .collect()
}

// ============================================================================
// Stock + reallocation page
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryViewModel {
    pub page_state: PageState,
    pub display_name: String,
    pub is_group: bool,
    pub members: Vec<MemberSummary>,
    pub stock_orders: Vec<Order>,
    pub reallocation_orders: Vec<Order>,
}

impl InventoryViewModel {
    pub fn compute(inputs: PortalInputs<'_>, stock: &[Order], reallocation: &[Order]) -> Self {
        let config = inputs.dealer_config();
        let scope = included_dealer_slugs(inputs.dealer_slug, config);
        let names = included_dealer_names(config, inputs.all_configs);

        let stock_orders = filter_by_dealers(stock, &scope);
        let reallocation_orders = filter_by_dealers(reallocation, &scope);

        let mut all_orders = stock_orders.clone();
        all_orders.extend(reallocation_orders.iter().cloned());

        Self {
            page_state: page_state(inputs.config, inputs.orders_loading),
            display_name: dealer_display_name(
                inputs.dealer_slug,
                config,
                None,
                inputs.all_configs,
                &[],
            ),
            is_group: inputs.config.is_group(),
            members: member_summaries(names.as_deref(), &all_orders),
            stock_orders,
            reallocation_orders,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stock_orders.is_empty() && self.reallocation_orders.is_empty()
    }
}

// ============================================================================
// Stock page with member selection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockViewModel {
    pub page_state: PageState,
    /// Selected member's name, or the portal's name
    pub display_name: String,
    /// Portal (group) name shown above the member list
    pub portal_name: String,
    pub is_group: bool,
    pub selected_member: Option<String>,
    /// First member to redirect to when a group is opened without one
    pub redirect_member: Option<String>,
    pub members: Vec<MemberSummary>,
    pub range_options: Vec<String>,
    /// Stock orders in scope before the model-range filter
    pub in_scope_count: usize,
    pub orders: Vec<Order>,
}

impl StockViewModel {
    pub fn compute(
        inputs: PortalInputs<'_>,
        schedule: &[Order],
        selected_member: Option<&str>,
        model_range: Option<&str>,
    ) -> Self {
        let config = inputs.dealer_config();
        let selected_member = selected_member.filter(|m| !m.is_empty());
        let is_group = inputs.config.is_group();

        let included = included_dealer_slugs(inputs.dealer_slug, config);
        let names = included_dealer_names(config, inputs.all_configs);

        // участники группы считаются по всему графику группы
        let group_stock = stock_orders(&filter_by_dealers(schedule, &included));

        let scope = if is_group {
            scoped_dealer_slugs(&included, selected_member)
        } else {
            included.clone()
        };
        let in_scope = stock_orders(&filter_by_dealers(schedule, &scope));
        let orders = filter_by_model_range(&in_scope, model_range);

        let redirect_member = if has_access(inputs.config) {
            redirect_target(inputs.config, selected_member).map(str::to_string)
        } else {
            None
        };

        Self {
            page_state: page_state(inputs.config, inputs.orders_loading),
            display_name: dealer_display_name(
                inputs.dealer_slug,
                config,
                selected_member.filter(|_| is_group),
                inputs.all_configs,
                &in_scope,
            ),
            portal_name: dealer_display_name(
                inputs.dealer_slug,
                config,
                None,
                inputs.all_configs,
                &group_stock,
            ),
            is_group,
            selected_member: selected_member.map(str::to_string),
            redirect_member,
            members: member_summaries(names.as_deref(), &group_stock),
            range_options: model_range_options(&in_scope),
            in_scope_count: in_scope.len(),
            orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_dealer_config::dealer_config_from_value;
    use serde_json::json;

    fn order(chassis: &str, dealer: &str, customer: &str) -> Order {
        Order {
            chassis: Some(chassis.to_string()),
            dealer: Some(dealer.to_string()),
            customer: Some(customer.to_string()),
            ..Default::default()
        }
    }

    fn group_state() -> ConfigState {
        ConfigState::Loaded(dealer_config_from_value(Some(&json!({
            "name": "Coastal Group",
            "isActive": true,
            "includedDealers": ["north", "south"]
        }))))
    }

    fn schedule() -> Vec<Order> {
        vec![
            order("NCA1", "North", "Fleet Stock"),
            order("NCB2", "North", "Stock"),
            order("NCA3", "North", "J. Smith"),
            order("NCA4", "South", "Dealer Stock"),
            order("NCA5", "West", "Stock"),
        ]
    }

    fn inputs<'a>(config: &'a ConfigState, all: &'a DealerConfigs) -> PortalInputs<'a> {
        PortalInputs {
            dealer_slug: "coastal",
            config,
            all_configs: all,
            orders_loading: false,
        }
    }

    #[test]
    fn test_page_state_precedence() {
        assert_eq!(page_state(&ConfigState::Loading, false), PageState::Loading);
        assert_eq!(page_state(&ConfigState::Loading, true), PageState::Loading);
        assert_eq!(page_state(&ConfigState::Loaded(None), true), PageState::AccessDenied);
        assert_eq!(page_state(&group_state(), true), PageState::Loading);
        assert_eq!(page_state(&group_state(), false), PageState::Ready);
    }

    #[test]
    fn test_inventory_view_model_for_group() {
        let config = group_state();
        let all = DealerConfigs::new();
        let stock = vec![order("A1", "North", "Fleet Stock"), order("A2", "West", "Stock")];
        let realloc = vec![order("R1", "South", "Someone")];

        let vm = InventoryViewModel::compute(inputs(&config, &all), &stock, &realloc);

        assert_eq!(vm.page_state, PageState::Ready);
        assert_eq!(vm.display_name, "Coastal Group");
        assert!(vm.is_group);
        assert_eq!(vm.stock_orders.len(), 1);
        assert_eq!(vm.reallocation_orders.len(), 1);
        assert_eq!(
            vm.members.iter().map(|m| (m.name.as_str(), m.order_count)).collect::<Vec<_>>(),
            vec![("North", 1), ("South", 1)]
        );
        assert!(!vm.is_empty());
    }

    #[test]
    fn test_inventory_view_model_denied_without_config() {
        let config = ConfigState::Loaded(None);
        let all = DealerConfigs::new();
        let vm = InventoryViewModel::compute(
            PortalInputs {
                dealer_slug: "acme-motors",
                config: &config,
                all_configs: &all,
                orders_loading: false,
            },
            &[order("A1", "Acme Motors", "Stock")],
            &[],
        );
        assert_eq!(vm.page_state, PageState::AccessDenied);
        assert_eq!(vm.display_name, "Acme Motors");
        assert_eq!(vm.stock_orders.len(), 1);
        assert!(vm.members.is_empty());
    }

    #[test]
    fn test_stock_view_model_redirects_group_without_member() {
        let config = group_state();
        let all = DealerConfigs::new();
        let vm = StockViewModel::compute(inputs(&config, &all), &schedule(), None, None);

        assert_eq!(vm.redirect_member.as_deref(), Some("north"));
        assert_eq!(vm.in_scope_count, 3);
        assert_eq!(vm.portal_name, "Coastal Group");
        assert_eq!(
            vm.members.iter().map(|m| m.order_count).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn test_stock_view_model_selected_member_and_range() {
        let config = group_state();
        let all = DealerConfigs::new();
        let vm = StockViewModel::compute(inputs(&config, &all), &schedule(), Some("north"), Some("nca"));

        assert_eq!(vm.redirect_member, None);
        assert_eq!(vm.display_name, "North");
        assert_eq!(vm.selected_member.as_deref(), Some("north"));
        assert_eq!(vm.in_scope_count, 2);
        assert_eq!(vm.range_options, vec!["NCA", "NCB"]);
        assert_eq!(vm.orders.len(), 1);
        assert_eq!(vm.orders[0].chassis_key(), "NCA1");
    }

    #[test]
    fn test_stock_view_model_foreign_member_sees_nothing() {
        let config = group_state();
        let all = DealerConfigs::new();
        let vm = StockViewModel::compute(inputs(&config, &all), &schedule(), Some("west"), None);
        assert!(vm.orders.is_empty());
        assert_eq!(vm.in_scope_count, 0);
    }

    #[test]
    fn test_stock_view_model_single_dealer_ignores_member_segment() {
        let config = ConfigState::Loaded(dealer_config_from_value(Some(&json!({
            "name": "West RV",
            "isActive": true
        }))));
        let all = DealerConfigs::new();
        let vm = StockViewModel::compute(
            PortalInputs {
                dealer_slug: "west",
                config: &config,
                all_configs: &all,
                orders_loading: false,
            },
            &schedule(),
            None,
            None,
        );
        assert_eq!(vm.redirect_member, None);
        assert!(!vm.is_group);
        assert_eq!(vm.display_name, "West RV");
        assert_eq!(vm.orders.len(), 1);
    }

    #[test]
    fn test_no_redirect_for_inactive_group() {
        let config = ConfigState::Loaded(dealer_config_from_value(Some(&json!({
            "isActive": false,
            "includedDealers": ["north"]
        }))));
        let all = DealerConfigs::new();
        let vm = StockViewModel::compute(inputs(&config, &all), &schedule(), None, None);
        assert_eq!(vm.page_state, PageState::AccessDenied);
        assert_eq!(vm.redirect_member, None);
    }

    #[test]
    fn test_redirect_waits_for_access_not_only_group_membership() {
        // загруженная группа без участника: резолвер предлагает первого,
        // но страница без доступа никуда не уходит
        let inactive = ConfigState::Loaded(dealer_config_from_value(Some(&json!({
            "isActive": false,
            "includedDealers": ["north", "south"]
        }))));
        assert_eq!(redirect_target(&inactive, None), Some("north"));

        let all = DealerConfigs::new();
        let denied = StockViewModel::compute(inputs(&inactive, &all), &schedule(), None, None);
        assert_eq!(denied.redirect_member, None);

        let active = group_state();
        let granted = StockViewModel::compute(inputs(&active, &all), &schedule(), None, None);
        assert_eq!(granted.redirect_member.as_deref(), Some("north"));
    }
}
