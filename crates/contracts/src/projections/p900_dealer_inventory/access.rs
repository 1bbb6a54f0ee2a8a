use crate::domain::a001_dealer_config::{DealerConfig, DealerConfigs};
use crate::shared::slug::prettify_dealer_name;

/// Состояние загрузки конфигурации дилера
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigState {
    /// First snapshot not delivered yet
    #[default]
    Loading,
    Loaded(Option<DealerConfig>),
}

impl ConfigState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn config(&self) -> Option<&DealerConfig> {
        match self {
            Self::Loading => None,
            Self::Loaded(config) => config.as_ref(),
        }
    }

    pub fn is_group(&self) -> bool {
        self.config().is_some_and(DealerConfig::is_group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedDealer {
    pub slug: String,
    pub name: String,
}

/// Dealers the viewer may see: the members of a group, otherwise the
/// dealer itself.
pub fn included_dealer_slugs(dealer_slug: &str, config: Option<&DealerConfig>) -> Vec<String> {
    match config.and_then(DealerConfig::included_dealers) {
        Some(members) => members.to_vec(),
        None => vec![dealer_slug.to_string()],
    }
}

/// Display names of group members, `None` when the config is not a group.
pub fn included_dealer_names(
    config: Option<&DealerConfig>,
    all_configs: &DealerConfigs,
) -> Option<Vec<IncludedDealer>> {
    let members = config?.included_dealers()?;
    Some(
        members
            .iter()
            .map(|slug| IncludedDealer {
                slug: slug.clone(),
                name: all_configs
                    .get(slug)
                    .and_then(DealerConfig::name)
                    .map(str::to_string)
                    .unwrap_or_else(|| prettify_dealer_name(slug)),
            })
            .collect(),
    )
}

/// Пока конфиг грузится, доступ разрешён (без мигания отказа).
/// После загрузки только для существующего активного конфига.
pub fn has_access(state: &ConfigState) -> bool {
    match state {
        ConfigState::Loading => true,
        ConfigState::Loaded(None) => false,
        ConfigState::Loaded(Some(config)) => config.is_active(),
    }
}

/// Member to redirect to when a group portal is opened without a member.
pub fn redirect_target<'a>(state: &'a ConfigState, selected_member: Option<&str>) -> Option<&'a str> {
    if selected_member.is_some_and(|m| !m.is_empty()) {
        return None;
    }
    state
        .config()
        .and_then(DealerConfig::included_dealers)
        .and_then(|members| members.first())
        .map(String::as_str)
}

/// Dealer scope once a member is selected: that member alone, provided it
/// belongs to the group. A member outside the group sees nothing.
pub fn scoped_dealer_slugs(included: &[String], selected_member: Option<&str>) -> Vec<String> {
    match selected_member.filter(|m| !m.is_empty()) {
        None => included.to_vec(),
        Some(member) if included.iter().any(|slug| slug == member) => vec![member.to_string()],
        Some(member) => {
            log::warn!("Dealer '{}' is not a member of this portal", member);
            Vec::new()
        }
    }
}

/// Route of a member's stock page inside a group portal.
pub fn member_stock_path(group_segment: &str, member: &str) -> String {
    format!("/dealergroup/{}/{}/inventorystock", group_segment, member)
}
