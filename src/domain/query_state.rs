// src/domain/query_state.rs

use crate::api::QueryParams;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SORT: &str = "Data dodania";
pub const DEFAULT_MIN_SIZE: &str = "45";
pub const DEFAULT_MAX_SIZE: &str = "85";
pub const DEFAULT_MIN_PRICE: &str = "450000";
pub const DEFAULT_MAX_PRICE: &str = "1000000";

/// Value the district selector uses for "no district filter".
pub const ALL_DISTRICTS: &str = "all";

/// Sort options offered by the selector: (value sent to backend, label).
pub const SORT_OPTIONS: &[(&str, &str)] = &[(DEFAULT_SORT, "Data dodania"), ("price", "Cena")];

/// The closed set of parameters the list endpoint understands.
/// Declaration order is the order parameters are sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    District,
    SortBy,
    MinSize,
    MaxSize,
    MinPrice,
    MaxPrice,
    ShowHearted,
    ShowStarred,
    ShowRejected,
    ShowUnseen,
    ExcludeRejected,
    Format,
}

impl FilterKey {
    pub const ALL: [FilterKey; 12] = [
        FilterKey::District,
        FilterKey::SortBy,
        FilterKey::MinSize,
        FilterKey::MaxSize,
        FilterKey::MinPrice,
        FilterKey::MaxPrice,
        FilterKey::ShowHearted,
        FilterKey::ShowStarred,
        FilterKey::ShowRejected,
        FilterKey::ShowUnseen,
        FilterKey::ExcludeRejected,
        FilterKey::Format,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::District => "district",
            FilterKey::SortBy => "sort_by",
            FilterKey::MinSize => "min_size",
            FilterKey::MaxSize => "max_size",
            FilterKey::MinPrice => "min_price",
            FilterKey::MaxPrice => "max_price",
            FilterKey::ShowHearted => "show_hearted",
            FilterKey::ShowStarred => "show_starred",
            FilterKey::ShowRejected => "show_rejected",
            FilterKey::ShowUnseen => "show_unseen",
            FilterKey::ExcludeRejected => "exclude_rejected",
            FilterKey::Format => "format",
        }
    }

    fn default_value(self) -> &'static str {
        match self {
            FilterKey::District => "",
            FilterKey::SortBy => DEFAULT_SORT,
            FilterKey::MinSize => DEFAULT_MIN_SIZE,
            FilterKey::MaxSize => DEFAULT_MAX_SIZE,
            FilterKey::MinPrice => DEFAULT_MIN_PRICE,
            FilterKey::MaxPrice => DEFAULT_MAX_PRICE,
            FilterKey::ShowHearted => "true",
            FilterKey::ShowStarred => "true",
            FilterKey::ShowRejected => "false",
            FilterKey::ShowUnseen => "true",
            FilterKey::ExcludeRejected => "true",
            FilterKey::Format => "json",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter key: {0}")]
pub struct UnknownFilterKey(pub String);

impl FromStr for FilterKey {
    type Err = UnknownFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownFilterKey(s.to_string()))
    }
}

/// A UI event that changes the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Overwrite one parameter with whatever the control produced.
    Set(FilterKey, String),
    /// A pick from the district selector; `ALL_DISTRICTS` clears the filter.
    SelectDistrict(String),
    Reset,
}

/// Every parameter the list endpoint gets, always fully populated.
/// Values are passed through verbatim; the backend validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    values: BTreeMap<FilterKey, String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::defaults()
    }
}

impl QueryState {
    pub fn defaults() -> Self {
        let values = FilterKey::ALL
            .into_iter()
            .map(|k| (k, k.default_value().to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: FilterKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn is_on(&self, key: FilterKey) -> bool {
        self.get(key) == "true"
    }

    #[must_use]
    pub fn with(&self, key: FilterKey, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.values.insert(key, value.into());
        next
    }

    /// Snapshot sent as the list endpoint's query string.
    pub fn to_params(&self) -> QueryParams {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.clone()))
            .collect()
    }
}

/// Apply one filter event, producing the next state.
pub fn reduce(state: &QueryState, event: FilterEvent) -> QueryState {
    match event {
        FilterEvent::Set(key, value) => state.with(key, value),
        FilterEvent::SelectDistrict(selection) => {
            let value = if selection == ALL_DISTRICTS {
                String::new()
            } else {
                selection
            };
            state.with(FilterKey::District, value)
        }
        FilterEvent::Reset => QueryState::defaults(),
    }
}
