use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 50;
pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_SORT: &str = "created_at";

/// Query-string keys owned by list pages.
pub const KEY_SEARCH: &str = "search";
pub const KEY_LIMIT: &str = "limit";
pub const KEY_OFFSET: &str = "offset";
pub const KEY_SORT: &str = "sort";
pub const KEY_ORDER: &str = "order";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Case-insensitive parse; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Typed view of a list page's URL state.
///
/// Built fresh from the query string on every read and never mutated in
/// place: changes go through the URL and come back as a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub limit: u32,
    pub offset: u32,
    pub sort: String,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl ListQuery {
    /// Builds a query from decoded key/value pairs.
    ///
    /// Unknown keys are ignored and, for repeated keys, the last one wins.
    /// Values that do not coerce fall back to their defaults: non-numeric,
    /// negative or zero `limit`, non-numeric or negative `offset`, an empty
    /// `sort` and an unknown `order`. `offset` is snapped down to a multiple
    /// of `limit`.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key {
                KEY_SEARCH => query.search = value.to_string(),
                KEY_LIMIT => {
                    query.limit = parse_number(value)
                        .filter(|v| *v > 0)
                        .unwrap_or(DEFAULT_LIMIT)
                }
                KEY_OFFSET => query.offset = parse_number(value).unwrap_or(DEFAULT_OFFSET),
                KEY_SORT => {
                    let value = value.trim();
                    query.sort = if value.is_empty() {
                        DEFAULT_SORT.to_string()
                    } else {
                        value.to_string()
                    };
                }
                KEY_ORDER => query.order = SortOrder::parse(value).unwrap_or_default(),
                _ => {}
            }
        }
        query.offset -= query.offset % query.limit;
        query
    }

    /// Canonical key/value form; `search` is omitted when empty.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if !self.search.is_empty() {
            pairs.push((KEY_SEARCH, self.search.clone()));
        }
        pairs.push((KEY_LIMIT, self.limit.to_string()));
        pairs.push((KEY_OFFSET, self.offset.to_string()));
        pairs.push((KEY_SORT, self.sort.clone()));
        pairs.push((KEY_ORDER, self.order.as_str().to_string()));
        pairs
    }

    /// Stable identity of one request generation.
    pub fn cache_key(&self) -> String {
        format!(
            "search={}|limit={}|offset={}|sort={}|order={}",
            self.search,
            self.limit,
            self.offset,
            self.sort,
            self.order.as_str()
        )
    }
}

fn parse_number(value: &str) -> Option<u32> {
    let parsed: i64 = value.trim().parse().ok()?;
    u32::try_from(parsed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let query = ListQuery::from_pairs(Vec::<(&str, &str)>::new());
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.limit, 50);
        assert_eq!(query.sort, "created_at");
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let query = ListQuery::from_pairs([
            ("limit", "abc"),
            ("offset", "-20"),
            ("order", "sideways"),
            ("sort", "  "),
        ]);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset, DEFAULT_OFFSET);
        assert_eq!(query.order, SortOrder::Desc);
        assert_eq!(query.sort, DEFAULT_SORT);

        let zero = ListQuery::from_pairs([("limit", "0")]);
        assert_eq!(zero.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_last_value_wins_and_foreign_keys_ignored() {
        let query = ListQuery::from_pairs([
            ("limit", "10"),
            ("status", "paid"),
            ("limit", "25"),
            ("order", "ASC"),
        ]);
        assert_eq!(query.limit, 25);
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn test_to_pairs_omits_empty_search() {
        let pairs = ListQuery::default().to_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != KEY_SEARCH));

        let query = ListQuery {
            search: "acme".into(),
            ..ListQuery::default()
        };
        assert_eq!(query.to_pairs()[0], ("search", "acme".to_string()));
    }

    #[test]
    fn test_cache_key_tracks_every_field() {
        let base = ListQuery::default();
        let moved = ListQuery {
            offset: 50,
            ..base.clone()
        };
        assert_ne!(base.cache_key(), moved.cache_key());
        assert_eq!(base.cache_key(), ListQuery::default().cache_key());
    }

    #[test]
    fn test_offset_snaps_to_page_grid() {
        let query = ListQuery::from_pairs([("offset", "7"), ("limit", "50")]);
        assert_eq!(query.offset, 0);

        let query = ListQuery::from_pairs([("offset", "57"), ("limit", "25")]);
        assert_eq!(query.offset, 50);

        let query = ListQuery::from_pairs([("offset", "500")]);
        assert_eq!(query.offset, 500);
    }
}
