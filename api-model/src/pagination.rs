use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Page-size hint for a listing request. Applied to the first request
/// only; the server embeds it in the `paging` links it returns, so it is
/// never re-sent by the client afterwards.
#[derive(Debug, Default, Clone)]
pub struct Pagination {
    pub limit: Option<i32>,
}

/// Navigation links returned in the `paging` block of every listing
/// response.
///
/// Links are opaque absolute URLs. The server encodes any filter, sort,
/// and page-size parameters needed for correct continuation inside them,
/// which is why clients store them verbatim instead of rebuilding URLs.
/// An absent or empty link means that direction is unavailable.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl Paging {
    /// Link block for a traversal that has not fetched anything yet: both
    /// the forward direction and the `first` bound land on `start`. The
    /// remaining bounds are unknown until the server advertises them.
    pub fn seed(start: impl Into<String>) -> Self {
        let start = start.into();
        Paging {
            first: Some(start.clone()),
            next: Some(start),
            last: None,
            previous: None,
        }
    }

    pub fn first_link(&self) -> Option<&str> {
        Self::present(&self.first)
    }

    pub fn last_link(&self) -> Option<&str> {
        Self::present(&self.last)
    }

    pub fn next_link(&self) -> Option<&str> {
        Self::present(&self.next)
    }

    pub fn previous_link(&self) -> Option<&str> {
        Self::present(&self.previous)
    }

    // Servers signal "no such page" either by omitting the key or by
    // sending an empty string; both read as absent.
    fn present(raw: &Option<String>) -> Option<&str> {
        raw.as_deref().filter(|link| !link.is_empty())
    }
}

/// One page of a listing response.
///
/// Implemented by each resource's listing envelope. The key carrying the
/// items differs per resource (members and events use a top-level `items`
/// list, template versions nest under the owning template), the `paging`
/// block does not.
pub trait PageResponse: DeserializeOwned + Send {
    type Item;

    fn paging(&self) -> &Paging;

    fn into_items(self) -> Vec<Self::Item>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_links_read_as_absent() {
        let paging: Paging = serde_json::from_str(
            r#"{"first": "https://api.mailroom.dev/v1/lists?limit=2", "next": ""}"#,
        )
        .unwrap();

        assert!(paging.first_link().is_some());
        assert!(paging.next_link().is_none());
        assert!(paging.last_link().is_none());
        assert!(paging.previous_link().is_none());
    }

    #[test]
    fn seed_points_forward_at_start() {
        let paging = Paging::seed("https://api.mailroom.dev/v1/lists");

        assert_eq!(
            paging.next_link(),
            Some("https://api.mailroom.dev/v1/lists")
        );
        assert_eq!(paging.next_link(), paging.first_link());
        assert!(paging.previous_link().is_none());
        assert!(paging.last_link().is_none());
    }

    #[test]
    fn paging_block_may_be_entirely_absent() {
        let paging: Paging = serde_json::from_str("{}").unwrap();
        assert_eq!(paging, Paging::default());
    }
}
