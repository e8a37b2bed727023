use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{PageResponse, Paging};

/// Subscription filter for member listings, serialized as the `yes`/`no`
/// text values the listing endpoint expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
pub enum SubscriptionStatus {
    #[serde(rename = "yes")]
    Subscribed,
    #[serde(rename = "no")]
    Unsubscribed,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MembersFilter {
    pub subscribed: Option<SubscriptionStatus>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub address: String,
    #[serde(default)]
    pub name: String,
    /// `None` when the member was imported without an explicit opt-in or
    /// opt-out.
    pub subscribed: Option<bool>,
    /// Free-form per-member variables, substituted into list traffic.
    pub vars: Option<serde_json::Value>,
}

/// Sparse update; unset fields are left unchanged by the server.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub subscribed: Option<bool>,
    pub vars: Option<serde_json::Value>,
}

/// Bulk-insert request body for a member list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMembers {
    pub members: Vec<Member>,
    #[serde(default)]
    pub upsert: bool,
}

/// Listing envelope for list members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MembersPage {
    pub items: Vec<Member>,
    #[serde(default)]
    pub paging: Paging,
}

impl PageResponse for MembersPage {
    type Item = Member;

    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn into_items(self) -> Vec<Member> {
        self.items
    }
}
