use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{PageResponse, Paging};

/// Who may post messages to a mailing list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    #[default]
    Readonly,
    Members,
    Everyone,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

/// Where replies to list traffic are directed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum ReplyPreference {
    #[default]
    List,
    Sender,
}

impl std::fmt::Display for ReplyPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MailingList {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub access_level: AccessLevel,
    #[serde(default)]
    pub reply_preference: ReplyPreference,
    #[serde(default)]
    pub members_count: i64,
    // Set by the server on creation; never accepted as input.
    pub created_at: Option<DateTime<Utc>>,
}

/// Sparse update; unset fields are left unchanged by the server.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMailingList {
    pub name: Option<String>,
    pub description: Option<String>,
    pub access_level: Option<AccessLevel>,
    pub reply_preference: Option<ReplyPreference>,
}

/// Listing envelope for mailing lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailingListsPage {
    pub items: Vec<MailingList>,
    #[serde(default)]
    pub paging: Paging,
}

impl PageResponse for MailingListsPage {
    type Item = MailingList;

    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn into_items(self) -> Vec<MailingList> {
        self.items
    }
}
