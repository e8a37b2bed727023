use std::collections::HashMap;
use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, TimestampSecondsWithFrac};

use crate::{PageResponse, Paging};

/// Delivery pipeline stages reported by the event stream.
///
/// The stream evolves server-side first, so unrecognized names decode as
/// `Unknown` instead of failing the page they arrived in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Accepted,
    Rejected,
    Delivered,
    Failed,
    Opened,
    Clicked,
    Unsubscribed,
    Complained,
    Stored,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

/// How final a delivery failure is.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum EventSeverity {
    Temporary,
    Permanent,
    Internal,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EventSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

/// Why a message was rejected or suppressed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "kebab-case")]
pub enum EventReason {
    Generic,
    Bounce,
    #[serde(rename = "espblock")]
    EspBlock,
    SuppressBounce,
    SuppressComplaint,
    SuppressUnsubscribe,
    Old,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EventReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

/// Protocol a message travelled over.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum TransportMethod {
    Http,
    Smtp,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

/// Mail client family that triggered an engagement event.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
pub enum ClientType {
    #[serde(rename = "browser")]
    Browser,
    #[serde(rename = "mobile browser")]
    MobileBrowser,
    #[serde(rename = "email client")]
    EmailClient,
    #[default]
    #[serde(other)]
    #[serde(rename = "unknown")]
    Unknown,
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

/// User-agent breakdown attached to engagement events.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientInfo {
    pub client_type: Option<ClientType>,
    pub client_name: Option<String>,
    pub client_os: Option<String>,
    pub device_type: Option<DeviceType>,
    pub user_agent: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageHeaders {
    pub to: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub message_id: Option<String>,
}

/// Summary of the message an event refers to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageSummary {
    pub headers: Option<MessageHeaders>,
    pub size: Option<u64>,
}

/// One entry in a domain's message event stream.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub event: EventType,
    /// Fractional epoch seconds, as emitted by the event store.
    #[serde_as(as = "TimestampSecondsWithFrac<f64>")]
    pub timestamp: DateTime<Utc>,
    pub recipient: Option<String>,
    pub method: Option<TransportMethod>,
    pub severity: Option<EventSeverity>,
    pub reason: Option<EventReason>,
    pub ip: Option<IpAddr>,
    pub tags: Option<Vec<String>>,
    pub client_info: Option<ClientInfo>,
    pub message: Option<MessageSummary>,
    /// Fields the model does not pin down, kept so callers can reach
    /// event-specific payloads without a model revision.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Filters applied to the first events request; the server carries them
/// through subsequent paging links.
#[derive(Debug, Default, Clone)]
pub struct EventsFilter {
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Oldest-first when set; the stream defaults to newest-first.
    pub ascending: Option<bool>,
    pub event: Vec<EventType>,
}

/// Listing envelope for message events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsPage {
    pub items: Vec<Event>,
    #[serde(default)]
    pub paging: Paging,
}

impl PageResponse for EventsPage {
    type Item = Event;

    fn paging(&self) -> &Paging {
        &self.paging
    }

    fn into_items(self) -> Vec<Event> {
        self.items
    }
}
