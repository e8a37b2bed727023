//! Event stream listing against a mock API server.

use chrono::{TimeZone, Utc};
use mailroom_client::{
    events,
    DeviceType,
    EventSeverity,
    EventType,
    EventsFilter,
    Pagination,
    TransportMethod,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

const DOMAIN: &str = "mail.example.com";

#[tokio::test]
async fn filters_are_encoded_into_the_first_request_only() {
    let server = MockServer::start().await;
    let begin = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/domains/{DOMAIN}/events")))
        .and(query_param("limit", "50"))
        .and(query_param("begin", "2026-08-01T00:00:00+00:00"))
        .and(query_param("ascending", "yes"))
        .and(query_param("event", "delivered"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            // The continuation link carries no filter parameters here;
            // the iterator must follow it verbatim rather than re-append.
            "paging": {"next": format!("{}/page/2", server.uri())},
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "evt-1", "event": "delivered", "timestamp": 1754988000.25},
            ],
            "paging": {},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);

    let mut it = events::list(
        &client,
        DOMAIN,
        Some(Pagination { limit: Some(50) }),
        Some(EventsFilter {
            begin: Some(begin),
            end: None,
            ascending: Some(true),
            event: vec![EventType::Delivered, EventType::Failed],
        }),
    )
    .unwrap();

    let mut total = 0;
    while let Some(page) = it.next_page().await.unwrap() {
        total += page.len();
    }
    assert_eq!(total, 1);

    // Both event filters were sent as repeated query pairs.
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("event=delivered"));
    assert!(query.contains("event=failed"));
    // The followed link stayed untouched.
    assert!(requests[1].url.query().is_none());
}

#[tokio::test]
async fn event_stream_decodes_typed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/domains/{DOMAIN}/events")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": "CPgfbmQMTCKtHW6uIWtuVe",
                    "event": "failed",
                    "timestamp": 1521472262.908181,
                    "recipient": "alice@example.com",
                    "method": "smtp",
                    "severity": "permanent",
                    "reason": "suppress-bounce",
                    "ip": "50.56.129.169",
                    "tags": ["onboarding", "welcome"],
                    "delivery_status": {"attempt_no": 1, "code": 605},
                },
                {
                    "id": "OzHeVGPXQCKFBiEHQj",
                    "event": "opened",
                    "timestamp": 1521472262.908182,
                    "recipient": "bob@example.com",
                    "client_info": {
                        "client_type": "mobile browser",
                        "client_os": "iOS",
                        "device_type": "mobile",
                    },
                },
                {
                    "id": "futureproof",
                    "event": "quarantined",
                    "timestamp": 1521472263.0,
                },
            ],
            "paging": {},
        })))
        .mount(&server)
        .await;

    let client = support::client_for(&server);

    let mut it = events::list(&client, DOMAIN, None, None).unwrap();
    let page = it.next_page().await.unwrap().unwrap();
    assert_eq!(page.len(), 3);

    let failed = &page[0];
    assert_eq!(failed.event, EventType::Failed);
    assert_eq!(failed.method, Some(TransportMethod::Smtp));
    assert_eq!(failed.severity, Some(EventSeverity::Permanent));
    assert_eq!(failed.ip, Some("50.56.129.169".parse().unwrap()));
    assert!(failed.extra.contains_key("delivery_status"));

    let opened = &page[1];
    assert_eq!(opened.event, EventType::Opened);
    let info = opened.client_info.as_ref().unwrap();
    assert_eq!(info.device_type, Some(DeviceType::Mobile));

    // Unrecognized stages decode as Unknown rather than failing the page.
    assert_eq!(page[2].event, EventType::Unknown);

    assert!(it.next_page().await.unwrap().is_none());
}
