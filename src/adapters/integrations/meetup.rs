//! Meetup adapter. Implements EventHostPort via the Meetup REST API.

use super::{expect_status, http_client, serialization_error, transport_error};
use crate::adapters::templates::meetup::event_page_url;
use crate::domain::announcement::parse_schedule;
use crate::domain::{CreatedEvent, DomainError, EventDraft, MeetupCredentials};
use crate::ports::EventHostPort;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const PLATFORM: &str = "meetup";

/// Two hours, in milliseconds.
const EVENT_DURATION_MS: i64 = 2 * 60 * 60 * 1000;
const GUEST_LIMIT: u32 = 100;

/// Meetup API adapter for one group.
pub struct MeetupAdapter {
    client: Client,
    api_url: String,
    api_key: String,
    group_urlname: String,
}

impl MeetupAdapter {
    /// # Arguments
    /// * `api_url` - API base, e.g. "https://api.meetup.com"
    /// * `credentials` - API key and the group's URL name
    pub fn new(api_url: String, credentials: MeetupCredentials) -> Result<Self, DomainError> {
        Ok(Self {
            client: http_client(PLATFORM)?,
            api_url,
            api_key: credentials.api_key,
            group_urlname: credentials.group_urlname,
        })
    }

    fn events_url(&self) -> String {
        format!("{}/{}/events", self.api_url, self.group_urlname)
    }

    /// Prefer the URL the API gave us; otherwise derive it from group + id.
    fn into_created(&self, resp: EventResponse) -> Result<CreatedEvent, DomainError> {
        let url = match resp.event_url.filter(|u| !u.is_empty()) {
            Some(url) => url,
            None if !resp.id.is_empty() => event_page_url(&self.group_urlname, &resp.id),
            None => {
                return Err(DomainError::Response {
                    platform: PLATFORM,
                    detail: "no event id or URL in response".to_string(),
                });
            }
        };
        Ok(CreatedEvent { id: resp.id, url })
    }
}

#[derive(Serialize)]
struct CreateEventRequest<'a> {
    name: &'a str,
    description: &'a str,
    /// Epoch milliseconds.
    time: i64,
    duration: i64,
    #[serde(skip_serializing_if = "str::is_empty")]
    venue_name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    venue_address: &'a str,
    how_to_find_us: String,
    guest_limit: u32,
}

#[derive(Deserialize)]
struct EventResponse {
    #[serde(default, deserialize_with = "id_as_string")]
    id: String,
    #[serde(default)]
    event_url: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Meetup has returned ids both as strings and as numbers.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[async_trait::async_trait]
impl EventHostPort for MeetupAdapter {
    async fn create_event(&self, draft: &EventDraft) -> Result<CreatedEvent, DomainError> {
        let when = parse_schedule(&draft.date, &draft.time).ok_or_else(|| {
            DomainError::InvalidSchedule(format!("{} {}", draft.date, draft.time))
        })?;

        let request = CreateEventRequest {
            name: &draft.title,
            description: &draft.description,
            time: when.and_utc().timestamp_millis(),
            duration: EVENT_DURATION_MS,
            venue_name: &draft.venue,
            venue_address: &draft.venue_address,
            how_to_find_us: format!(
                "Event will be held at {}, {}",
                draft.venue, draft.venue_address
            ),
            guest_limit: GUEST_LIMIT,
        };

        info!(group = %self.group_urlname, title = %draft.title, "creating Meetup event");

        let res = self
            .client
            .post(self.events_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PLATFORM, e))?;

        let body = expect_status(PLATFORM, res, StatusCode::CREATED).await?;
        let resp: EventResponse =
            serde_json::from_str(&body).map_err(|e| serialization_error(PLATFORM, e))?;
        debug!(id = %resp.id, status = ?resp.status, "Meetup event response");

        self.into_created(resp)
    }

    async fn get_event(&self, event_id: &str) -> Result<CreatedEvent, DomainError> {
        let res = self
            .client
            .get(format!("{}/{}", self.events_url(), event_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| transport_error(PLATFORM, e))?;

        let body = expect_status(PLATFORM, res, StatusCode::OK).await?;
        let resp: EventResponse =
            serde_json::from_str(&body).map_err(|e| serialization_error(PLATFORM, e))?;

        self.into_created(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn draft() -> EventDraft {
        EventDraft {
            title: "Rust Night".into(),
            description: "Talks.".into(),
            date: "2025-01-02".into(),
            time: "18:30".into(),
            venue: "Hall A".into(),
            venue_address: "123 Main St".into(),
        }
    }

    fn adapter(server: &MockServer) -> MeetupAdapter {
        MeetupAdapter::new(
            server.uri(),
            MeetupCredentials {
                api_key: "meetup-key".into(),
                group_urlname: "rust-city".into(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_event_sends_epoch_millis_and_fixed_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rust-city/events"))
            .and(header("authorization", "Bearer meetup-key"))
            .and(body_partial_json(serde_json::json!({
                "name": "Rust Night",
                "time": 1735842600000_i64,
                "duration": 7200000,
                "guest_limit": 100,
                "venue_name": "Hall A",
                "how_to_find_us": "Event will be held at Hall A, 123 Main St"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "305",
                "event_url": "https://www.meetup.com/rust-city/events/305/",
                "status": "upcoming"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = adapter(&server).create_event(&draft()).await.unwrap();
        assert_eq!(created.id, "305");
        assert_eq!(created.url, "https://www.meetup.com/rust-city/events/305/");
    }

    #[tokio::test]
    async fn test_create_event_synthesizes_missing_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 42 })))
            .mount(&server)
            .await;

        let created = adapter(&server).create_event(&draft()).await.unwrap();
        assert_eq!(created.id, "42");
        assert_eq!(created.url, "https://www.meetup.com/rust-city/events/42/");
    }

    #[tokio::test]
    async fn test_create_event_non_created_status_is_error_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"errors\":[\"nope\"]}"))
            .mount(&server)
            .await;

        let err = adapter(&server).create_event(&draft()).await.unwrap_err();
        match err {
            DomainError::Response { detail, .. } => {
                assert!(detail.contains("200"));
                assert!(detail.contains("nope"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_create_event_rejects_unparseable_schedule() {
        let server = MockServer::start().await;
        let mut d = draft();
        d.time = "6pm".into();

        let err = adapter(&server).create_event(&d).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidSchedule(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rust-city/events/305"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "305",
                "name": "Rust Night"
            })))
            .mount(&server)
            .await;

        let event = adapter(&server).get_event("305").await.unwrap();
        assert_eq!(event.url, "https://www.meetup.com/rust-city/events/305/");
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let err = adapter(&server).get_event("999").await.unwrap_err();
        assert!(matches!(err, DomainError::Response { .. }));
    }
}
