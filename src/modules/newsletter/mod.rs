use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;
use crate::shared::wire::{self, flag, TimestampsWire};

const SINGLE: &[&str] = &["subscription", "subscriber"];
const MANY: &[&str] = &["subscriptions", "subscribers"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterSubscriptionWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_newsletter_subscription(
    wire: Option<NewsletterSubscriptionWire>,
) -> Option<NewsletterSubscription> {
    let w = wire?;
    Some(NewsletterSubscription {
        id: w.id.unwrap_or_default(),
        email: w.email.unwrap_or_default(),
        name: w.name.filter(|n| !n.is_empty()),
        is_active: flag(w.is_active, w.is_active_camel, true),
        created_at: w.timestamps.created_at(),
    })
}

#[derive(Debug, Serialize)]
struct SubscribePayload<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl ApiService {
    /// Public footer form. An already-subscribed address comes back as a 4xx
    /// with the backend's message. `None` when the backend acknowledges the
    /// subscription without echoing it.
    pub async fn subscribe_newsletter(
        &self,
        email: &str,
        name: Option<&str>,
    ) -> Result<Option<NewsletterSubscription>, ApiError> {
        let payload = SubscribePayload {
            email: email.trim(),
            name: name.map(str::trim).filter(|n| !n.is_empty()),
        };
        let body = self
            .send_json(Method::Post, "/newsletter/subscriptions", &payload)
            .await?;
        Ok(to_newsletter_subscription(one(&body, SINGLE)?))
    }

    pub async fn get_newsletter_subscriptions(
        &self,
    ) -> Result<Vec<NewsletterSubscription>, ApiError> {
        let body = self.get("/newsletter/subscriptions").await?;
        let rows: Vec<NewsletterSubscriptionWire> = list(&body, MANY)?;
        Ok(rows
            .into_iter()
            .filter_map(|w| to_newsletter_subscription(Some(w)))
            .collect())
    }

    pub async fn delete_newsletter_subscription(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/newsletter/subscriptions/{}", segment(id)))
            .await?;
        Ok(())
    }

    /// CSV bytes exactly as the backend produced them.
    pub async fn export_newsletter_subscriptions(&self) -> Result<Vec<u8>, ApiError> {
        self.download("/newsletter/subscriptions/export", Vec::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_name_is_none() {
        let wire: Option<NewsletterSubscriptionWire> = serde_json::from_value(json!({
            "id": "n1",
            "email": "leitor@example.com",
            "name": "",
            "createdAt": "2024-06-01T00:00:00Z"
        }))
        .unwrap();

        let sub = to_newsletter_subscription(wire).unwrap();

        assert!(sub.name.is_none());
        assert!(sub.is_active);
    }

    #[test]
    fn subscribe_payload_omits_missing_name() {
        let body = serde_json::to_value(SubscribePayload {
            email: "leitor@example.com",
            name: None,
        })
        .unwrap();

        assert_eq!(body, json!({ "email": "leitor@example.com" }));
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_newsletter_subscription(None).is_none());
    }
}
