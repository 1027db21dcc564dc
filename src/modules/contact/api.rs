use serde_json::json;

use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{count_field, list, one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::contact::entities::{ContactForm, ContactMessage, ContactMessageReply};
use crate::modules::contact::wire::{
    to_contact_message, to_contact_message_reply, ContactMessageReplyWire, ContactMessageWire,
};
use crate::modules::transport::Method;

// "message" doubles as a status string in some responses; `one` skips non-objects.
const SINGLE: &[&str] = &["contactMessage", "contact_message", "message"];
const MANY: &[&str] = &["contactMessages", "contact_messages", "messages"];
const REPLY: &[&str] = &["reply", "contactMessageReply"];
const UNREAD: &[&str] = &["count", "unreadCount", "unread_count"];

impl ApiService {
    pub async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let body = self.get("/contact-messages").await?;
        let rows: Vec<ContactMessageWire> = list(&body, MANY)?;
        Ok(rows
            .into_iter()
            .filter_map(|w| to_contact_message(Some(w)))
            .collect())
    }

    pub async fn get_contact_message(&self, id: &str) -> Result<ContactMessage, ApiError> {
        let body = self
            .get(&format!("/contact-messages/{}", segment(id)))
            .await?;
        required(to_contact_message(one(&body, SINGLE)?), "contact message")
    }

    pub async fn delete_contact_message(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/contact-messages/{}", segment(id)))
            .await?;
        Ok(())
    }

    pub async fn mark_contact_message_as_read(&self, id: &str) -> Result<ContactMessage, ApiError> {
        let body = self
            .request_with_query(
                Method::Put,
                &format!("/contact-messages/{}/read", segment(id)),
                Vec::new(),
                None,
            )
            .await?;
        required(to_contact_message(one(&body, SINGLE)?), "contact message")
    }

    /// Appends a reply; the backend also emails it to the sender.
    pub async fn send_contact_message_reply(
        &self,
        id: &str,
        message: &str,
    ) -> Result<ContactMessageReply, ApiError> {
        let body = self
            .send_json(
                Method::Post,
                &format!("/contact-messages/{}/reply", segment(id)),
                &json!({ "message": message }),
            )
            .await?;
        let reply: Option<ContactMessageReplyWire> = one(&body, REPLY)?;
        required(to_contact_message_reply(reply), "reply")
    }

    pub async fn get_unread_contact_messages_count(&self) -> Result<u64, ApiError> {
        let body = self.get("/contact-messages/unread-count").await?;
        Ok(count_field(&body, UNREAD)
            .or_else(|| body.get("data").and_then(|d| count_field(d, UNREAD)))
            .unwrap_or(0))
    }

    /// Public form. Some deployments echo the stored message, others only `{ success }`.
    pub async fn submit_contact_form(
        &self,
        form: &ContactForm,
    ) -> Result<Option<ContactMessage>, ApiError> {
        let body = self
            .send_json(Method::Post, "/configurations/contact", form)
            .await?;
        Ok(to_contact_message(one(&body, SINGLE)?))
    }
}
