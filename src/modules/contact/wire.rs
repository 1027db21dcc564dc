use serde::Deserialize;

use crate::modules::contact::entities::{ContactMessage, ContactMessageReply};
use crate::shared::wire::{self, first, flag, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessageReplyWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub contact_message_id: Option<String>,
    #[serde(default, rename = "contactMessageId", deserialize_with = "wire::opt_id")]
    pub contact_message_id_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub sent_by: Option<String>,
    #[serde(default, rename = "sentBy", deserialize_with = "wire::opt_text")]
    pub sent_by_camel: Option<String>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_contact_message_reply(wire: Option<ContactMessageReplyWire>) -> Option<ContactMessageReply> {
    let w = wire?;
    Some(ContactMessageReply {
        id: w.id.unwrap_or_default(),
        contact_message_id: first(w.contact_message_id, w.contact_message_id_camel),
        message: w.message.unwrap_or_default(),
        sent_by: first(w.sent_by, w.sent_by_camel),
        created_at: w.timestamps.created_at(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessageWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub service_type: Option<String>,
    #[serde(default, rename = "serviceType", deserialize_with = "wire::opt_text")]
    pub service_type_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_read: Option<bool>,
    #[serde(default, rename = "isRead", deserialize_with = "wire::opt_bool")]
    pub is_read_camel: Option<bool>,
    #[serde(default)]
    pub replies: Option<Vec<Option<ContactMessageReplyWire>>>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_contact_message(wire: Option<ContactMessageWire>) -> Option<ContactMessage> {
    let w = wire?;
    let replies = w
        .replies
        .unwrap_or_default()
        .into_iter()
        .filter_map(to_contact_message_reply)
        .collect();

    Some(ContactMessage {
        id: w.id.unwrap_or_default(),
        name: w.name.unwrap_or_default(),
        email: w.email.unwrap_or_default(),
        phone: w.phone,
        service_type: first(w.service_type, w.service_type_camel),
        message: w.message.unwrap_or_default(),
        is_read: flag(w.is_read, w.is_read_camel, false),
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at_opt(),
        replies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Option<ContactMessageWire> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn keeps_reply_order() {
        let message = to_contact_message(decode(json!({
            "id": "m1",
            "name": "João",
            "email": "joao@example.com",
            "service_type": "Abertura de empresa",
            "message": "Quanto custa?",
            "is_read": true,
            "created_at": "2024-03-01T10:00:00Z",
            "replies": [
                { "id": "r1", "message": "Olá", "created_at": "2024-03-01T11:00:00Z" },
                null,
                { "id": "r2", "message": "Segue proposta", "createdAt": "2024-03-02T11:00:00Z" }
            ]
        })))
        .unwrap();

        assert!(message.is_read);
        assert_eq!(message.service_type.as_deref(), Some("Abertura de empresa"));
        let ids: Vec<&str> = message.replies.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn unread_by_default() {
        let message = to_contact_message(decode(json!({ "id": "m2" }))).unwrap();
        assert!(!message.is_read);
        assert!(message.replies.is_empty());
        assert!(message.updated_at.is_none());
    }

    #[test]
    fn null_inputs_yield_none() {
        assert!(to_contact_message(None).is_none());
        assert!(to_contact_message_reply(None).is_none());
    }
}
