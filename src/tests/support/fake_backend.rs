use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::modules::transport::{
    HttpRequest, HttpResponse, HttpTransport, Method, RequestBody, TransportError,
};

pub const FAKE_TOKEN: &str = "fake-jwt-token";
pub const ADMIN_EMAIL: &str = "admin@firm.com";
pub const ADMIN_PASSWORD: &str = "s3cret!";

#[derive(Default)]
struct FakeState {
    clients: Vec<Value>,
    contact_messages: Vec<Value>,
}

/// In-memory stand-in for the site backend, answering with the same envelopes
/// the real one uses. Every request is recorded.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
    requests: Mutex<Vec<HttpRequest>>,
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn message_not_found() -> HttpResponse {
    HttpResponse::json(404, &json!({ "success": false, "error": "Mensagem não encontrada" }))
}

fn json_body(request: &HttpRequest) -> Map<String, Value> {
    match &request.body {
        RequestBody::Json(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn seed_contact_message(&self, name: &str, email: &str, message: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.state.lock().unwrap().contact_messages.push(json!({
            "id": id,
            "name": name,
            "email": email,
            "phone": null,
            "service_type": "Consultoria",
            "message": message,
            "is_read": false,
            "created_at": now(),
            "updated_at": now(),
            "replies": []
        }));
        id
    }

    fn route(&self, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, ["auth", "login"]) => self.login(request),
            (Method::Get, ["clients"]) => self.list_clients(false),
            (Method::Get, ["clients", "all"]) => self.list_clients(true),
            (Method::Post, ["clients"]) => self.create_client(request),
            (Method::Get, ["contact-messages", id]) => self.get_contact_message(id),
            (Method::Put, ["contact-messages", id, "read"]) => self.mark_read(id),
            (Method::Post, ["contact-messages", id, "reply"]) => self.reply(id, request),
            _ => HttpResponse::json(404, &json!({ "error": "Rota não encontrada" })),
        }
    }

    fn login(&self, request: &HttpRequest) -> HttpResponse {
        let body = json_body(request);
        let email = body.get("email").and_then(Value::as_str);
        let password = body.get("password").and_then(Value::as_str);

        if email == Some(ADMIN_EMAIL) && password == Some(ADMIN_PASSWORD) {
            HttpResponse::json(
                200,
                &json!({
                    "success": true,
                    "token": FAKE_TOKEN,
                    "user": { "id": "u1", "email": ADMIN_EMAIL, "name": "Admin", "created_at": now(), "updated_at": now() }
                }),
            )
        } else {
            HttpResponse::json(401, &json!({ "success": false, "error": "Credenciais inválidas" }))
        }
    }

    fn list_clients(&self, include_inactive: bool) -> HttpResponse {
        let state = self.state.lock().unwrap();
        let rows: Vec<Value> = state
            .clients
            .iter()
            .filter(|c| include_inactive || c["is_active"] == json!(true))
            .cloned()
            .collect();

        // the admin listing answers without `success`
        if include_inactive {
            HttpResponse::json(200, &json!({ "clients": rows }))
        } else {
            HttpResponse::json(200, &json!({ "success": true, "clients": rows }))
        }
    }

    fn create_client(&self, request: &HttpRequest) -> HttpResponse {
        let body = json_body(request);
        let Some(name) = body.get("name").and_then(Value::as_str).filter(|n| !n.is_empty()) else {
            return HttpResponse::json(400, &json!({ "success": false, "error": "Nome é obrigatório" }));
        };

        let mut row = json!({
            "id": Uuid::new_v4().to_string(),
            "name": name,
            "logo_url": null,
            "order": body.get("order").cloned().unwrap_or(json!(0)),
            "is_active": body.get("is_active").cloned().unwrap_or(json!(true)),
            "created_at": now(),
            "updated_at": now()
        });
        for key in ["website_url", "facebook_url", "instagram_url", "linkedin_url", "twitter_url"] {
            row[key] = body.get(key).cloned().unwrap_or(Value::Null);
        }

        self.state.lock().unwrap().clients.push(row.clone());
        HttpResponse::json(201, &json!({ "success": true, "client": row }))
    }

    fn get_contact_message(&self, id: &str) -> HttpResponse {
        let state = self.state.lock().unwrap();
        match state.contact_messages.iter().find(|m| m["id"] == json!(id)) {
            Some(message) => HttpResponse::json(200, &json!({ "success": true, "contactMessage": message })),
            None => message_not_found(),
        }
    }

    fn mark_read(&self, id: &str) -> HttpResponse {
        let mut state = self.state.lock().unwrap();
        match state.contact_messages.iter_mut().find(|m| m["id"] == json!(id)) {
            Some(message) => {
                message["is_read"] = json!(true);
                message["updated_at"] = json!(now());
                HttpResponse::json(
                    200,
                    &json!({
                        "success": true,
                        "message": "Mensagem marcada como lida",
                        "contactMessage": message.clone()
                    }),
                )
            }
            None => message_not_found(),
        }
    }

    fn reply(&self, id: &str, request: &HttpRequest) -> HttpResponse {
        let body = json_body(request);
        let Some(text) = body.get("message").and_then(Value::as_str).filter(|t| !t.is_empty()) else {
            return HttpResponse::json(400, &json!({ "success": false, "error": "Resposta vazia" }));
        };

        let mut state = self.state.lock().unwrap();
        let Some(message) = state.contact_messages.iter_mut().find(|m| m["id"] == json!(id)) else {
            return message_not_found();
        };

        let reply = json!({
            "id": Uuid::new_v4().to_string(),
            "contact_message_id": id,
            "message": text,
            "sent_by": ADMIN_EMAIL,
            "created_at": now()
        });
        if let Some(replies) = message["replies"].as_array_mut() {
            replies.push(reply.clone());
        }

        HttpResponse::json(201, &json!({ "success": true, "reply": reply }))
    }
}

#[async_trait]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.route(&request);
        self.requests.lock().unwrap().push(request);
        Ok(response)
    }
}
