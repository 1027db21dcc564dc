use std::sync::Arc;

use crate::modules::auth::LoginOutcome;
use crate::modules::clients::CreateClientRequest;
use crate::modules::transport::Method;
use crate::shared::session::{FileSession, TokenProvider};
use crate::tests::support::fake_backend::{ADMIN_EMAIL, ADMIN_PASSWORD, FAKE_TOKEN};
use crate::tests::support::fixtures::service_with;
use crate::tests::support::FakeBackend;
use crate::ApiService;

#[tokio::test]
async fn created_client_shows_up_in_admin_listing() {
    let backend = Arc::new(FakeBackend::new());
    let api = service_with(backend.clone(), Some("t"));

    let created = api
        .create_client(CreateClientRequest::new("Acme"))
        .await
        .unwrap();
    let all = api.get_all_clients().await.unwrap();

    let acme = all.iter().find(|c| c.name == "Acme").unwrap();
    assert_eq!(acme.id, created.id);
    assert_eq!(acme.order, 0);
    assert!(acme.is_active);
    assert!(acme.logo_url.is_none());
}

#[tokio::test]
async fn inactive_client_is_hidden_from_public_listing() {
    let backend = Arc::new(FakeBackend::new());
    let api = service_with(backend.clone(), Some("t"));

    let mut hidden = CreateClientRequest::new("Oculto");
    hidden.is_active = false;
    api.create_client(hidden).await.unwrap();
    api.create_client(CreateClientRequest::new("Visível")).await.unwrap();

    let public: Vec<String> = api.get_clients().await.unwrap().into_iter().map(|c| c.name).collect();
    let admin = api.get_all_clients().await.unwrap();

    assert_eq!(public, vec!["Visível".to_string()]);
    assert_eq!(admin.len(), 2);
    assert!(!admin.iter().find(|c| c.name == "Oculto").unwrap().is_active);
}

#[tokio::test]
async fn mark_as_read_is_visible_on_refetch() {
    let backend = Arc::new(FakeBackend::new());
    let id = backend.seed_contact_message("João", "joao@example.com", "Preciso de um contador");
    let api = service_with(backend.clone(), Some("t"));

    let before = api.get_contact_message(&id).await.unwrap();
    assert!(!before.is_read);

    let marked = api.mark_contact_message_as_read(&id).await.unwrap();
    assert!(marked.is_read);

    let after = api.get_contact_message(&id).await.unwrap();
    assert!(after.is_read);

    // one GET per call, nothing served from a cache
    let gets = backend
        .requests()
        .iter()
        .filter(|r| r.method == Method::Get)
        .count();
    assert_eq!(gets, 2);
}

#[tokio::test]
async fn reply_appends_exactly_one_entry() {
    let backend = Arc::new(FakeBackend::new());
    let id = backend.seed_contact_message("Ana", "ana@example.com", "Qual o prazo do IR?");
    let api = service_with(backend.clone(), Some("t"));

    let before = api.get_contact_message(&id).await.unwrap().replies.len();

    let reply = api.send_contact_message_reply(&id, "Hello").await.unwrap();
    assert_eq!(reply.message, "Hello");

    let after = api.get_contact_message(&id).await.unwrap();
    assert_eq!(after.replies.len(), before + 1);
    assert_eq!(after.replies.last().unwrap().message, "Hello");
}

#[tokio::test]
async fn unknown_message_surfaces_backend_error() {
    let backend = Arc::new(FakeBackend::new());
    let api = service_with(backend, Some("t"));

    let err = api.get_contact_message("nope").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Mensagem não encontrada");
}

#[tokio::test]
async fn login_stores_token_for_following_calls() {
    let backend = Arc::new(FakeBackend::new());
    let api = service_with(backend.clone(), None);

    let outcome = api.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    let LoginOutcome::Authenticated(session) = outcome else {
        panic!("expected a token");
    };
    assert_eq!(session.token, FAKE_TOKEN);
    assert_eq!(session.user.unwrap().email, ADMIN_EMAIL);
    assert!(api.is_authenticated());

    api.get_all_clients().await.unwrap();
    let last = backend.last_request().unwrap();
    assert_eq!(
        last.header("Authorization"),
        Some(format!("Bearer {}", FAKE_TOKEN).as_str())
    );

    api.logout().unwrap();
    api.get_all_clients().await.unwrap();
    assert!(backend.last_request().unwrap().header("Authorization").is_none());
}

#[tokio::test]
async fn wrong_password_keeps_session_empty() {
    let backend = Arc::new(FakeBackend::new());
    let api = service_with(backend, None);

    let err = api.login(ADMIN_EMAIL, "wrong").await.unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.to_string(), "Credenciais inválidas");
    assert!(!api.is_authenticated());
}

#[tokio::test]
async fn handles_sharing_a_file_session_see_each_others_login() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let backend = Arc::new(FakeBackend::new());

    let dashboard = ApiService::with_transport(backend.clone(), Arc::new(FileSession::new(&path)));
    let other_tab = ApiService::with_transport(backend.clone(), Arc::new(FileSession::new(&path)));

    dashboard.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    assert!(other_tab.is_authenticated());
    assert_eq!(
        FileSession::new(&path).current_token().as_deref(),
        Some(FAKE_TOKEN)
    );
}
