use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::clients::entities::{Client, CreateClientRequest, UpdateClientRequest};
use crate::modules::clients::wire::{to_client, ClientPayload, ClientWire};
use crate::modules::transport::{Method, MultipartForm};
use crate::shared::upload::UploadFile;

const SINGLE: &[&str] = &["client"];
const MANY: &[&str] = &["clients"];

impl ApiService {
    /// Active clients only (public site).
    pub async fn get_clients(&self) -> Result<Vec<Client>, ApiError> {
        let body = self.get("/clients").await?;
        let rows: Vec<ClientWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_client(Some(w))).collect())
    }

    pub async fn get_all_clients(&self) -> Result<Vec<Client>, ApiError> {
        let body = self.get("/clients/all").await?;
        let rows: Vec<ClientWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_client(Some(w))).collect())
    }

    pub async fn get_client(&self, id: &str) -> Result<Client, ApiError> {
        let body = self.get(&format!("/clients/{}", segment(id))).await?;
        required(to_client(one(&body, SINGLE)?), "client")
    }

    pub async fn create_client(&self, request: CreateClientRequest) -> Result<Client, ApiError> {
        let payload = ClientPayload::from(request);
        let body = self.send_json(Method::Post, "/clients", &payload).await?;
        required(to_client(one(&body, SINGLE)?), "client")
    }

    pub async fn update_client(
        &self,
        id: &str,
        request: UpdateClientRequest,
    ) -> Result<Client, ApiError> {
        let payload = ClientPayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/clients/{}", segment(id)), &payload)
            .await?;
        required(to_client(one(&body, SINGLE)?), "client")
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{}", segment(id))).await?;
        Ok(())
    }

    pub async fn upload_client_logo(&self, id: &str, file: UploadFile) -> Result<Client, ApiError> {
        let form = MultipartForm::new().file("logo", file);
        let body = self
            .upload(Method::Post, &format!("/clients/{}/logo", segment(id)), form)
            .await?;
        required(to_client(one(&body, SINGLE)?), "client")
    }

    pub async fn delete_client_logo(&self, id: &str) -> Result<Client, ApiError> {
        let body = self.delete(&format!("/clients/{}/logo", segment(id))).await?;
        required(to_client(one(&body, SINGLE)?), "client")
    }
}
