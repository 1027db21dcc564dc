use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::services::entities::{CreateServiceRequest, Service, UpdateServiceRequest};
use crate::modules::services::wire::{to_service, ServicePayload, ServiceWire};
use crate::modules::transport::{Method, MultipartForm};
use crate::shared::upload::UploadFile;

const SINGLE: &[&str] = &["service"];
const MANY: &[&str] = &["services"];

impl ApiService {
    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        let body = self.get("/services").await?;
        let rows: Vec<ServiceWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_service(Some(w))).collect())
    }

    /// Accepts either the id or the slug.
    pub async fn get_service(&self, id_or_slug: &str) -> Result<Service, ApiError> {
        let body = self
            .get(&format!("/services/{}", segment(id_or_slug)))
            .await?;
        required(to_service(one(&body, SINGLE)?), "service")
    }

    pub async fn create_service(&self, request: CreateServiceRequest) -> Result<Service, ApiError> {
        let payload = ServicePayload::from(request);
        let body = self.send_json(Method::Post, "/services", &payload).await?;
        required(to_service(one(&body, SINGLE)?), "service")
    }

    pub async fn update_service(
        &self,
        id: &str,
        request: UpdateServiceRequest,
    ) -> Result<Service, ApiError> {
        let payload = ServicePayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/services/{}", segment(id)), &payload)
            .await?;
        required(to_service(one(&body, SINGLE)?), "service")
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/services/{}", segment(id))).await?;
        Ok(())
    }

    pub async fn upload_service_image(
        &self,
        id: &str,
        file: UploadFile,
    ) -> Result<Service, ApiError> {
        let form = MultipartForm::new().file("image", file);
        let body = self
            .upload(Method::Post, &format!("/services/{}/image", segment(id)), form)
            .await?;
        required(to_service(one(&body, SINGLE)?), "service")
    }

    pub async fn delete_service_image(&self, id: &str) -> Result<Service, ApiError> {
        let body = self
            .delete(&format!("/services/{}/image", segment(id)))
            .await?;
        required(to_service(one(&body, SINGLE)?), "service")
    }
}
