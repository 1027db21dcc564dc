use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::taxonomy::entities::{Label, LabelKind, LabelRequest, UpdateLabelRequest};
use crate::modules::taxonomy::wire::{to_label, LabelPayload, LabelWire};
use crate::modules::transport::Method;

impl ApiService {
    async fn list_labels(&self, kind: LabelKind) -> Result<Vec<Label>, ApiError> {
        let body = self.get(kind.collection()).await?;
        let rows: Vec<LabelWire> = list(&body, kind.list_keys())?;
        Ok(rows.into_iter().filter_map(|w| to_label(Some(w))).collect())
    }

    async fn get_label(&self, kind: LabelKind, id: &str) -> Result<Label, ApiError> {
        let body = self
            .get(&format!("{}/{}", kind.collection(), segment(id)))
            .await?;
        required(to_label(one(&body, kind.single_keys())?), kind.noun())
    }

    async fn create_label(&self, kind: LabelKind, request: LabelRequest) -> Result<Label, ApiError> {
        let payload = LabelPayload::from(request);
        let body = self
            .send_json(Method::Post, kind.collection(), &payload)
            .await?;
        required(to_label(one(&body, kind.single_keys())?), kind.noun())
    }

    async fn update_label(
        &self,
        kind: LabelKind,
        id: &str,
        request: UpdateLabelRequest,
    ) -> Result<Label, ApiError> {
        let payload = LabelPayload::from(request);
        let body = self
            .send_json(
                Method::Put,
                &format!("{}/{}", kind.collection(), segment(id)),
                &payload,
            )
            .await?;
        required(to_label(one(&body, kind.single_keys())?), kind.noun())
    }

    /// The backend refuses labels still attached to posts; its message is
    /// surfaced as-is through `ApiError::Http`.
    async fn delete_label(&self, kind: LabelKind, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", kind.collection(), segment(id)))
            .await?;
        Ok(())
    }

    pub async fn get_categories(&self) -> Result<Vec<Label>, ApiError> {
        self.list_labels(LabelKind::Category).await
    }

    pub async fn get_category(&self, id: &str) -> Result<Label, ApiError> {
        self.get_label(LabelKind::Category, id).await
    }

    pub async fn create_category(&self, request: LabelRequest) -> Result<Label, ApiError> {
        self.create_label(LabelKind::Category, request).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        request: UpdateLabelRequest,
    ) -> Result<Label, ApiError> {
        self.update_label(LabelKind::Category, id, request).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.delete_label(LabelKind::Category, id).await
    }

    pub async fn get_tags(&self) -> Result<Vec<Label>, ApiError> {
        self.list_labels(LabelKind::Tag).await
    }

    pub async fn get_tag(&self, id: &str) -> Result<Label, ApiError> {
        self.get_label(LabelKind::Tag, id).await
    }

    pub async fn create_tag(&self, request: LabelRequest) -> Result<Label, ApiError> {
        self.create_label(LabelKind::Tag, request).await
    }

    pub async fn update_tag(&self, id: &str, request: UpdateLabelRequest) -> Result<Label, ApiError> {
        self.update_label(LabelKind::Tag, id, request).await
    }

    pub async fn delete_tag(&self, id: &str) -> Result<(), ApiError> {
        self.delete_label(LabelKind::Tag, id).await
    }
}
