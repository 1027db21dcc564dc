use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::slides::entities::{CreateSlideRequest, Slide, UpdateSlideRequest};
use crate::modules::slides::wire::{to_slide, SlidePayload, SlideWire};
use crate::modules::transport::Method;

const SINGLE: &[&str] = &["slide"];
const MANY: &[&str] = &["slides"];

impl ApiService {
    /// Active slides, as shown on the public home page.
    pub async fn get_slides(&self) -> Result<Vec<Slide>, ApiError> {
        let body = self.get("/slides").await?;
        let rows: Vec<SlideWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_slide(Some(w))).collect())
    }

    /// Every slide, active or not (admin).
    pub async fn get_all_slides(&self) -> Result<Vec<Slide>, ApiError> {
        let body = self.get("/slides/all").await?;
        let rows: Vec<SlideWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_slide(Some(w))).collect())
    }

    pub async fn get_slide(&self, id: &str) -> Result<Slide, ApiError> {
        let body = self.get(&format!("/slides/{}", segment(id))).await?;
        required(to_slide(one(&body, SINGLE)?), "slide")
    }

    pub async fn create_slide(&self, request: CreateSlideRequest) -> Result<Slide, ApiError> {
        let payload = SlidePayload::from(request);
        let body = self.send_json(Method::Post, "/slides", &payload).await?;
        required(to_slide(one(&body, SINGLE)?), "slide")
    }

    pub async fn update_slide(
        &self,
        id: &str,
        request: UpdateSlideRequest,
    ) -> Result<Slide, ApiError> {
        let payload = SlidePayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/slides/{}", segment(id)), &payload)
            .await?;
        required(to_slide(one(&body, SINGLE)?), "slide")
    }

    pub async fn delete_slide(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/slides/{}", segment(id))).await?;
        Ok(())
    }
}
