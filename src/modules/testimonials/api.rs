use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::testimonials::entities::{
    CreateTestimonialRequest, Testimonial, UpdateTestimonialRequest,
};
use crate::modules::testimonials::wire::{to_testimonial, TestimonialPayload, TestimonialWire};
use crate::modules::transport::{Method, MultipartForm};
use crate::shared::upload::UploadFile;

const SINGLE: &[&str] = &["testimonial"];
const MANY: &[&str] = &["testimonials"];

impl ApiService {
    pub async fn get_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        let body = self.get("/testimonials").await?;
        let rows: Vec<TestimonialWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_testimonial(Some(w))).collect())
    }

    pub async fn get_all_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        let body = self.get("/testimonials/all").await?;
        let rows: Vec<TestimonialWire> = list(&body, MANY)?;
        Ok(rows.into_iter().filter_map(|w| to_testimonial(Some(w))).collect())
    }

    pub async fn get_testimonial(&self, id: &str) -> Result<Testimonial, ApiError> {
        let body = self.get(&format!("/testimonials/{}", segment(id))).await?;
        required(to_testimonial(one(&body, SINGLE)?), "testimonial")
    }

    pub async fn create_testimonial(
        &self,
        request: CreateTestimonialRequest,
    ) -> Result<Testimonial, ApiError> {
        let payload = TestimonialPayload::from(request);
        let body = self.send_json(Method::Post, "/testimonials", &payload).await?;
        required(to_testimonial(one(&body, SINGLE)?), "testimonial")
    }

    pub async fn update_testimonial(
        &self,
        id: &str,
        request: UpdateTestimonialRequest,
    ) -> Result<Testimonial, ApiError> {
        let payload = TestimonialPayload::from(request);
        let body = self
            .send_json(Method::Put, &format!("/testimonials/{}", segment(id)), &payload)
            .await?;
        required(to_testimonial(one(&body, SINGLE)?), "testimonial")
    }

    pub async fn delete_testimonial(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/testimonials/{}", segment(id))).await?;
        Ok(())
    }

    /// Image or video; the backend derives `media_type` from the file.
    pub async fn upload_testimonial_media(
        &self,
        id: &str,
        file: UploadFile,
    ) -> Result<Testimonial, ApiError> {
        let form = MultipartForm::new().file("media", file);
        let body = self
            .upload(Method::Post, &format!("/testimonials/{}/media", segment(id)), form)
            .await?;
        required(to_testimonial(one(&body, SINGLE)?), "testimonial")
    }
}
