use crate::modules::careers::entities::{
    CareersPage, CreateJobApplicationRequest, JobApplication, UpdateCareersPageRequest,
    UpdateJobApplicationRequest,
};
use crate::modules::careers::wire::{
    to_careers_page, to_job_application, CareersPagePayload, CareersPageWire,
    JobApplicationPayload, JobApplicationWire,
};
use crate::modules::client::api_service::segment;
use crate::modules::client::envelope::{list, one, required, string_field};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::{Method, MultipartForm};
use crate::shared::upload::UploadFile;

const SINGLE: &[&str] = &["jobApplication", "job_application", "application"];
const MANY: &[&str] = &["jobApplications", "job_applications", "applications"];
const PAGE: &[&str] = &["careersPage", "careers_page", "page"];
const CV_URL: &[&str] = &["url", "cvUrl", "cv_url", "fileUrl"];

impl ApiService {
    pub async fn get_job_applications(&self) -> Result<Vec<JobApplication>, ApiError> {
        let body = self.get("/job-applications").await?;
        let rows: Vec<JobApplicationWire> = list(&body, MANY)?;
        Ok(rows
            .into_iter()
            .filter_map(|w| to_job_application(Some(w)))
            .collect())
    }

    pub async fn get_job_application(&self, id: &str) -> Result<JobApplication, ApiError> {
        let body = self
            .get(&format!("/job-applications/{}", segment(id)))
            .await?;
        required(to_job_application(one(&body, SINGLE)?), "job application")
    }

    pub async fn create_job_application(
        &self,
        request: CreateJobApplicationRequest,
    ) -> Result<JobApplication, ApiError> {
        let payload = JobApplicationPayload::from(request);
        let body = self
            .send_json(Method::Post, "/job-applications", &payload)
            .await?;
        required(to_job_application(one(&body, SINGLE)?), "job application")
    }

    pub async fn update_job_application(
        &self,
        id: &str,
        request: UpdateJobApplicationRequest,
    ) -> Result<JobApplication, ApiError> {
        let payload = JobApplicationPayload::from(request);
        let body = self
            .send_json(
                Method::Put,
                &format!("/job-applications/{}", segment(id)),
                &payload,
            )
            .await?;
        required(to_job_application(one(&body, SINGLE)?), "job application")
    }

    pub async fn mark_job_application_as_read(&self, id: &str) -> Result<JobApplication, ApiError> {
        self.update_job_application(
            id,
            UpdateJobApplicationRequest {
                is_read: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete_job_application(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/job-applications/{}", segment(id)))
            .await?;
        Ok(())
    }

    /// Stores the CV and returns its URL, to be sent as `cv_url` afterwards.
    pub async fn upload_job_application_cv(&self, file: UploadFile) -> Result<String, ApiError> {
        let form = MultipartForm::new().file("cv", file);
        let body = self
            .upload(Method::Post, "/job-applications/upload", form)
            .await?;
        let url = string_field(&body, CV_URL)
            .or_else(|| body.get("data").and_then(|d| string_field(d, CV_URL)));
        required(url, "cv url")
    }

    /// `None` until the page is saved for the first time.
    pub async fn get_careers_page(&self) -> Result<Option<CareersPage>, ApiError> {
        let body = self.get("/careers-page").await?;
        let page: Option<CareersPageWire> = one(&body, PAGE)?;
        Ok(to_careers_page(page))
    }

    pub async fn update_careers_page(
        &self,
        request: UpdateCareersPageRequest,
    ) -> Result<CareersPage, ApiError> {
        let payload = CareersPagePayload::from(request);
        let body = self
            .send_json(Method::Put, "/careers-page", &payload)
            .await?;
        required(to_careers_page(one(&body, PAGE)?), "careers page")
    }

    pub async fn upload_careers_page_image(&self, file: UploadFile) -> Result<CareersPage, ApiError> {
        let form = MultipartForm::new().file("image", file);
        let body = self
            .upload(Method::Post, "/careers-page/image", form)
            .await?;
        required(to_careers_page(one(&body, PAGE)?), "careers page")
    }

    pub async fn delete_careers_page_image(&self) -> Result<CareersPage, ApiError> {
        let body = self.delete("/careers-page/image").await?;
        required(to_careers_page(one(&body, PAGE)?), "careers page")
    }
}
