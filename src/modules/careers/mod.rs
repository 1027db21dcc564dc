pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{
    CareersPage, CreateJobApplicationRequest, JobApplication, UpdateCareersPageRequest,
    UpdateJobApplicationRequest,
};
pub use wire::{to_careers_page, to_job_application, CareersPageWire, JobApplicationWire};
