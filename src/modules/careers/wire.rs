use serde::{Deserialize, Serialize};

use crate::modules::careers::entities::{
    CareersPage, CreateJobApplicationRequest, JobApplication, UpdateCareersPageRequest,
    UpdateJobApplicationRequest,
};
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, flag, TimestampsWire};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobApplicationWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub linkedin_url: Option<String>,
    #[serde(default, rename = "linkedinUrl", deserialize_with = "wire::opt_text")]
    pub linkedin_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub cv_url: Option<String>,
    #[serde(default, rename = "cvUrl", deserialize_with = "wire::opt_text")]
    pub cv_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_read: Option<bool>,
    #[serde(default, rename = "isRead", deserialize_with = "wire::opt_bool")]
    pub is_read_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_job_application(wire: Option<JobApplicationWire>) -> Option<JobApplication> {
    let w = wire?;
    Some(JobApplication {
        id: w.id.unwrap_or_default(),
        name: w.name.unwrap_or_default(),
        email: w.email.unwrap_or_default(),
        phone: w.phone,
        position: w.position,
        linkedin_url: first(w.linkedin_url, w.linkedin_url_camel),
        message: w.message,
        cv_url: first(w.cv_url, w.cv_url_camel),
        is_read: flag(w.is_read, w.is_read_camel, false),
        created_at: w.timestamps.created_at(),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobApplicationPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub email: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub phone: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub position: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub linkedin_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub message: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub cv_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_read: PatchField<bool>,
}

impl From<CreateJobApplicationRequest> for JobApplicationPayload {
    fn from(req: CreateJobApplicationRequest) -> Self {
        Self {
            name: PatchField::Value(req.name),
            email: PatchField::Value(req.email),
            phone: PatchField::from_text(req.phone),
            position: PatchField::from_text(req.position),
            linkedin_url: PatchField::from_text(req.linkedin_url),
            message: PatchField::from_text(req.message),
            cv_url: PatchField::from_text(req.cv_url),
            is_read: PatchField::Unset,
        }
    }
}

impl From<UpdateJobApplicationRequest> for JobApplicationPayload {
    fn from(req: UpdateJobApplicationRequest) -> Self {
        Self {
            name: req.name.into(),
            email: req.email.into(),
            phone: PatchField::from_text(req.phone),
            position: PatchField::from_text(req.position),
            linkedin_url: PatchField::from_text(req.linkedin_url),
            message: PatchField::from_text(req.message),
            cv_url: PatchField::from_text(req.cv_url),
            is_read: req.is_read.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareersPageWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub image_url: Option<String>,
    #[serde(default, rename = "imageUrl", deserialize_with = "wire::opt_text")]
    pub image_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::opt_bool")]
    pub is_active_camel: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_careers_page(wire: Option<CareersPageWire>) -> Option<CareersPage> {
    let w = wire?;
    Some(CareersPage {
        id: w.id,
        title: w.title,
        subtitle: w.subtitle,
        description: w.description,
        content: w.content,
        image_url: first(w.image_url, w.image_url_camel),
        is_active: flag(w.is_active, w.is_active_camel, true),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareersPagePayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub subtitle: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub content: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub is_active: PatchField<bool>,
}

impl From<UpdateCareersPageRequest> for CareersPagePayload {
    fn from(req: UpdateCareersPageRequest) -> Self {
        Self {
            title: PatchField::from_text(req.title),
            subtitle: PatchField::from_text(req.subtitle),
            description: PatchField::from_text(req.description),
            content: PatchField::from_text(req.content),
            is_active: req.is_active.into(),
        }
    }
}
