use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::client::envelope::{one, required};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;
use crate::shared::patch::PatchField;
use crate::shared::wire::{self, first, TimestampsWire};

const KEYS: &[&str] = &["configuracoes", "configuration", "config"];

/// Firm contact data, social links and footer text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfiguration {
    pub id: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
    pub footer_text: Option<String>,
    pub map_embed_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigurationWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub company_name: Option<String>,
    #[serde(default, rename = "companyName", deserialize_with = "wire::opt_text")]
    pub company_name_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub whatsapp: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub business_hours: Option<String>,
    #[serde(default, rename = "businessHours", deserialize_with = "wire::opt_text")]
    pub business_hours_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub facebook_url: Option<String>,
    #[serde(default, rename = "facebookUrl", deserialize_with = "wire::opt_text")]
    pub facebook_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub instagram_url: Option<String>,
    #[serde(default, rename = "instagramUrl", deserialize_with = "wire::opt_text")]
    pub instagram_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub linkedin_url: Option<String>,
    #[serde(default, rename = "linkedinUrl", deserialize_with = "wire::opt_text")]
    pub linkedin_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub youtube_url: Option<String>,
    #[serde(default, rename = "youtubeUrl", deserialize_with = "wire::opt_text")]
    pub youtube_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub footer_text: Option<String>,
    #[serde(default, rename = "footerText", deserialize_with = "wire::opt_text")]
    pub footer_text_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub map_embed_url: Option<String>,
    #[serde(default, rename = "mapEmbedUrl", deserialize_with = "wire::opt_text")]
    pub map_embed_url_camel: Option<String>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_site_configuration(wire: Option<SiteConfigurationWire>) -> Option<SiteConfiguration> {
    let w = wire?;
    Some(SiteConfiguration {
        id: w.id,
        company_name: first(w.company_name, w.company_name_camel),
        email: w.email,
        phone: w.phone,
        whatsapp: w.whatsapp,
        address: w.address,
        business_hours: first(w.business_hours, w.business_hours_camel),
        facebook_url: first(w.facebook_url, w.facebook_url_camel),
        instagram_url: first(w.instagram_url, w.instagram_url_camel),
        linkedin_url: first(w.linkedin_url, w.linkedin_url_camel),
        youtube_url: first(w.youtube_url, w.youtube_url_camel),
        footer_text: first(w.footer_text, w.footer_text_camel),
        map_embed_url: first(w.map_embed_url, w.map_embed_url_camel),
        updated_at: w.timestamps.updated_at_opt(),
    })
}

/// Every field is optional text: `None` keeps, `Some("")` clears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSiteConfigurationRequest {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
    pub footer_text: Option<String>,
    pub map_embed_url: Option<String>,
}

impl From<&SiteConfiguration> for UpdateSiteConfigurationRequest {
    fn from(c: &SiteConfiguration) -> Self {
        Self {
            company_name: c.company_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            whatsapp: c.whatsapp.clone(),
            address: c.address.clone(),
            business_hours: c.business_hours.clone(),
            facebook_url: c.facebook_url.clone(),
            instagram_url: c.instagram_url.clone(),
            linkedin_url: c.linkedin_url.clone(),
            youtube_url: c.youtube_url.clone(),
            footer_text: c.footer_text.clone(),
            map_embed_url: c.map_embed_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteConfigurationPayload {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub company_name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub email: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub phone: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub whatsapp: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub address: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub business_hours: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub facebook_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub instagram_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub linkedin_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub youtube_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub footer_text: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub map_embed_url: PatchField<String>,
}

impl From<UpdateSiteConfigurationRequest> for SiteConfigurationPayload {
    fn from(req: UpdateSiteConfigurationRequest) -> Self {
        Self {
            company_name: PatchField::from_text(req.company_name),
            email: PatchField::from_text(req.email),
            phone: PatchField::from_text(req.phone),
            whatsapp: PatchField::from_text(req.whatsapp),
            address: PatchField::from_text(req.address),
            business_hours: PatchField::from_text(req.business_hours),
            facebook_url: PatchField::from_text(req.facebook_url),
            instagram_url: PatchField::from_text(req.instagram_url),
            linkedin_url: PatchField::from_text(req.linkedin_url),
            youtube_url: PatchField::from_text(req.youtube_url),
            footer_text: PatchField::from_text(req.footer_text),
            map_embed_url: PatchField::from_text(req.map_embed_url),
        }
    }
}

impl ApiService {
    pub async fn get_configuration(&self) -> Result<Option<SiteConfiguration>, ApiError> {
        let body = self.get("/configuracoes").await?;
        Ok(to_site_configuration(one(&body, KEYS)?))
    }

    pub async fn update_configuration(
        &self,
        request: UpdateSiteConfigurationRequest,
    ) -> Result<SiteConfiguration, ApiError> {
        let payload = SiteConfigurationPayload::from(request);
        let body = self
            .send_json(Method::Put, "/configuracoes", &payload)
            .await?;
        required(to_site_configuration(one(&body, KEYS)?), "configuration")
    }
}
