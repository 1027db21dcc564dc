//! Admin login audit trail. Read-only from this side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::client::envelope::{count_field, list, page_meta};
use crate::modules::client::{ApiError, ApiService};
use crate::modules::transport::Method;
use crate::shared::wire::{self, first, flag, TimestampsWire};

const MANY: &[&str] = &["logs", "accessLogs", "access_logs"];
const STATS: &[&str] = &["stats", "statistics"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    pub id: String,
    pub admin_id: Option<String>,
    pub admin_email: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    /// `password`, `code`, ... as recorded by the backend.
    pub login_method: Option<String>,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessLogWire {
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub admin_id: Option<String>,
    #[serde(default, rename = "adminId", deserialize_with = "wire::opt_id")]
    pub admin_id_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub admin_email: Option<String>,
    #[serde(default, rename = "adminEmail", deserialize_with = "wire::opt_text")]
    pub admin_email_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub ip_address: Option<String>,
    #[serde(default, rename = "ipAddress", deserialize_with = "wire::opt_text")]
    pub ip_address_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub user_agent: Option<String>,
    #[serde(default, rename = "userAgent", deserialize_with = "wire::opt_text")]
    pub user_agent_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub login_method: Option<String>,
    #[serde(default, rename = "loginMethod", deserialize_with = "wire::opt_text")]
    pub login_method_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_bool")]
    pub success: Option<bool>,
    #[serde(flatten)]
    pub timestamps: TimestampsWire,
}

pub fn to_access_log(wire: Option<AccessLogWire>) -> Option<AccessLog> {
    let w = wire?;
    Some(AccessLog {
        id: w.id.unwrap_or_default(),
        admin_id: first(w.admin_id, w.admin_id_camel),
        admin_email: first(w.admin_email, w.admin_email_camel),
        ip_address: first(w.ip_address, w.ip_address_camel),
        user_agent: first(w.user_agent, w.user_agent_camel),
        login_method: first(w.login_method, w.login_method_camel),
        success: flag(w.success, None, false),
        created_at: w.timestamps.created_at(),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessLogFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub success: Option<bool>,
    pub email: Option<String>,
}

impl AccessLogFilter {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(success) = self.success {
            query.push(("success".to_string(), success.to_string()));
        }
        if let Some(email) = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            query.push(("email".to_string(), email.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessLogPage {
    pub logs: Vec<AccessLog>,
    pub total: Option<u64>,
    pub page: Option<u64>,
    pub total_pages: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogStats {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    /// Distinct admins that logged in, when the backend reports it.
    pub unique_admins: Option<u64>,
}

fn to_access_log_stats(body: &Value) -> AccessLogStats {
    let source = STATS
        .iter()
        .find_map(|key| body.get(*key).filter(|v| v.is_object()))
        .or_else(|| body.get("data").filter(|v| v.is_object()))
        .unwrap_or(body);

    AccessLogStats {
        total: count_field(source, &["total", "totalLogins", "total_logins"]).unwrap_or(0),
        successful: count_field(source, &["successful", "successfulLogins", "successful_logins"])
            .unwrap_or(0),
        failed: count_field(source, &["failed", "failedLogins", "failed_logins"]).unwrap_or(0),
        unique_admins: count_field(source, &["uniqueAdmins", "unique_admins"]),
    }
}

impl ApiService {
    pub async fn get_access_logs(&self, filter: &AccessLogFilter) -> Result<AccessLogPage, ApiError> {
        let body = self
            .request_with_query(Method::Get, "/access-logs", filter.to_query(), None)
            .await?;
        let rows: Vec<AccessLogWire> = list(&body, MANY)?;

        Ok(AccessLogPage {
            logs: rows.into_iter().filter_map(|w| to_access_log(Some(w))).collect(),
            total: page_meta(&body, &["total"]),
            page: page_meta(&body, &["page"]),
            total_pages: page_meta(&body, &["totalPages", "total_pages"]),
        })
    }

    pub async fn get_access_log_stats(&self) -> Result<AccessLogStats, ApiError> {
        let body = self.get("/access-logs/stats").await?;
        Ok(to_access_log_stats(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn translates_failed_attempt() {
        let wire: Option<AccessLogWire> = serde_json::from_value(json!({
            "id": 17,
            "adminEmail": "admin@firm.com",
            "ip_address": "10.0.0.5",
            "loginMethod": "code",
            "success": false,
            "created_at": "2024-09-09T09:09:09Z"
        }))
        .unwrap();

        let log = to_access_log(wire).unwrap();

        assert_eq!(log.id, "17");
        assert_eq!(log.admin_email.as_deref(), Some("admin@firm.com"));
        assert_eq!(log.login_method.as_deref(), Some("code"));
        assert!(!log.success);
    }

    #[test]
    fn stats_accept_nested_or_flat_bodies() {
        let nested = to_access_log_stats(&json!({
            "success": true,
            "stats": { "total": 10, "successful": 8, "failed": 2 }
        }));
        assert_eq!(nested.total, 10);
        assert_eq!(nested.failed, 2);

        let flat = to_access_log_stats(&json!({ "totalLogins": "4", "successfulLogins": 4 }));
        assert_eq!(flat.total, 4);
        assert_eq!(flat.successful, 4);
        assert_eq!(flat.failed, 0);
        assert!(flat.unique_admins.is_none());
    }

    #[test]
    fn filter_query_trims_email() {
        let filter = AccessLogFilter {
            page: Some(1),
            success: Some(false),
            email: Some("  admin@firm.com ".into()),
            ..Default::default()
        };

        assert_eq!(
            filter.to_query(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("success".to_string(), "false".to_string()),
                ("email".to_string(), "admin@firm.com".to_string()),
            ]
        );
    }

    #[test]
    fn null_input_yields_none() {
        assert!(to_access_log(None).is_none());
    }
}
