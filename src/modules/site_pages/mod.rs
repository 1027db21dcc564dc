//! Singleton configuration rows behind the public pages. Each getter returns
//! `None` while the row has never been saved.

pub mod configuration;
pub mod hero;
pub mod login_page;
pub mod privacy_policy;
pub mod section;

pub use configuration::{to_site_configuration, SiteConfiguration, UpdateSiteConfigurationRequest};
pub use hero::{to_hero, Hero, UpdateHeroRequest};
pub use login_page::{to_login_page, LoginPage, UpdateLoginPageRequest};
pub use privacy_policy::{to_privacy_policy, PrivacyPolicy, UpdatePrivacyPolicyRequest};
pub use section::{to_section, Section, SectionKind, UpdateSectionRequest};
