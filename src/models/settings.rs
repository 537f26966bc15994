//! Site-wide settings and contact singletons.

use serde::{Deserialize, Serialize};

/// Social profile links shown in the footer and contact page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub youtube: String,
}

/// Contents of `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub membership_form_url: String,
    #[serde(default)]
    pub membership_fee: String,
}

impl SiteSettings {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.site_title.trim().is_empty() {
            vec!["siteTitle"]
        } else {
            Vec::new()
        }
    }
}

/// Map pin for the contact page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapLocation {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

/// Contents of `contact.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub map: MapLocation,
    #[serde(default)]
    pub social: SocialLinks,
}

impl ContactInfo {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        missing
    }
}
