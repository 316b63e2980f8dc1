//! Company profile loading from company.toml
//!
//! The profile feeds the chat assistant's context preamble and the contact
//! details surfaced in canned replies. A built-in default profile is used
//! when no file is present, so the assistant works out of the box.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Company facts injected into every chat prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// Company display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// One-line description of what the company does
    pub tagline: String,
    /// Service lines offered, in display order
    pub services: Vec<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "goCode Softwares".to_string(),
            email: "info@gocodesoftwares.com".to_string(),
            phone: "+1 (234) 567-8900".to_string(),
            tagline: "a professional software and data solutions company".to_string(),
            services: vec![
                "Data Engineering Solutions".to_string(),
                "Data Analytics Solutions".to_string(),
                "Data Science Solutions".to_string(),
                "Software Development Solutions".to_string(),
                "AI Solutions".to_string(),
            ],
        }
    }
}

/// Loads a company profile from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<CompanyProfile> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read company profile: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse company.toml: {e}"),
    })
}

/// Loads the profile from the default location (./company.toml), falling back
/// to the built-in default when the file does not exist.
pub fn load_default_profile() -> Result<CompanyProfile> {
    if Path::new("company.toml").exists() {
        load_profile("company.toml")
    } else {
        Ok(CompanyProfile::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn parse_company_profile() {
        let toml_str = r#"
            name = "goCode Softwares"
            email = "info@gocodesoftwares.com"
            phone = "+1 (234) 567-8900"
            tagline = "a professional software and data solutions company"
            services = ["Data Engineering Solutions", "AI Solutions"]
        "#;

        let profile: CompanyProfile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.name, "goCode Softwares");
        assert_eq!(profile.services.len(), 2);
    }

    #[test]
    fn invalid_toml_reports_config_error() {
        let result: std::result::Result<CompanyProfile, _> = toml::from_str("name = ");
        assert!(result.is_err());
    }

    #[test]
    fn default_profile_has_contact_details() {
        let profile = CompanyProfile::default();
        assert!(profile.email.contains('@'));
        assert!(!profile.services.is_empty());
    }
}
