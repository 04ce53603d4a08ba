use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::validate_terms_accepted;

/// A detailed quote request. Like [`ContactSubmission`], request-scoped and
/// never persisted.
///
/// [`ContactSubmission`]: crate::model::contact::ContactSubmission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "must be at least 10 characters"))]
    pub phone: String,

    pub project_type: ProjectType,

    pub glass_type: GlassType,

    #[validate(length(min = 1, message = "at least one service must be selected"))]
    pub service_needed: Vec<String>,

    #[validate(length(min = 5, message = "must be at least 5 characters"))]
    pub project_location: String,

    #[validate(nested)]
    pub dimensions: Dimensions,

    pub urgency: Urgency,

    pub budget: Budget,

    #[validate(length(min = 20, message = "must be at least 20 characters"))]
    pub project_description: String,

    pub preferred_date: Option<String>,

    pub has_sketch: bool,

    #[validate(custom(function = validate_terms_accepted))]
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Dimensions {
    #[validate(length(min = 1, message = "is required"))]
    pub length: String,

    #[validate(length(min = 1, message = "is required"))]
    pub width: String,

    pub height: Option<String>,

    pub unit: DimensionUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    Commercial,
    Repair,
    Custom,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Repair => "repair",
            ProjectType::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassType {
    Tempered,
    Laminated,
    Insulated,
    Decorative,
    Smart,
    Other,
}

impl GlassType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlassType::Tempered => "tempered",
            GlassType::Laminated => "laminated",
            GlassType::Insulated => "insulated",
            GlassType::Decorative => "decorative",
            GlassType::Smart => "smart",
            GlassType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Feet,
    Meters,
    Inches,
}

impl DimensionUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionUnit::Feet => "feet",
            DimensionUnit::Meters => "meters",
            DimensionUnit::Inches => "inches",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Standard,
    Urgent,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        }
    }

    /// Prefix for the staff notification subject line. Empty for standard
    /// requests.
    pub fn subject_marker(&self) -> &'static str {
        match self {
            Urgency::Standard => "",
            Urgency::Urgent => "⚡ PRIORITY ",
            Urgency::Emergency => "🚨 URGENT ",
        }
    }

    /// Badge label shown in the staff notification body.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Urgency::Standard => "📋 STANDARD",
            Urgency::Urgent => "⚡ URGENT",
            Urgency::Emergency => "🚨 EMERGENCY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under-50k")]
    Under50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-200k")]
    From100kTo200k,
    #[serde(rename = "200k-500k")]
    From200kTo500k,
    #[serde(rename = "above-500k")]
    Above500k,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Under50k => "under-50k",
            Budget::From50kTo100k => "50k-100k",
            Budget::From100kTo200k => "100k-200k",
            Budget::From200kTo500k => "200k-500k",
            Budget::Above500k => "above-500k",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::validation::collect_violations;

    fn valid_submission() -> QuoteSubmission {
        QuoteSubmission {
            first_name: "Arjun".to_string(),
            last_name: "Mehta".to_string(),
            email: "arjun@example.com".to_string(),
            phone: "9876543210".to_string(),
            project_type: ProjectType::Residential,
            glass_type: GlassType::Tempered,
            service_needed: vec!["installation".to_string(), "measurement".to_string()],
            project_location: "Andheri West, Mumbai".to_string(),
            dimensions: Dimensions {
                length: "10".to_string(),
                width: "12".to_string(),
                height: None,
                unit: DimensionUnit::Feet,
            },
            urgency: Urgency::Standard,
            budget: Budget::From50kTo100k,
            project_description: "Full-height toughened glass partition for the living room."
                .to_string(),
            preferred_date: Some("2026-09-01".to_string()),
            has_sketch: false,
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn test_empty_service_list_is_reported() {
        let mut submission = valid_submission();
        submission.service_needed.clear();
        let errors = submission.validate().unwrap_err();
        let violations = collect_violations(&errors);
        assert!(violations.iter().any(|v| v.field == "serviceNeeded"));
    }

    #[test]
    fn test_short_description_is_reported() {
        let mut submission = valid_submission();
        submission.project_description = "too short".to_string();
        let errors = submission.validate().unwrap_err();
        let violations = collect_violations(&errors);
        assert!(violations.iter().any(|v| v.field == "projectDescription"));
    }

    #[test]
    fn test_empty_dimension_is_reported_with_path() {
        let mut submission = valid_submission();
        submission.dimensions.width = "".to_string();
        let errors = submission.validate().unwrap_err();
        let violations = collect_violations(&errors);
        assert!(violations.iter().any(|v| v.field == "dimensions.width"));
    }

    #[test]
    fn test_budget_wire_format() {
        let json = serde_json::to_value(valid_submission()).unwrap();
        assert_eq!(json["budget"], "50k-100k");
        assert_eq!(json["projectType"], "residential");
        assert_eq!(json["dimensions"]["unit"], "feet");
    }

    #[test]
    fn test_unknown_budget_bracket_rejected() {
        let mut json = serde_json::to_value(valid_submission()).unwrap();
        json["budget"] = serde_json::json!("about-a-million");
        assert!(serde_json::from_value::<QuoteSubmission>(json).is_err());
    }

    #[test]
    fn test_urgency_subject_markers() {
        assert_eq!(Urgency::Standard.subject_marker(), "");
        assert!(Urgency::Urgent.subject_marker().contains("PRIORITY"));
        assert!(Urgency::Emergency.subject_marker().contains("URGENT"));
    }
}
