use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::length::DescriptionLength;
use crate::generation::tone::ToneOfVoice;

pub const DEFAULT_NUM_DESCRIPTIONS: u8 = 2;
pub const MAX_NUM_DESCRIPTIONS: u8 = 5;

const MISSING_REQUIRED_FIELDS: &str =
    "Please provide at least a Product Name and Key Features to generate content.";

/// Product attributes submitted through the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_category: String,
    /// Free text, conventionally one feature per line.
    #[serde(default)]
    pub key_features: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub tone_of_voice: ToneOfVoice,
    #[serde(default)]
    pub description_length: DescriptionLength,
    #[serde(default = "default_num_descriptions")]
    pub num_descriptions: u8,
}

fn default_num_descriptions() -> u8 {
    DEFAULT_NUM_DESCRIPTIONS
}

impl ProductDetails {
    /// Name and features are the only required fields.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.product_name.trim().is_empty() || self.key_features.trim().is_empty() {
            return Err(AppError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
        }

        if !(1..=MAX_NUM_DESCRIPTIONS).contains(&self.num_descriptions) {
            return Err(AppError::Validation(format!(
                "num_descriptions must be between 1 and {MAX_NUM_DESCRIPTIONS}"
            )));
        }

        Ok(())
    }

    /// Pre-filled form values.
    pub fn sample() -> Self {
        Self {
            product_name: "Luxury Handcrafted Leather Wallet".to_string(),
            product_category: "Accessories".to_string(),
            key_features: "- Premium full-grain leather\n\
                - Hand-stitched for durability\n\
                - Slim design, holds 8 cards and cash\n\
                - RFID blocking technology\n\
                - Available in classic black and brown"
                .to_string(),
            target_audience: "Discerning professionals, minimalist enthusiasts".to_string(),
            tone_of_voice: ToneOfVoice::Luxurious,
            description_length: DescriptionLength::Medium,
            num_descriptions: DEFAULT_NUM_DESCRIPTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_valid() {
        assert!(ProductDetails::sample().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let details = ProductDetails {
            product_name: "   ".to_string(),
            ..ProductDetails::sample()
        };
        match details.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_REQUIRED_FIELDS),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_features_rejected() {
        let details = ProductDetails {
            key_features: "\n".to_string(),
            ..ProductDetails::sample()
        };
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let details = ProductDetails {
            product_category: String::new(),
            target_audience: String::new(),
            ..ProductDetails::sample()
        };
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_num_descriptions_bounds() {
        let zero = ProductDetails {
            num_descriptions: 0,
            ..ProductDetails::sample()
        };
        assert!(zero.validate().is_err());

        let too_many = ProductDetails {
            num_descriptions: MAX_NUM_DESCRIPTIONS + 1,
            ..ProductDetails::sample()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_missing_required_fields_reach_validation() {
        let details: ProductDetails =
            serde_json::from_value(serde_json::json!({"key_features": "- x"})).unwrap();
        match details.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_REQUIRED_FIELDS),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let details: ProductDetails = serde_json::from_value(serde_json::json!({
            "product_name": "Yoga Mat",
            "key_features": "- Non-slip"
        }))
        .unwrap();
        assert_eq!(details.tone_of_voice, ToneOfVoice::Luxurious);
        assert_eq!(details.description_length, DescriptionLength::Medium);
        assert_eq!(details.num_descriptions, 2);
        assert!(details.product_category.is_empty());
    }
}
