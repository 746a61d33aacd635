//! Copy generation — validate the form, fill the prompt, make one LLM call.
//!
//! Flow: validate → build_prompt → ChatCompletion::complete → parse_variants.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::parser::{parse_variants, ContentVariant};
use crate::generation::prompts::{
    MARKETER_SYSTEM, OUTPUT_FORMAT_BLOCK, PRODUCT_COPY_PROMPT_TEMPLATE,
};
use crate::llm_client::ChatCompletion;
use crate::models::product::ProductDetails;

/// Text returned by one generation call plus its parsed view.
#[derive(Debug, Clone)]
pub struct GeneratedCopy {
    pub content: String,
    pub variants: Vec<ContentVariant>,
    pub model: String,
}

pub async fn generate_copy(
    llm: &dyn ChatCompletion,
    details: &ProductDetails,
) -> Result<GeneratedCopy, AppError> {
    details.validate()?;

    let prompt = build_prompt(details);
    info!(
        "Generating {} description(s) for '{}' with {}",
        details.num_descriptions,
        details.product_name,
        llm.model()
    );

    let content = llm.complete(MARKETER_SYSTEM, &prompt).await?;
    let variants = parse_variants(&content);

    if variants.len() != details.num_descriptions as usize {
        warn!(
            "Requested {} description(s) but parsed {} from model output",
            details.num_descriptions,
            variants.len()
        );
    }

    Ok(GeneratedCopy {
        content,
        variants,
        model: llm.model().to_string(),
    })
}

/// Fills the product copy template from the form fields.
pub fn build_prompt(details: &ProductDetails) -> String {
    let output_format = std::iter::once("---".to_string())
        .chain(
            (1..=details.num_descriptions)
                .map(|n| OUTPUT_FORMAT_BLOCK.replace("{n}", &n.to_string())),
        )
        .collect::<Vec<_>>()
        .join("\n");

    PRODUCT_COPY_PROMPT_TEMPLATE
        .replace("{product_name}", details.product_name.trim())
        .replace("{product_category}", details.product_category.trim())
        .replace("{key_features}", details.key_features.trim())
        .replace("{target_audience}", details.target_audience.trim())
        .replace("{tone_of_voice}", details.tone_of_voice.label())
        .replace("{paragraphs}", details.description_length.paragraphs())
        .replace("{num_descriptions}", &details.num_descriptions.to_string())
        .replace("{output_format}", &output_format)
}
