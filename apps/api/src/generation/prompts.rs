// All LLM prompt constants for the Generation module.

/// System message sent with every generation.
pub const MARKETER_SYSTEM: &str = "You are a helpful, creative, and experienced product \
    marketer and e-commerce copywriter.";

/// Product copy prompt template.
/// Replace: {product_name}, {product_category}, {key_features}, {target_audience},
///          {tone_of_voice}, {paragraphs}, {num_descriptions}, {output_format}
pub const PRODUCT_COPY_PROMPT_TEMPLATE: &str = r#"You are an expert product marketer and e-commerce copywriter. Your task is to create engaging, unique, and SEO-friendly product descriptions
and a list of relevant hashtags for social media.

Here are the product details:
- **Product Name:** {product_name}
- **Product Category:** {product_category}
- **Key Features:**
{key_features}
- **Target Audience:** {target_audience}
- **Tone of Voice:** {tone_of_voice}
- **Desired Description Length:** {paragraphs}

Please generate {num_descriptions} distinct product description(s) that highlight the product's benefits,
address the target audience's needs, and resonate with the specified tone.
Each description should be approximately {paragraphs} long.

After each description, generate a comma-separated list of at least 10 relevant hashtags for social media,
starting with '#'.

Format your output clearly as follows:

{output_format}"#;

/// One block of the output format. Replace: {n}
pub const OUTPUT_FORMAT_BLOCK: &str = r#"**Description {n}:**
[Generated Description {n} here]

**Hashtags {n}:** #[hashtag1], #[hashtag2], #[hashtag3], ...
---"#;
