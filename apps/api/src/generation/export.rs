/// Suffix appended to the product name in downloaded files.
const FILENAME_SUFFIX: &str = "_descriptions_hashtags.txt";
const FALLBACK_STEM: &str = "product";
const MAX_STEM_CHARS: usize = 80;

/// Download filename for a product, e.g. `Leather_Wallet_descriptions_hashtags.txt`.
///
/// Anything outside `[A-Za-z0-9-]` becomes `_` so the name is safe both on disk
/// and inside a `Content-Disposition` header.
pub fn download_filename(product_name: &str) -> String {
    filename_with(product_name, |c| c.is_ascii_alphanumeric())
}

/// `Content-Disposition` value carrying both the ASCII `filename` and an
/// RFC 5987 `filename*` that keeps non-ASCII letters, e.g. `Café` → `Caf%C3%A9`.
pub fn content_disposition(product_name: &str) -> String {
    let ascii = download_filename(product_name);
    let unicode = filename_with(product_name, char::is_alphanumeric);
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        percent_encode(&unicode)
    )
}

fn filename_with(product_name: &str, keep: impl Fn(char) -> bool) -> String {
    let mut stem = String::new();
    let mut last_was_sep = false;

    for c in product_name.trim().chars().take(MAX_STEM_CHARS) {
        if keep(c) || c == '-' {
            stem.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            stem.push('_');
            last_was_sep = true;
        }
    }

    let stem = stem.trim_matches('_');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    format!("{stem}{FILENAME_SUFFIX}")
}

/// Percent-encodes every byte outside the RFC 5987 `attr-char` set.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
