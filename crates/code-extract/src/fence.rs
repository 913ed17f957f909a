//! Markdown code-fence detection.

const FENCE: &str = "```";

/// Select the candidate code from free-form text.
///
/// Looks for the first opening fence tagged with `tag` (e.g. ```` ```python ````).
/// The candidate is the text up to the next closing fence, or to end-of-input
/// when the fence is unclosed. Without a fence marker the whole input is the
/// candidate. Only the first fence pair is honored; later blocks are ignored.
pub fn candidate_code<'a>(text: &'a str, tag: &str) -> &'a str {
    let marker = format!("{FENCE}{tag}");
    let Some(open) = text.find(&marker) else {
        return text.trim();
    };

    let body = &text[open + marker.len()..];
    match body.find(FENCE) {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}
