//! Placeholder scanner
//!
//! Walks a template left to right and replaces each `{name}` span with the
//! value returned by a resolver callback.

/// Substitutes every `{name}` placeholder in `template` with `resolve(name)`.
///
/// Substitution is single-level: resolved values are copied verbatim and
/// never scanned again. Scanning stops, and the rest of the template is kept
/// literally, when there is no closing brace left or when the next `}` comes
/// before the next `{`.
pub fn scan<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(template.len());
    let mut start = 0;

    loop {
        let rest = &template[start..];

        let Some(open) = rest.find('{') else {
            output.push_str(rest);
            break;
        };

        // The closing brace is searched from the scan position, not from `open`.
        let close = match rest.find('}') {
            Some(close) if close > open => close,
            _ => {
                output.push_str(rest);
                break;
            }
        };

        output.push_str(&rest[..open]);
        output.push_str(&resolve(&rest[open + 1..close]));
        start += close + 1;
    }

    output
}
