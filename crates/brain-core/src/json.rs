//! Helpers for pulling JSON out of model replies.

/// Extract a JSON object from a reply that may contain markdown or other text.
///
/// Handles bare objects, ```json fenced blocks, generic fenced blocks, objects
/// embedded in prose, and stray trailing braces. Returns the trimmed input
/// unchanged when no object is found; the caller's parser reports the error.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if trimmed.starts_with('{') {
        return extract_balanced_json(trimmed);
    }

    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            let extracted = trimmed[json_start..json_start + end].trim();
            return extract_balanced_json(extracted);
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_backticks = &trimmed[start + 3..];
        // Skip optional language identifier
        let json_start = after_backticks.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_backticks[json_start..].find("```") {
            let extracted = after_backticks[json_start..json_start + end].trim();
            return extract_balanced_json(extracted);
        }
    }

    if let Some(start) = trimmed.find('{') {
        return extract_balanced_json(&trimmed[start..]);
    }

    trimmed
}

/// Cut a string that starts with '{' at its matching closing brace.
///
/// `{"a": 1}}}` becomes `{"a": 1}`. Braces inside strings are ignored.
fn extract_balanced_json(s: &str) -> &str {
    if !s.starts_with('{') {
        return s;
    }

    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_clean_object() {
        let input = r#"{"procedure": "IVF"}"#;
        assert_eq!(extract_json(input), input);
    }

    #[test]
    fn test_extract_trailing_braces() {
        let input = r#"{"primaryEmotion": "anxious"}}}"#;
        assert_eq!(extract_json(input), r#"{"primaryEmotion": "anxious"}"#);
    }

    #[test]
    fn test_extract_braces_inside_strings() {
        let input = r#"{"note": "use { and } freely", "nested": {"k": "v"}}"#;
        assert_eq!(extract_json(input), input);
    }

    #[test]
    fn test_extract_escaped_quotes() {
        let input = r#"{"quote": "she said \"hi\"", "ok": true}"#;
        assert_eq!(extract_json(input), input);
    }

    #[test]
    fn test_extract_json_fence() {
        let input = "Here you go:\n```json\n{\"city\": \"Dubai\"}\n```";
        assert_eq!(extract_json(input), r#"{"city": "Dubai"}"#);
    }

    #[test]
    fn test_extract_generic_fence() {
        let input = "```\n{\"city\": \"Dubai\"}\n```";
        assert_eq!(extract_json(input), r#"{"city": "Dubai"}"#);
    }

    #[test]
    fn test_extract_embedded_in_prose() {
        let input = r#"Sure! {"budget": 5000} hope that helps"#;
        assert_eq!(extract_json(input), r#"{"budget": 5000}"#);
    }

    #[test]
    fn test_extract_no_object() {
        assert_eq!(extract_json("  nothing here  "), "nothing here");
    }
}
