/// Strip a markdown code fence from a model response so it can be parsed as
/// strict JSON. Models asked for JSON still wrap it in ```json fences often
/// enough that every stage runs its response through this first.
///
/// Empty input yields the empty-array literal. Whether the remainder is valid
/// JSON is the caller's problem.
pub fn clean_json(text: &str) -> String {
    if text.is_empty() {
        return "[]".to_string();
    }

    let cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix("```") {
        // Optional language tag sits on the fence line
        let body = match rest.split_once('\n') {
            Some((_, body)) => body,
            None => rest,
        };
        let body = body.trim();
        return body.strip_suffix("```").unwrap_or(body).trim().to_string();
    }

    cleaned.to_string()
}
