use serde_json::Value;

/// Fields probed on a JSON object reply, highest priority first.
pub const RESPONSE_FIELDS: [&str; 3] = ["response", "output", "text"];

pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "No se recibió respuesta del agente.";

/// Flattens whatever the agent runtime sent back into a single answer string.
///
/// | upstream body                         | answer                          |
/// |---------------------------------------|---------------------------------|
/// | JSON object with a probed field       | first probed field, rendered    |
/// | JSON object without probed fields     | whole object, rendered          |
/// | any other JSON value                  | whole value, rendered           |
/// | not JSON, non-empty                   | raw text                        |
/// | not JSON, empty                       | [`EMPTY_RESPONSE_PLACEHOLDER`]  |
///
/// Rendering keeps JSON strings as their bare contents and writes every other
/// value as compact JSON.
pub fn normalize_response(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => RESPONSE_FIELDS
            .iter()
            .find_map(|field| map.get(*field))
            .map(render)
            .unwrap_or_else(|| render(&Value::Object(map.clone()))),
        Ok(value) => render(&value),
        Err(_) if raw.is_empty() => EMPTY_RESPONSE_PLACEHOLDER.to_string(),
        Err(_) => raw.to_string(),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
