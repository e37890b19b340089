use serde_json::Value;

/// Bitwarden's numeric item type for logins.
pub const LOGIN_TYPE: f64 = 1.0;

pub fn is_login(item: &Value) -> bool {
    match item.get("type") {
        Some(Value::Number(n)) => n.as_f64() == Some(LOGIN_TYPE),
        Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("login"),
        _ => false,
    }
}

/// Keeps login entries in their original order. Other types are dropped silently.
pub fn filter_logins(items: Vec<Value>) -> Vec<Value> {
    items.into_iter().filter(is_login).collect()
}
