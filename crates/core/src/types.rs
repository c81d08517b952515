/// Form data owned by a single wizard step, as sent to the backend.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// The only country for which the address cascade applies.
pub const CASCADE_COUNTRY: &str = "Philippines";
