use serde::{Deserialize, Deserializer};

/// A received notification, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub id: String,
    /// `DD/MM/YYYY HH:MM:SS` in the configured zone.
    pub occurred_at: String,
    pub subject: String,
    pub from_email: String,
    pub from_name: String,
}

// ─── Provider envelope ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub data: EnvelopeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeData {
    pub object: MessageObject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageObject {
    pub id: String,
    /// Epoch seconds.
    pub date: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub subject: String,
    pub from: Vec<Participant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub email: String,
    // Bare addresses arrive without a display name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
