//! Turns a provider envelope into a [`WebhookEvent`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::WebhookError;
use crate::types::{Envelope, WebhookEvent};

/// Display format for `occurred_at`.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parse the raw request body into an [`Envelope`].
pub fn parse_envelope(body: &[u8]) -> Result<Envelope, WebhookError> {
    serde_json::from_slice(body).map_err(|e| WebhookError::MalformedPayload(e.to_string()))
}

/// Build the display record for one envelope, rendering its timestamp in `zone`.
pub fn normalize(envelope: &Envelope, zone: Tz) -> Result<WebhookEvent, WebhookError> {
    let object = &envelope.data.object;

    let sender = object
        .from
        .first()
        .ok_or_else(|| WebhookError::MalformedPayload("empty from list".to_string()))?;

    Ok(WebhookEvent {
        id: object.id.clone(),
        occurred_at: format_timestamp(object.date, zone)?,
        subject: object.subject.clone(),
        from_email: sender.email.clone(),
        from_name: sender.name.clone(),
    })
}

/// Render epoch seconds in `zone` using [`DATE_FORMAT`].
pub fn format_timestamp(epoch_secs: i64, zone: Tz) -> Result<String, WebhookError> {
    let utc = DateTime::<Utc>::from_timestamp(epoch_secs, 0).ok_or_else(|| {
        WebhookError::MalformedPayload(format!("date out of range: {epoch_secs}"))
    })?;
    Ok(utc.with_timezone(&zone).format(DATE_FORMAT).to_string())
}
