use crate::types::WebhookEvent;

/// Render the events page.
pub fn render_events(events: &[WebhookEvent]) -> String {
    let mut rows = String::new();
    for ev in events {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&ev.id),
            escape(&ev.occurred_at),
            escape(&ev.subject),
            escape(&ev.from_name),
            escape(&ev.from_email),
        ));
    }

    let body = if events.is_empty() {
        "    <p>No webhooks received yet.</p>\n".to_string()
    } else {
        format!(
            "    <table>\n      <tr><th>Id</th><th>Date</th><th>Subject</th><th>From Name</th><th>From Email</th></tr>\n{rows}    </table>\n"
        )
    };

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Nylas Webhooks</title>\n  </head>\n  <body>\n    <h1>Webhooks</h1>\n{body}  </body>\n</html>\n"
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page() {
        let html = render_events(&[]);
        assert!(html.contains("No webhooks received yet."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn rows_in_order_and_escaped() {
        let events = vec![
            WebhookEvent {
                id: "evt1".into(),
                occurred_at: "14/11/2023 22:13:20".into(),
                subject: "<script>alert('x')</script>".into(),
                from_email: "a@b.com".into(),
                from_name: "A & B".into(),
            },
            WebhookEvent {
                id: "evt2".into(),
                occurred_at: "15/11/2023 08:00:00".into(),
                subject: "Second".into(),
                from_email: "c@d.com".into(),
                from_name: String::new(),
            },
        ];
        let html = render_events(&events);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
        let first = html.find("evt1").unwrap();
        let second = html.find("evt2").unwrap();
        assert!(first < second);
    }
}
