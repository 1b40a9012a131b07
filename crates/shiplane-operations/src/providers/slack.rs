use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::traits::{ChatMessage, ChatNotifier};

/// Posts messages to a Slack incoming webhook.
#[derive(Debug, Clone, Default)]
pub struct SlackWebhook {
    client: reqwest::blocking::Client,
}

impl SlackWebhook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct WebhookPayload<'a> {
    attachments: [Attachment<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    fallback: &'a str,
    text: &'a str,
    color: &'static str,
    fields: Vec<Field<'a>>,
}

#[derive(Debug, Serialize)]
struct Field<'a> {
    title: &'a str,
    value: &'a str,
    short: bool,
}

pub(crate) fn webhook_payload(message: &ChatMessage) -> WebhookPayload<'_> {
    let mut fields: Vec<Field<'_>> = message
        .fields
        .iter()
        .map(|field| Field {
            title: &field.title,
            value: &field.value,
            short: true,
        })
        .collect();

    if let Some(error) = &message.error {
        fields.push(Field {
            title: "Error",
            value: error,
            short: false,
        });
    }

    WebhookPayload {
        attachments: [Attachment {
            fallback: &message.text,
            text: &message.text,
            color: if message.success { "good" } else { "danger" },
            fields,
        }],
    }
}

impl ChatNotifier for SlackWebhook {
    fn post(&self, url: &str, message: &ChatMessage) -> Result<()> {
        debug!(success = message.success, "posting chat message");
        self.client
            .post(url)
            .json(&webhook_payload(message))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
