//! Best-effort chat notifications about lane results.
//!
//! Delivery never fails a lane: an unset webhook URL or an empty message
//! skips the notification, and delivery errors are only logged.

use std::sync::Arc;

use chrono::Local;
use shiplane_config::ShiplaneConfig;
use tracing::{debug, warn};

use crate::traits::{ChatField, ChatMessage, ChatNotifier};

const BUILD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Notifier {
    url: String,
    built_by: String,
    chat: Arc<dyn ChatNotifier>,
}

impl Notifier {
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        built_by: impl Into<String>,
        chat: Arc<dyn ChatNotifier>,
    ) -> Self {
        Self {
            url: url.into(),
            built_by: built_by.into(),
            chat,
        }
    }

    #[must_use]
    pub fn from_config(config: &ShiplaneConfig, chat: Arc<dyn ChatNotifier>) -> Self {
        Self::new(config.slack_url(), config.slack_built_by(), chat)
    }

    /// Whether a webhook URL is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.url.is_empty()
    }

    /// Build the message that [`Notifier::send`] would deliver.
    #[must_use]
    pub fn compose(
        &self,
        message: &str,
        success: bool,
        error_info: Option<&str>,
        app_version: &str,
    ) -> ChatMessage {
        let build_date = Local::now().format(BUILD_DATE_FORMAT).to_string();
        let field = |title: &str, value: &str| ChatField {
            title: title.to_string(),
            value: value.to_string(),
        };

        ChatMessage {
            text: message.to_string(),
            success,
            fields: vec![
                field("Build Date", &build_date),
                field("Built by", &self.built_by),
                field("App Version", app_version),
            ],
            error: error_info.map(ToString::to_string),
        }
    }

    /// Send `message` to the configured webhook.
    pub fn send(
        &self,
        message: &str,
        success: bool,
        error_info: Option<&str>,
        app_version: &str,
    ) {
        if !self.is_enabled() {
            debug!("no webhook URL configured, skipping notification");
            return;
        }
        if message.is_empty() {
            debug!("empty message, skipping notification");
            return;
        }

        let chat_message = self.compose(message, success, error_info, app_version);
        if let Err(err) = self.chat.post(&self.url, &chat_message) {
            warn!(error = %err, "failed to send notification");
        }
    }
}
