use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatField {
    pub title: String,
    pub value: String,
}

/// A message ready for delivery to a chat webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub success: bool,
    pub fields: Vec<ChatField>,
    pub error: Option<String>,
}

pub trait ChatNotifier: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the message cannot be delivered.
    fn post(&self, url: &str, message: &ChatMessage) -> Result<()>;
}
