// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Persistent notification handling.
//!
//! Notifications get an id derived from their content. The host notification service replaces an
//! existing notification with the same id, so a repeated alert is only shown once.

use crate::configuration::ElectroluxSettings;
use crate::constants::NAME;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        let title = title.into();
        let message = message.into();
        Self {
            id: notification_id(&title, &message),
            title,
            message,
        }
    }
}

/// Host notification service creating or replacing a notification with the same id.
pub trait NotificationSink {
    fn create_or_update(&self, notification: Notification);
}

/// Derive the notification id from title and message.
///
/// returns: base64 encoding of `{title}-{message}`
pub fn notification_id(title: &str, message: &str) -> String {
    BASE64.encode(format!("{title}-{message}"))
}

/// Send a notification to the host, unless notifications are disabled in the settings.
///
/// # Arguments
///
/// * `settings`: integration settings with the notifications flag
/// * `sink`: host notification service
/// * `message`: notification message
/// * `title`: notification title, defaults to the integration name
///
/// returns: true if the notification was sent
pub fn create_notification(
    settings: &ElectroluxSettings,
    sink: &impl NotificationSink,
    message: &str,
    title: Option<&str>,
) -> bool {
    let title = title.unwrap_or(NAME);
    if !settings.notifications {
        debug!("Discarding notification. Title: {title}, message: {message}");
        return false;
    }

    debug!("Sending notification. Title: {title}, message: {message}");
    sink.create_or_update(Notification::new(title, message));
    true
}
