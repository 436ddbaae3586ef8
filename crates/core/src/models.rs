//! Typed payloads for the document collections.
//!
//! These are the JSON shapes stored in the document table's `data` column;
//! serde renames keep the stored field names camelCase. Server-assigned
//! timestamps live on the document envelope, not in these payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Uid;

/// A pair of translations for one text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    /// English text.
    pub en: String,
    /// Arabic text.
    pub ar: String,
}

impl BilingualText {
    /// Build from the two translations.
    #[must_use]
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The text for a display language.
    #[must_use]
    pub fn get(&self, language: crate::Language) -> &str {
        match language {
            crate::Language::En => &self.en,
            crate::Language::Ar => &self.ar,
        }
    }
}

/// A foundation program (`programs/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub title: BilingualText,
    pub description: BilingualText,
    /// Icon name rendered by the frontend.
    #[serde(default)]
    pub icon: Option<String>,
    /// Media image URLs shown in the program gallery.
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// A news post (`posts/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL slug, unique across posts.
    pub slug: String,
    pub title: BilingualText,
    pub excerpt: BilingualText,
    /// Full body HTML, per language.
    pub body: BilingualText,
    #[serde(default)]
    pub image: Option<String>,
    /// Publication date shown on the news page.
    pub date: chrono::NaiveDate,
}

/// A board member (`board_members/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMember {
    pub name: BilingualText,
    /// Board role, e.g. chairperson or treasurer.
    pub role: BilingualText,
    #[serde(default)]
    pub photo: Option<String>,
    /// Sort order on the governance page, ascending.
    #[serde(default)]
    pub display_order: i32,
}

/// An organizational document (`documents/{id}`): bylaws, annual reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgDocument {
    pub title: BilingualText,
    /// Public URL of the stored file.
    pub file_url: String,
    /// Free-form grouping, e.g. "bylaws" or "reports".
    #[serde(default)]
    pub category: Option<String>,
}

/// How often a donation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationFrequency {
    #[default]
    Once,
    Monthly,
}

/// A donation submission (`donations/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub donor_name: String,
    pub email: String,
    /// Amount in the site currency.
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: DonationFrequency,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact-form submission (`contact_submissions/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Cleared by an admin from the submissions screen.
    #[serde(default)]
    pub is_read: bool,
}

/// Metadata record for an uploaded blob (`media/{id}`).
///
/// A secondary index over the blob store: the record should never outlive
/// its blob, and the delete path tolerates either side already being gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub file_name: String,
    /// Public URL the site serves the blob from.
    pub image_url: String,
    /// Blob-store object path, `images/{timestamp}_{fileName}`.
    pub storage_path: String,
    pub content_type: String,
    /// Size in bytes.
    pub size: i64,
    pub upload_date: DateTime<Utc>,
}

/// An admin-role marker record (`roles_admin/{uid}`).
///
/// Only the record's existence matters; the fields are bookkeeping for
/// whoever granted it out-of-band.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRole {
    #[serde(default)]
    pub granted_by: Option<String>,
}

/// The session-visible authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: Uid,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_submission_field_names() {
        let submission = ContactSubmission {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "1234567890".into(),
            is_read: false,
        };
        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["isRead"], false);
    }

    #[test]
    fn test_is_read_defaults_false() {
        let submission: ContactSubmission = serde_json::from_value(json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "1234567890"
        }))
        .unwrap();
        assert!(!submission.is_read);
    }

    #[test]
    fn test_donation_amount_round_trips_as_string() {
        let donation = Donation {
            donor_name: "Omar".into(),
            email: "omar@example.com".into(),
            amount: Decimal::new(2500, 2),
            frequency: DonationFrequency::Monthly,
            message: None,
        };
        let value = serde_json::to_value(&donation).unwrap();
        assert_eq!(value["amount"], "25.00");
        assert_eq!(value["frequency"], "monthly");
    }

    #[test]
    fn test_bilingual_text_selects_language() {
        let title = BilingualText::new("Programs", "البرامج");
        assert_eq!(title.get(crate::Language::En), "Programs");
        assert_eq!(title.get(crate::Language::Ar), "البرامج");
    }

    #[test]
    fn test_media_item_camel_case() {
        let item = MediaItem {
            file_name: "gala.jpg".into(),
            image_url: "/media/images/1_gala.jpg".into(),
            storage_path: "images/1_gala.jpg".into(),
            content_type: "image/jpeg".into(),
            size: 1024,
            upload_date: chrono::Utc::now(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("storagePath").is_some());
        assert!(value.get("uploadDate").is_some());
    }
}
