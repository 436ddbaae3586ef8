//! Document-store collection names and blob-store path layout.
//!
//! Collection names match the stored data exactly; they are shared by the
//! site, the admin panel, and the CLI so nobody invents a variant spelling.

/// Per-page bilingual content overrides, keyed by page key.
pub const PAGE_CONTENT: &str = "page_content";
/// Foundation programs.
pub const PROGRAMS: &str = "programs";
/// News posts.
pub const POSTS: &str = "posts";
/// Board members.
pub const BOARD_MEMBERS: &str = "board_members";
/// Organizational documents (bylaws, reports).
pub const DOCUMENTS: &str = "documents";
/// Donation submissions.
pub const DONATIONS: &str = "donations";
/// Contact-form submissions.
pub const CONTACT_SUBMISSIONS: &str = "contact_submissions";
/// Uploaded media metadata records.
pub const MEDIA: &str = "media";
/// Admin-role marker records, keyed by uid. Existence grants privilege.
pub const ROLES_ADMIN: &str = "roles_admin";

/// Page keys that have a static fallback table and may carry an override
/// document in [`PAGE_CONTENT`].
pub const PAGE_KEYS: &[&str] = &[
    "home",
    "about",
    "programs",
    "governance",
    "membership",
    "bylaws",
    "news",
    "contact",
    "donate",
];

/// Build the blob-store object path for an uploaded file.
///
/// Layout is `images/{timestamp}_{originalFileName}`. Any path separators in
/// the original name are stripped so the object cannot escape the media root.
#[must_use]
pub fn media_object_path(timestamp_millis: i64, original_file_name: &str) -> String {
    let safe_name: String = original_file_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();
    format!("images/{timestamp_millis}_{safe_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_object_path_layout() {
        assert_eq!(
            media_object_path(1_700_000_000_000, "gala.jpg"),
            "images/1700000000000_gala.jpg"
        );
    }

    #[test]
    fn test_media_object_path_strips_separators() {
        assert_eq!(
            media_object_path(1, "../../etc/passwd"),
            "images/1_.._.._etc_passwd"
        );
        assert_eq!(
            media_object_path(1, "a\\b:c.png"),
            "images/1_a_b_c.png"
        );
    }

    #[test]
    fn test_page_keys_cover_public_routes() {
        for key in ["home", "about", "bylaws", "donate"] {
            assert!(PAGE_KEYS.contains(&key));
        }
    }
}
