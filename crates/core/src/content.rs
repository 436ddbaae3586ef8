//! Bilingual content documents and the overlay resolver.
//!
//! Every public page renders from a flat `field -> text` map produced in two
//! layers: a statically-compiled fallback table (always present, both
//! languages) overlaid by an optional remote content document edited in the
//! admin panel. Remote values win key-by-key; anything the remote document
//! does not carry falls back to the static text, so a half-edited document
//! never blanks a page.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::language::Language;

/// A per-page content override document (`page_content/{pageKey}`).
///
/// Both language sub-maps travel together so a language switch never needs a
/// second lookup. The sub-maps are kept as raw JSON: a missing or malformed
/// sub-map must degrade to the static fallback, not fail deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// English field map. Expected to be a flat string object.
    #[serde(default)]
    pub content_en: Value,
    /// Arabic field map. Expected to mirror `content_en` key-for-key, though
    /// mismatches are tolerated.
    #[serde(default)]
    pub content_ar: Value,
    /// Last modification time, server-assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentDocument {
    /// The raw sub-map for a language.
    #[must_use]
    pub const fn sub_map(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.content_en,
            Language::Ar => &self.content_ar,
        }
    }

    /// Build a document carrying string field maps for both languages.
    #[must_use]
    pub fn from_maps(en: &BTreeMap<String, String>, ar: &BTreeMap<String, String>) -> Self {
        let to_value = |map: &BTreeMap<String, String>| {
            Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            )
        };
        Self {
            content_en: to_value(en),
            content_ar: to_value(ar),
            updated_at: None,
        }
    }
}

/// Statically-compiled fallback text for one page, both languages.
///
/// Fields are `(field_name, english, arabic)` triples.
#[derive(Debug, Clone, Copy)]
pub struct PageFallback {
    /// The page key this table belongs to.
    pub key: &'static str,
    fields: &'static [(&'static str, &'static str, &'static str)],
}

impl PageFallback {
    /// The fallback field map for one language.
    #[must_use]
    pub fn map(&self, language: Language) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(name, en, ar)| {
                let text = match language {
                    Language::En => en,
                    Language::Ar => ar,
                };
                ((*name).to_owned(), (*text).to_owned())
            })
            .collect()
    }
}

/// Look up the static fallback table for a page key.
#[must_use]
pub fn static_fallback(page_key: &str) -> Option<&'static PageFallback> {
    FALLBACKS.iter().find(|f| f.key == page_key)
}

/// Resolve the final field map for a page.
///
/// Starts from the static fallback for the active language (empty for an
/// unknown page key), then shallow-overlays the remote language sub-map:
/// remote string values win, missing remote keys keep the static text, and
/// unknown remote keys pass through. A remote sub-map that is absent or not
/// an object contributes nothing.
#[must_use]
pub fn resolve_fields(
    page_key: &str,
    language: Language,
    remote: Option<&ContentDocument>,
) -> BTreeMap<String, String> {
    let mut fields = static_fallback(page_key)
        .map(|f| f.map(language))
        .unwrap_or_default();

    if let Some(doc) = remote
        && let Value::Object(sub_map) = doc.sub_map(language)
    {
        for (key, value) in sub_map {
            // Only flat string fields are renderable; anything else is
            // treated as absent for that key.
            if let Value::String(text) = value {
                fields.insert(key.clone(), text.clone());
            }
        }
    }

    fields
}

// The deduplicated page-keyed fallback table. One entry per public page;
// the admin "seed" action copies these into a fresh content document.
static FALLBACKS: &[PageFallback] = &[
    PageFallback {
        key: "home",
        fields: &[
            (
                "heroTitle",
                "Together We Build Hope",
                "معًا نبني الأمل",
            ),
            (
                "heroSubtitle",
                "Serving families across our community through social assistance, healthcare, and education.",
                "نخدم العائلات في مجتمعنا من خلال المساعدة الاجتماعية والرعاية الصحية والتعليم.",
            ),
            ("ctaDonate", "Donate Now", "تبرع الآن"),
            ("ctaPrograms", "Our Programs", "برامجنا"),
            (
                "impactTitle",
                "Our Impact This Year",
                "أثرنا هذا العام",
            ),
        ],
    },
    PageFallback {
        key: "about",
        fields: &[
            ("title", "About the Foundation", "عن المؤسسة"),
            (
                "subtitle",
                "A non-profit serving the community since 1998.",
                "مؤسسة غير ربحية تخدم المجتمع منذ عام ١٩٩٨.",
            ),
            (
                "missionTitle",
                "Our Mission",
                "رسالتنا",
            ),
            (
                "missionBody",
                "To empower individuals and families through comprehensive social, medical, and educational support.",
                "تمكين الأفراد والأسر من خلال دعم اجتماعي وطبي وتعليمي شامل.",
            ),
            ("visionTitle", "Our Vision", "رؤيتنا"),
            (
                "visionBody",
                "A community where every person lives with dignity and opportunity.",
                "مجتمع يعيش فيه كل إنسان بكرامة وفرص متكافئة.",
            ),
        ],
    },
    PageFallback {
        key: "programs",
        fields: &[
            ("title", "Our Programs", "برامجنا"),
            (
                "subtitle",
                "Seven program areas serving thousands of beneficiaries.",
                "سبعة مجالات برامجية تخدم آلاف المستفيدين.",
            ),
        ],
    },
    PageFallback {
        key: "governance",
        fields: &[
            ("title", "Governance", "الحوكمة"),
            (
                "subtitle",
                "Meet the board members who guide our work.",
                "تعرف على أعضاء مجلس الإدارة الذين يوجهون عملنا.",
            ),
            ("boardTitle", "Board of Directors", "مجلس الإدارة"),
        ],
    },
    PageFallback {
        key: "membership",
        fields: &[
            ("title", "Membership", "العضوية"),
            (
                "subtitle",
                "Join the general assembly and help shape our direction.",
                "انضم إلى الجمعية العمومية وساهم في رسم توجهاتنا.",
            ),
            (
                "eligibilityTitle",
                "Who Can Join",
                "من يمكنه الانضمام",
            ),
        ],
    },
    PageFallback {
        key: "bylaws",
        fields: &[
            ("title", "Bylaws", "اللائحة الأساسية"),
            (
                "subtitle",
                "The statutes governing the foundation, available in full below.",
                "النظام الأساسي الذي يحكم عمل المؤسسة، متاح كاملًا أدناه.",
            ),
            ("summarizeLabel", "Summarize this document", "تلخيص هذا المستند"),
        ],
    },
    PageFallback {
        key: "news",
        fields: &[
            ("title", "News & Updates", "الأخبار والمستجدات"),
            (
                "subtitle",
                "Stories from our programs and community.",
                "قصص من برامجنا ومجتمعنا.",
            ),
        ],
    },
    PageFallback {
        key: "contact",
        fields: &[
            ("title", "Contact Us", "اتصل بنا"),
            (
                "subtitle",
                "We would love to hear from you.",
                "يسعدنا أن نسمع منك.",
            ),
            ("formSubmit", "Send Message", "إرسال الرسالة"),
            (
                "successMessage",
                "Thank you for your message! We will get back to you shortly.",
                "شكرًا لرسالتك! سنعاود التواصل معك قريبًا.",
            ),
        ],
    },
    PageFallback {
        key: "donate",
        fields: &[
            ("title", "Donate", "تبرع"),
            (
                "subtitle",
                "Your gift funds social assistance, healthcare, and education.",
                "تبرعك يمول المساعدة الاجتماعية والرعاية الصحية والتعليم.",
            ),
            ("formSubmit", "Complete Donation", "إتمام التبرع"),
            (
                "successMessage",
                "Thank you for your generosity!",
                "شكرًا لكرمك!",
            ),
        ],
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(en: Value, ar: Value) -> ContentDocument {
        ContentDocument {
            content_en: en,
            content_ar: ar,
            updated_at: None,
        }
    }

    #[test]
    fn test_every_page_key_has_a_fallback() {
        for key in crate::collections::PAGE_KEYS {
            assert!(static_fallback(key).is_some(), "missing fallback for {key}");
        }
    }

    #[test]
    fn test_remote_overlay_wins_key_by_key() {
        // Static about page has title + subtitle (and more); remote only
        // overrides the title. The subtitle must stay static.
        let remote = doc(json!({"title": "About Us, Renamed"}), Value::Null);
        let resolved = resolve_fields("about", Language::En, Some(&remote));

        assert_eq!(resolved.get("title").unwrap(), "About Us, Renamed");
        assert_eq!(
            resolved.get("subtitle").unwrap(),
            "A non-profit serving the community since 1998."
        );
    }

    #[test]
    fn test_arabic_falls_back_when_no_arabic_sub_map() {
        let remote = doc(json!({"title": "About Us, Renamed"}), Value::Null);
        let resolved = resolve_fields("about", Language::Ar, Some(&remote));
        let static_ar = static_fallback("about").unwrap().map(Language::Ar);

        assert_eq!(resolved, static_ar);
    }

    #[test]
    fn test_malformed_sub_map_degrades_to_static() {
        // contentAr present but not an object: must not panic, must equal
        // the static Arabic table exactly.
        let remote = doc(json!({"title": "x"}), json!("not an object"));
        let resolved = resolve_fields("about", Language::Ar, Some(&remote));

        assert_eq!(resolved, static_fallback("about").unwrap().map(Language::Ar));
    }

    #[test]
    fn test_unknown_remote_keys_pass_through() {
        let remote = doc(json!({"bannerOverride": "Eid schedule"}), Value::Null);
        let resolved = resolve_fields("home", Language::En, Some(&remote));

        assert_eq!(resolved.get("bannerOverride").unwrap(), "Eid schedule");
        // Static keys still present.
        assert!(resolved.contains_key("heroTitle"));
    }

    #[test]
    fn test_non_string_remote_values_are_ignored() {
        let remote = doc(json!({"heroTitle": 42, "ctaDonate": "Give"}), Value::Null);
        let resolved = resolve_fields("home", Language::En, Some(&remote));

        assert_eq!(resolved.get("heroTitle").unwrap(), "Together We Build Hope");
        assert_eq!(resolved.get("ctaDonate").unwrap(), "Give");
    }

    #[test]
    fn test_unknown_page_key_resolves_to_remote_only() {
        let remote = doc(json!({"title": "Pop-up"}), Value::Null);
        let resolved = resolve_fields("pop-up", Language::En, Some(&remote));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get("title").unwrap(), "Pop-up");
    }

    #[test]
    fn test_no_remote_document_is_pure_static() {
        let resolved = resolve_fields("donate", Language::En, None);
        assert_eq!(resolved, static_fallback("donate").unwrap().map(Language::En));
    }

    #[test]
    fn test_from_maps_round_trip() {
        let en = static_fallback("contact").unwrap().map(Language::En);
        let ar = static_fallback("contact").unwrap().map(Language::Ar);
        let document = ContentDocument::from_maps(&en, &ar);

        assert_eq!(resolve_fields("contact", Language::En, Some(&document)), en);
        assert_eq!(resolve_fields("contact", Language::Ar, Some(&document)), ar);
    }
}
