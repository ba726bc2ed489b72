use chrono::{DateTime, Utc};
use entity::{
    multilingual_text::{LANG_EN, LANG_TH},
    MultilingualText,
};
use uuid::Uuid;

use crate::server::model::tag::{Tag, TagTranslation};

/// Turns creator-supplied tag labels into catalog records.
pub struct TagCatalog;

impl TagCatalog {
    /// Mints one new tag per input label.
    ///
    /// Tags are never looked up or reused: identical labels on two series give
    /// two distinct tag identities. The slug is the English label verbatim and
    /// each tag carries an `en` and a `th` translation, even when empty.
    pub fn synthesize(inputs: &[MultilingualText], now: DateTime<Utc>) -> Vec<Tag> {
        inputs
            .iter()
            .map(|label| {
                let tag_id = Uuid::new_v4();
                Tag {
                    id: tag_id,
                    slug: label.en.clone(),
                    translations: vec![
                        TagTranslation {
                            id: Uuid::new_v4(),
                            tag_id,
                            language: LANG_EN.to_string(),
                            name: label.en.clone(),
                        },
                        TagTranslation {
                            id: Uuid::new_v4(),
                            tag_id,
                            language: LANG_TH.to_string(),
                            name: label.th.clone(),
                        },
                    ],
                    created_at: now,
                    updated_at: now,
                }
            })
            .collect()
    }
}
