//! Entry records
//!
//! The record types that live inside the document's collection fields, one
//! per domain: FAQ items, team members, gallery images, testimonials, menu
//! items, and social feed posts. Each type carries its [`EntryId`] plus a
//! handful of free-form string fields, and comes with a `Draft` (creation
//! data) and a `Patch` (partial update) so it plugs into the generic
//! [`Collection`](crate::collection::Collection) machinery.

use serde::{Deserialize, Serialize};

use crate::collection::CollectionEntry;
use crate::id::EntryId;

// ==================== FAQ ====================

/// One question/answer pair in the FAQ section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Unique identifier, assigned at creation
    pub id: EntryId,
    pub question: String,
    pub answer: String,
}

/// Creation data for a [`FaqItem`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

/// Partial update for a [`FaqItem`]; unset fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl CollectionEntry for FaqItem {
    type Draft = FaqDraft;
    type Patch = FaqPatch;

    fn new(id: EntryId, draft: FaqDraft) -> Self {
        Self {
            id,
            question: draft.question,
            answer: draft.answer,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn apply(&mut self, patch: FaqPatch) {
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(answer) = patch.answer {
            self.answer = answer;
        }
    }
}

// ==================== Team ====================

/// A guide or staff member shown in the team section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: EntryId,
    pub name: String,
    /// Role line shown under the name, e.g. "Lead guide"
    pub role: String,
    /// Portrait image URL
    pub photo: String,
}

/// Creation data for a [`TeamMember`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMemberDraft {
    pub name: String,
    pub role: String,
    pub photo: String,
}

/// Partial update for a [`TeamMember`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub photo: Option<String>,
}

impl CollectionEntry for TeamMember {
    type Draft = TeamMemberDraft;
    type Patch = TeamMemberPatch;

    fn new(id: EntryId, draft: TeamMemberDraft) -> Self {
        Self {
            id,
            name: draft.name,
            role: draft.role,
            photo: draft.photo,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn apply(&mut self, patch: TeamMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(photo) = patch.photo {
            self.photo = photo;
        }
    }
}

// ==================== Gallery ====================

/// One image in the photo gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: EntryId,
    pub url: String,
    pub caption: String,
}

/// Creation data for a [`GalleryImage`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImageDraft {
    pub url: String,
    pub caption: String,
}

/// Partial update for a [`GalleryImage`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryImagePatch {
    pub url: Option<String>,
    pub caption: Option<String>,
}

impl CollectionEntry for GalleryImage {
    type Draft = GalleryImageDraft;
    type Patch = GalleryImagePatch;

    fn new(id: EntryId, draft: GalleryImageDraft) -> Self {
        Self {
            id,
            url: draft.url,
            caption: draft.caption,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn apply(&mut self, patch: GalleryImagePatch) {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(caption) = patch.caption {
            self.caption = caption;
        }
    }
}

// ==================== Testimonials ====================

/// A rider quote shown in the testimonials section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: EntryId,
    pub author: String,
    pub quote: String,
    /// Where the rider is from, e.g. "Wellington, NZ"
    pub location: String,
}

/// Creation data for a [`Testimonial`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialDraft {
    pub author: String,
    pub quote: String,
    pub location: String,
}

/// Partial update for a [`Testimonial`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialPatch {
    pub author: Option<String>,
    pub quote: Option<String>,
    pub location: Option<String>,
}

impl CollectionEntry for Testimonial {
    type Draft = TestimonialDraft;
    type Patch = TestimonialPatch;

    fn new(id: EntryId, draft: TestimonialDraft) -> Self {
        Self {
            id,
            author: draft.author,
            quote: draft.quote,
            location: draft.location,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn apply(&mut self, patch: TestimonialPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(quote) = patch.quote {
            self.quote = quote;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}

// ==================== Menu ====================

/// One navigation entry in the site menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: EntryId,
    pub label: String,
    pub url: String,
}

/// Creation data for a [`MenuItem`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemDraft {
    pub label: String,
    pub url: String,
}

/// Partial update for a [`MenuItem`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuItemPatch {
    pub label: Option<String>,
    pub url: Option<String>,
}

impl CollectionEntry for MenuItem {
    type Draft = MenuItemDraft;
    type Patch = MenuItemPatch;

    fn new(id: EntryId, draft: MenuItemDraft) -> Self {
        Self {
            id,
            label: draft.label,
            url: draft.url,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn apply(&mut self, patch: MenuItemPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
    }
}

// ==================== Social feed ====================

/// One image in the social feed strip
///
/// Stored as a full record (image, outbound link, caption) rather than a
/// bare URL so the caption and link survive re-imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: EntryId,
    pub image_url: String,
    /// Where clicking the image leads, usually the profile page
    pub link: String,
    pub caption: String,
}

/// Creation data for a [`SocialPost`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPostDraft {
    pub image_url: String,
    pub link: String,
    pub caption: String,
}

/// Partial update for a [`SocialPost`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialPostPatch {
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub caption: Option<String>,
}

impl CollectionEntry for SocialPost {
    type Draft = SocialPostDraft;
    type Patch = SocialPostPatch;

    fn new(id: EntryId, draft: SocialPostDraft) -> Self {
        Self {
            id,
            image_url: draft.image_url,
            link: draft.link,
            caption: draft.caption,
        }
    }

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn apply(&mut self, patch: SocialPostPatch) {
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(caption) = patch.caption {
            self.caption = caption;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_item_from_draft() {
        let item = FaqItem::new(
            EntryId::from("1"),
            FaqDraft {
                question: "Do I need my own bike?".to_string(),
                answer: "Rentals are included.".to_string(),
            },
        );
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.question, "Do I need my own bike?");
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut item = FaqItem::new(
            EntryId::from("1"),
            FaqDraft {
                question: "Q1".to_string(),
                answer: "A1".to_string(),
            },
        );
        item.apply(FaqPatch {
            answer: Some("A1-updated".to_string()),
            ..Default::default()
        });
        assert_eq!(item.question, "Q1");
        assert_eq!(item.answer, "A1-updated");
        assert_eq!(item.id.as_str(), "1");
    }

    #[test]
    fn test_draft_defaults_to_empty_fields() {
        let draft = GalleryImageDraft::default();
        assert!(draft.url.is_empty());
        assert!(draft.caption.is_empty());
    }

    #[test]
    fn test_draft_deserializes_with_missing_fields() {
        let draft: SocialPostDraft =
            serde_json::from_value(serde_json::json!({"image_url": "https://a.com/1.jpg"}))
                .unwrap();
        assert_eq!(draft.image_url, "https://a.com/1.jpg");
        assert!(draft.link.is_empty());
        assert!(draft.caption.is_empty());
    }

    #[test]
    fn test_patch_deserializes_from_partial_object() {
        let patch: TeamMemberPatch =
            serde_json::from_value(serde_json::json!({"role": "Mechanic"})).unwrap();
        assert_eq!(patch.role.as_deref(), Some("Mechanic"));
        assert!(patch.name.is_none());
        assert!(patch.photo.is_none());
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let member = TeamMember::new(
            EntryId::from("7"),
            TeamMemberDraft {
                name: "Ana".to_string(),
                role: "Lead guide".to_string(),
                photo: "https://cdn.example.com/ana.jpg".to_string(),
            },
        );
        let json = serde_json::to_string(&member).unwrap();
        let parsed: TeamMember = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, member);
    }
}
