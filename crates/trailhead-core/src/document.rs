//! The settings document
//!
//! The `Document` is the root object behind the marketing site: one field
//! per homepage section, loaded as a unit, edited in memory, and persisted
//! as a unit on an explicit save.
//!
//! Every mutation is a pure transformation - it consumes the document and
//! returns the updated value - so the owning controller composes edits
//! against the latest in-memory document and a half-applied state is never
//! observable. All operations are total: unknown ids and out-of-range
//! indices degrade to no-ops, because the inputs come from the same
//! in-memory model and cannot be forged by an external actor.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::id::EntryId;
use crate::models::{
    FaqDraft, FaqPatch, GalleryImageDraft, GalleryImagePatch, MenuItemDraft, MenuItemPatch,
    SocialPostDraft, SocialPostPatch, TeamMemberDraft, TeamMemberPatch, TestimonialDraft,
    TestimonialPatch,
};
use crate::sections::{
    FaqSection, FaqSectionPatch, GallerySection, GallerySectionPatch, HeroPatch, HeroSection,
    MenuSection, MenuSectionPatch, SeoPatch, SeoSection, SocialSection, SocialSectionPatch,
    TeamSection, TeamSectionPatch, TestimonialsSection, TestimonialsSectionPatch,
};

/// Errors that can occur at the document boundary
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The persisted value does not have the shape of a settings document
    #[error("Invalid settings document: {0}")]
    InvalidShape(#[from] serde_json::Error),
}

/// Error parsing a section or collection key from user input
#[derive(Error, Debug)]
#[error("Unknown key '{key}'. Valid keys: {valid}")]
pub struct UnknownKey {
    key: String,
    valid: String,
}

impl UnknownKey {
    fn new(key: &str, valid: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            key: key.to_string(),
            valid: valid.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Keys of the known sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Hero,
    Faq,
    Team,
    Gallery,
    Testimonials,
    Menu,
    Social,
    Seo,
}

impl SectionKey {
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Hero,
        SectionKey::Faq,
        SectionKey::Team,
        SectionKey::Gallery,
        SectionKey::Testimonials,
        SectionKey::Menu,
        SectionKey::Social,
        SectionKey::Seo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Faq => "faq",
            SectionKey::Team => "team",
            SectionKey::Gallery => "gallery",
            SectionKey::Testimonials => "testimonials",
            SectionKey::Menu => "menu",
            SectionKey::Social => "social",
            SectionKey::Seo => "seo",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey::new(s, SectionKey::ALL.map(|k| k.as_str())))
    }
}

/// Keys of the collection fields, named `section.field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    FaqItems,
    TeamMembers,
    GalleryImages,
    Testimonials,
    MenuItems,
    SocialPosts,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 6] = [
        CollectionKey::FaqItems,
        CollectionKey::TeamMembers,
        CollectionKey::GalleryImages,
        CollectionKey::Testimonials,
        CollectionKey::MenuItems,
        CollectionKey::SocialPosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::FaqItems => "faq.items",
            CollectionKey::TeamMembers => "team.members",
            CollectionKey::GalleryImages => "gallery.images",
            CollectionKey::Testimonials => "testimonials.entries",
            CollectionKey::MenuItems => "menu.items",
            CollectionKey::SocialPosts => "social.posts",
        }
    }

    /// The section this collection lives in
    pub fn section(&self) -> SectionKey {
        match self {
            CollectionKey::FaqItems => SectionKey::Faq,
            CollectionKey::TeamMembers => SectionKey::Team,
            CollectionKey::GalleryImages => SectionKey::Gallery,
            CollectionKey::Testimonials => SectionKey::Testimonials,
            CollectionKey::MenuItems => SectionKey::Menu,
            CollectionKey::SocialPosts => SectionKey::Social,
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CollectionKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey::new(s, CollectionKey::ALL.map(|k| k.as_str())))
    }
}

/// A scalar-field update for one section, tagged by section
#[derive(Debug, Clone)]
pub enum SectionPatch {
    Hero(HeroPatch),
    Faq(FaqSectionPatch),
    Team(TeamSectionPatch),
    Gallery(GallerySectionPatch),
    Testimonials(TestimonialsSectionPatch),
    Menu(MenuSectionPatch),
    Social(SocialSectionPatch),
    Seo(SeoPatch),
}

impl SectionPatch {
    /// Build a patch for `key` from a JSON object of field values
    pub fn from_value(key: SectionKey, value: Value) -> Result<Self, DocumentError> {
        Ok(match key {
            SectionKey::Hero => SectionPatch::Hero(serde_json::from_value(value)?),
            SectionKey::Faq => SectionPatch::Faq(serde_json::from_value(value)?),
            SectionKey::Team => SectionPatch::Team(serde_json::from_value(value)?),
            SectionKey::Gallery => SectionPatch::Gallery(serde_json::from_value(value)?),
            SectionKey::Testimonials => SectionPatch::Testimonials(serde_json::from_value(value)?),
            SectionKey::Menu => SectionPatch::Menu(serde_json::from_value(value)?),
            SectionKey::Social => SectionPatch::Social(serde_json::from_value(value)?),
            SectionKey::Seo => SectionPatch::Seo(serde_json::from_value(value)?),
        })
    }

    pub fn key(&self) -> SectionKey {
        match self {
            SectionPatch::Hero(_) => SectionKey::Hero,
            SectionPatch::Faq(_) => SectionKey::Faq,
            SectionPatch::Team(_) => SectionKey::Team,
            SectionPatch::Gallery(_) => SectionKey::Gallery,
            SectionPatch::Testimonials(_) => SectionKey::Testimonials,
            SectionPatch::Menu(_) => SectionKey::Menu,
            SectionPatch::Social(_) => SectionKey::Social,
            SectionPatch::Seo(_) => SectionKey::Seo,
        }
    }
}

/// Creation data for a new entry, tagged by its target collection
///
/// The tag names the collection, so a draft can never be appended to the
/// wrong field - the key/data mismatch of a string-keyed model is simply
/// unrepresentable.
#[derive(Debug, Clone)]
pub enum EntryDraft {
    Faq(FaqDraft),
    TeamMember(TeamMemberDraft),
    GalleryImage(GalleryImageDraft),
    Testimonial(TestimonialDraft),
    MenuItem(MenuItemDraft),
    SocialPost(SocialPostDraft),
}

impl EntryDraft {
    /// Build a draft for `key` from a JSON object of field values
    pub fn from_value(key: CollectionKey, value: Value) -> Result<Self, DocumentError> {
        Ok(match key {
            CollectionKey::FaqItems => EntryDraft::Faq(serde_json::from_value(value)?),
            CollectionKey::TeamMembers => EntryDraft::TeamMember(serde_json::from_value(value)?),
            CollectionKey::GalleryImages => {
                EntryDraft::GalleryImage(serde_json::from_value(value)?)
            }
            CollectionKey::Testimonials => EntryDraft::Testimonial(serde_json::from_value(value)?),
            CollectionKey::MenuItems => EntryDraft::MenuItem(serde_json::from_value(value)?),
            CollectionKey::SocialPosts => EntryDraft::SocialPost(serde_json::from_value(value)?),
        })
    }

    pub fn key(&self) -> CollectionKey {
        match self {
            EntryDraft::Faq(_) => CollectionKey::FaqItems,
            EntryDraft::TeamMember(_) => CollectionKey::TeamMembers,
            EntryDraft::GalleryImage(_) => CollectionKey::GalleryImages,
            EntryDraft::Testimonial(_) => CollectionKey::Testimonials,
            EntryDraft::MenuItem(_) => CollectionKey::MenuItems,
            EntryDraft::SocialPost(_) => CollectionKey::SocialPosts,
        }
    }
}

/// Partial update for an existing entry, tagged by its collection
#[derive(Debug, Clone)]
pub enum EntryPatch {
    Faq(FaqPatch),
    TeamMember(TeamMemberPatch),
    GalleryImage(GalleryImagePatch),
    Testimonial(TestimonialPatch),
    MenuItem(MenuItemPatch),
    SocialPost(SocialPostPatch),
}

impl EntryPatch {
    /// Build a patch for `key` from a JSON object of field values
    pub fn from_value(key: CollectionKey, value: Value) -> Result<Self, DocumentError> {
        Ok(match key {
            CollectionKey::FaqItems => EntryPatch::Faq(serde_json::from_value(value)?),
            CollectionKey::TeamMembers => EntryPatch::TeamMember(serde_json::from_value(value)?),
            CollectionKey::GalleryImages => {
                EntryPatch::GalleryImage(serde_json::from_value(value)?)
            }
            CollectionKey::Testimonials => EntryPatch::Testimonial(serde_json::from_value(value)?),
            CollectionKey::MenuItems => EntryPatch::MenuItem(serde_json::from_value(value)?),
            CollectionKey::SocialPosts => EntryPatch::SocialPost(serde_json::from_value(value)?),
        })
    }

    pub fn key(&self) -> CollectionKey {
        match self {
            EntryPatch::Faq(_) => CollectionKey::FaqItems,
            EntryPatch::TeamMember(_) => CollectionKey::TeamMembers,
            EntryPatch::GalleryImage(_) => CollectionKey::GalleryImages,
            EntryPatch::Testimonial(_) => CollectionKey::Testimonials,
            EntryPatch::MenuItem(_) => CollectionKey::MenuItems,
            EntryPatch::SocialPost(_) => CollectionKey::SocialPosts,
        }
    }
}

/// The root settings object for the marketing site
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub hero: HeroSection,
    pub faq: FaqSection,
    pub team: TeamSection,
    pub gallery: GallerySection,
    pub testimonials: TestimonialsSection,
    pub menu: MenuSection,
    pub social: SocialSection,
    pub seo: SeoSection,
    /// When the document was last saved; stamped by the settings store
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Materialize a document from its persisted JSON value
    ///
    /// This is the single place defaults are spliced in: sections and fields
    /// missing from the persisted value are filled from their static
    /// defaults, so every later operation can assume a schema-complete
    /// document. Persisted values always win over defaults.
    pub fn materialize(value: Value) -> Result<Self, DocumentError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The document as an opaque JSON value for the record store
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("settings document serializes to JSON")
    }

    /// Shallow-merge scalar fields into one section
    pub fn merge_section(mut self, patch: SectionPatch) -> Self {
        match patch {
            SectionPatch::Hero(p) => self.hero.merge(p),
            SectionPatch::Faq(p) => self.faq.merge(p),
            SectionPatch::Team(p) => self.team.merge(p),
            SectionPatch::Gallery(p) => self.gallery.merge(p),
            SectionPatch::Testimonials(p) => self.testimonials.merge(p),
            SectionPatch::Menu(p) => self.menu.merge(p),
            SectionPatch::Social(p) => self.social.merge(p),
            SectionPatch::Seo(p) => self.seo.merge(p),
        }
        self
    }

    /// Append a new entry to the draft's target collection
    ///
    /// Mints a fresh id and returns it alongside the updated document. The
    /// new entry is always last in its collection.
    pub fn add_entry(mut self, draft: EntryDraft) -> (Self, EntryId) {
        let id = match draft {
            EntryDraft::Faq(d) => {
                let (items, id) = self.faq.items.with_added(d);
                self.faq.items = items;
                id
            }
            EntryDraft::TeamMember(d) => {
                let (members, id) = self.team.members.with_added(d);
                self.team.members = members;
                id
            }
            EntryDraft::GalleryImage(d) => {
                let (images, id) = self.gallery.images.with_added(d);
                self.gallery.images = images;
                id
            }
            EntryDraft::Testimonial(d) => {
                let (entries, id) = self.testimonials.entries.with_added(d);
                self.testimonials.entries = entries;
                id
            }
            EntryDraft::MenuItem(d) => {
                let (items, id) = self.menu.items.with_added(d);
                self.menu.items = items;
                id
            }
            EntryDraft::SocialPost(d) => {
                let (posts, id) = self.social.posts.with_added(d);
                self.social.posts = posts;
                id
            }
        };
        (self, id)
    }

    /// Append a batch of drafts in one model update
    ///
    /// Entries land at the end of their target collections in input order.
    /// An empty batch returns the document unchanged.
    pub fn extend_collection(mut self, drafts: Vec<EntryDraft>) -> Self {
        let mut faq = Vec::new();
        let mut team = Vec::new();
        let mut gallery = Vec::new();
        let mut testimonials = Vec::new();
        let mut menu = Vec::new();
        let mut social = Vec::new();

        for draft in drafts {
            match draft {
                EntryDraft::Faq(d) => faq.push(d),
                EntryDraft::TeamMember(d) => team.push(d),
                EntryDraft::GalleryImage(d) => gallery.push(d),
                EntryDraft::Testimonial(d) => testimonials.push(d),
                EntryDraft::MenuItem(d) => menu.push(d),
                EntryDraft::SocialPost(d) => social.push(d),
            }
        }

        if !faq.is_empty() {
            self.faq.items = self.faq.items.with_extended(faq);
        }
        if !team.is_empty() {
            self.team.members = self.team.members.with_extended(team);
        }
        if !gallery.is_empty() {
            self.gallery.images = self.gallery.images.with_extended(gallery);
        }
        if !testimonials.is_empty() {
            self.testimonials.entries = self.testimonials.entries.with_extended(testimonials);
        }
        if !menu.is_empty() {
            self.menu.items = self.menu.items.with_extended(menu);
        }
        if !social.is_empty() {
            self.social.posts = self.social.posts.with_extended(social);
        }
        self
    }

    /// Shallow-merge a patch into the entry with the given id
    ///
    /// The entry keeps its position and its id; no-op when the id is not
    /// present in the patch's collection.
    pub fn update_entry(mut self, id: &EntryId, patch: EntryPatch) -> Self {
        match patch {
            EntryPatch::Faq(p) => self.faq.items = self.faq.items.with_updated(id, p),
            EntryPatch::TeamMember(p) => {
                self.team.members = self.team.members.with_updated(id, p)
            }
            EntryPatch::GalleryImage(p) => {
                self.gallery.images = self.gallery.images.with_updated(id, p)
            }
            EntryPatch::Testimonial(p) => {
                self.testimonials.entries = self.testimonials.entries.with_updated(id, p)
            }
            EntryPatch::MenuItem(p) => self.menu.items = self.menu.items.with_updated(id, p),
            EntryPatch::SocialPost(p) => {
                self.social.posts = self.social.posts.with_updated(id, p)
            }
        }
        self
    }

    /// Remove the entry with the given id from a collection
    ///
    /// Idempotent: removing an id that is not present is a no-op, and the
    /// relative order of the remaining entries is unchanged.
    pub fn remove_entry(mut self, key: CollectionKey, id: &EntryId) -> Self {
        match key {
            CollectionKey::FaqItems => self.faq.items = self.faq.items.without(id),
            CollectionKey::TeamMembers => self.team.members = self.team.members.without(id),
            CollectionKey::GalleryImages => self.gallery.images = self.gallery.images.without(id),
            CollectionKey::Testimonials => {
                self.testimonials.entries = self.testimonials.entries.without(id)
            }
            CollectionKey::MenuItems => self.menu.items = self.menu.items.without(id),
            CollectionKey::SocialPosts => self.social.posts = self.social.posts.without(id),
        }
        self
    }

    /// Move an entry from one display position to another
    ///
    /// Out-of-range indices are a no-op.
    pub fn reorder_entry(mut self, key: CollectionKey, from: usize, to: usize) -> Self {
        match key {
            CollectionKey::FaqItems => self.faq.items = self.faq.items.with_moved(from, to),
            CollectionKey::TeamMembers => {
                self.team.members = self.team.members.with_moved(from, to)
            }
            CollectionKey::GalleryImages => {
                self.gallery.images = self.gallery.images.with_moved(from, to)
            }
            CollectionKey::Testimonials => {
                self.testimonials.entries = self.testimonials.entries.with_moved(from, to)
            }
            CollectionKey::MenuItems => self.menu.items = self.menu.items.with_moved(from, to),
            CollectionKey::SocialPosts => {
                self.social.posts = self.social.posts.with_moved(from, to)
            }
        }
        self
    }

    /// Number of entries in a collection
    pub fn collection_len(&self, key: CollectionKey) -> usize {
        match key {
            CollectionKey::FaqItems => self.faq.items.len(),
            CollectionKey::TeamMembers => self.team.members.len(),
            CollectionKey::GalleryImages => self.gallery.images.len(),
            CollectionKey::Testimonials => self.testimonials.entries.len(),
            CollectionKey::MenuItems => self.menu.items.len(),
            CollectionKey::SocialPosts => self.social.posts.len(),
        }
    }

    /// A collection's entries as a JSON array, for generic display surfaces
    pub fn collection_to_value(&self, key: CollectionKey) -> Value {
        let value = match key {
            CollectionKey::FaqItems => serde_json::to_value(&self.faq.items),
            CollectionKey::TeamMembers => serde_json::to_value(&self.team.members),
            CollectionKey::GalleryImages => serde_json::to_value(&self.gallery.images),
            CollectionKey::Testimonials => serde_json::to_value(&self.testimonials.entries),
            CollectionKey::MenuItems => serde_json::to_value(&self.menu.items),
            CollectionKey::SocialPosts => serde_json::to_value(&self.social.posts),
        };
        value.expect("collection serializes to JSON")
    }

    /// One section as a JSON object, for generic display surfaces
    pub fn section_to_value(&self, key: SectionKey) -> Value {
        let value = match key {
            SectionKey::Hero => serde_json::to_value(&self.hero),
            SectionKey::Faq => serde_json::to_value(&self.faq),
            SectionKey::Team => serde_json::to_value(&self.team),
            SectionKey::Gallery => serde_json::to_value(&self.gallery),
            SectionKey::Testimonials => serde_json::to_value(&self.testimonials),
            SectionKey::Menu => serde_json::to_value(&self.menu),
            SectionKey::Social => serde_json::to_value(&self.social),
            SectionKey::Seo => serde_json::to_value(&self.seo),
        };
        value.expect("section serializes to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_faq_item() -> (Document, EntryId) {
        Document::default().add_entry(EntryDraft::Faq(FaqDraft {
            question: "Q1".to_string(),
            answer: "A1".to_string(),
        }))
    }

    #[test]
    fn test_materialize_empty_value_yields_defaults() {
        let doc = Document::materialize(json!({})).unwrap();
        assert_eq!(doc, Document::default());
        for key in CollectionKey::ALL {
            assert_eq!(doc.collection_len(key), 0);
        }
    }

    #[test]
    fn test_materialize_keeps_persisted_values() {
        let doc = Document::materialize(json!({
            "faq": {
                "enabled": false,
                "items": [{"id": "1", "question": "Q1", "answer": "A1"}]
            }
        }))
        .unwrap();
        assert!(!doc.faq.enabled);
        assert_eq!(doc.faq.items.len(), 1);
        // untouched sections come from defaults
        assert!(doc.team.enabled);
        assert_eq!(doc.gallery.title, "From the road");
    }

    #[test]
    fn test_materialize_rejects_wrong_shape() {
        let result = Document::materialize(json!({"faq": {"items": "not-an-array"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_value_round_trip() {
        let (doc, _) = doc_with_faq_item();
        let restored = Document::materialize(doc.to_value()).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_merge_section_touches_only_named_section() {
        let doc = Document::default().merge_section(SectionPatch::Faq(FaqSectionPatch {
            enabled: Some(false),
            title: Some("Questions".to_string()),
        }));
        assert!(!doc.faq.enabled);
        assert_eq!(doc.faq.title, "Questions");
        assert_eq!(doc.team, Document::default().team);
        assert_eq!(doc.hero, Document::default().hero);
    }

    #[test]
    fn test_add_entry_appends_last() {
        let (doc, _) = doc_with_faq_item();
        let (doc, second_id) = doc.add_entry(EntryDraft::Faq(FaqDraft {
            question: "Q2".to_string(),
            answer: "A2".to_string(),
        }));
        let items = doc.faq.items.entries();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, second_id);
        assert_eq!(items[1].question, "Q2");
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let (base, _) = doc_with_faq_item();
        let (grown, added_id) = base.clone().add_entry(EntryDraft::Faq(FaqDraft::default()));
        let restored = grown.remove_entry(CollectionKey::FaqItems, &added_id);
        assert_eq!(restored, base);
    }

    #[test]
    fn test_update_entry_merges_shallowly() {
        // document has faq items [{id "1", question "Q1", answer "A1"}]
        let doc = Document::materialize(json!({
            "faq": {"items": [{"id": "1", "question": "Q1", "answer": "A1"}]}
        }))
        .unwrap();

        let doc = doc.update_entry(
            &EntryId::from("1"),
            EntryPatch::Faq(FaqPatch {
                answer: Some("A1-updated".to_string()),
                ..Default::default()
            }),
        );

        let items = doc.faq.items.entries();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "1");
        assert_eq!(items[0].question, "Q1");
        assert_eq!(items[0].answer, "A1-updated");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (doc, _) = doc_with_faq_item();
        let unchanged = doc.clone().update_entry(
            &EntryId::from("missing"),
            EntryPatch::Faq(FaqPatch::default()),
        );
        assert_eq!(unchanged, doc);
    }

    #[test]
    fn test_remove_is_idempotent_and_leaves_other_sections() {
        let (doc, id) = doc_with_faq_item();
        let (doc, _) = doc.add_entry(EntryDraft::MenuItem(MenuItemDraft {
            label: "Tours".to_string(),
            url: "/tours".to_string(),
        }));

        let once = doc.clone().remove_entry(CollectionKey::FaqItems, &id);
        let twice = once.clone().remove_entry(CollectionKey::FaqItems, &id);
        assert_eq!(once, twice);
        assert_eq!(once.collection_len(CollectionKey::FaqItems), 0);
        assert_eq!(once.collection_len(CollectionKey::MenuItems), 1);
    }

    #[test]
    fn test_reorder_entry() {
        let doc = Document::default().extend_collection(vec![
            EntryDraft::MenuItem(MenuItemDraft {
                label: "Home".to_string(),
                url: "/".to_string(),
            }),
            EntryDraft::MenuItem(MenuItemDraft {
                label: "Tours".to_string(),
                url: "/tours".to_string(),
            }),
            EntryDraft::MenuItem(MenuItemDraft {
                label: "Contact".to_string(),
                url: "/contact".to_string(),
            }),
        ]);

        let doc = doc.reorder_entry(CollectionKey::MenuItems, 2, 0);
        let labels: Vec<&str> = doc.menu.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Contact", "Home", "Tours"]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let (doc, _) = doc_with_faq_item();
        let unchanged = doc.clone().reorder_entry(CollectionKey::FaqItems, 0, 9);
        assert_eq!(unchanged, doc);
    }

    #[test]
    fn test_extend_collection_preserves_input_order() {
        let doc = Document::default().extend_collection(vec![
            EntryDraft::GalleryImage(GalleryImageDraft {
                url: "https://a.com/1.jpg".to_string(),
                caption: String::new(),
            }),
            EntryDraft::GalleryImage(GalleryImageDraft {
                url: "https://a.com/2.jpg".to_string(),
                caption: String::new(),
            }),
        ]);
        let urls: Vec<&str> = doc.gallery.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["https://a.com/1.jpg", "https://a.com/2.jpg"]);
    }

    #[test]
    fn test_extend_with_empty_batch_is_inert() {
        let (doc, _) = doc_with_faq_item();
        let unchanged = doc.clone().extend_collection(Vec::new());
        assert_eq!(unchanged, doc);
    }

    #[test]
    fn test_draft_from_value_is_typed_by_key() {
        let draft = EntryDraft::from_value(
            CollectionKey::TeamMembers,
            json!({"name": "Ana", "role": "Guide"}),
        )
        .unwrap();
        assert_eq!(draft.key(), CollectionKey::TeamMembers);

        let (doc, _) = Document::default().add_entry(draft);
        assert_eq!(doc.team.members.entries()[0].name, "Ana");
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(
            "gallery.images".parse::<CollectionKey>().unwrap(),
            CollectionKey::GalleryImages
        );
        assert_eq!("seo".parse::<SectionKey>().unwrap(), SectionKey::Seo);

        let err = "gallery".parse::<CollectionKey>().unwrap_err();
        assert!(err.to_string().contains("gallery.images"));
    }

    #[test]
    fn test_collection_key_section() {
        assert_eq!(CollectionKey::SocialPosts.section(), SectionKey::Social);
        assert_eq!(CollectionKey::FaqItems.section(), SectionKey::Faq);
    }
}
