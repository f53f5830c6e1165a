//! Homepage sections
//!
//! The settings document is a fixed set of named sections rather than a
//! string-keyed map, so a typo'd section name is a compile error instead of
//! a silent miss. Every section has an `enabled` toggle and a display
//! `title`; some carry extra scalars, most carry a collection field.
//!
//! Every field has a serde default, so a document persisted before a section
//! existed materializes with that section filled in from its static default.
//! Persisted values always win over defaults.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::models::{FaqItem, GalleryImage, MenuItem, SocialPost, TeamMember, Testimonial};

/// Landing banner at the top of the homepage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    /// Background image URL
    pub image: String,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: String::new(),
            subtitle: String::new(),
            image: String::new(),
        }
    }
}

/// Partial update for [`HeroSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
}

impl HeroSection {
    pub fn merge(&mut self, patch: HeroPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

/// Frequently-asked-questions accordion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqSection {
    pub enabled: bool,
    pub title: String,
    pub items: Collection<FaqItem>,
}

impl Default for FaqSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Frequently asked questions".to_string(),
            items: Collection::new(),
        }
    }
}

/// Partial update for [`FaqSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqSectionPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
}

impl FaqSection {
    pub fn merge(&mut self, patch: FaqSectionPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Guides and staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSection {
    pub enabled: bool,
    pub title: String,
    pub members: Collection<TeamMember>,
}

impl Default for TeamSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Meet the team".to_string(),
            members: Collection::new(),
        }
    }
}

/// Partial update for [`TeamSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamSectionPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
}

impl TeamSection {
    pub fn merge(&mut self, patch: TeamSectionPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Photo gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    pub enabled: bool,
    pub title: String,
    pub images: Collection<GalleryImage>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "From the road".to_string(),
            images: Collection::new(),
        }
    }
}

/// Partial update for [`GallerySection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GallerySectionPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
}

impl GallerySection {
    pub fn merge(&mut self, patch: GallerySectionPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Rider testimonials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSection {
    pub enabled: bool,
    pub title: String,
    pub entries: Collection<Testimonial>,
}

impl Default for TestimonialsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "What riders say".to_string(),
            entries: Collection::new(),
        }
    }
}

/// Partial update for [`TestimonialsSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialsSectionPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
}

impl TestimonialsSection {
    pub fn merge(&mut self, patch: TestimonialsSectionPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Site navigation menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSection {
    pub enabled: bool,
    pub title: String,
    pub items: Collection<MenuItem>,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Main menu".to_string(),
            items: Collection::new(),
        }
    }
}

/// Partial update for [`MenuSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuSectionPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
}

impl MenuSection {
    pub fn merge(&mut self, patch: MenuSectionPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Social feed strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSection {
    pub enabled: bool,
    pub title: String,
    /// Account handle the feed belongs to, with or without a leading '@'
    pub handle: String,
    pub posts: Collection<SocialPost>,
}

impl Default for SocialSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Follow along".to_string(),
            handle: String::new(),
            posts: Collection::new(),
        }
    }
}

/// Partial update for [`SocialSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialSectionPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub handle: Option<String>,
}

impl SocialSection {
    pub fn merge(&mut self, patch: SocialSectionPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(handle) = patch.handle {
            self.handle = handle;
        }
    }

    /// Outbound link for a feed image
    ///
    /// Points at the configured profile page when a handle is set, otherwise
    /// falls back to the image itself.
    pub fn post_link(&self, image_url: &str) -> String {
        let handle = self.handle.trim().trim_start_matches('@');
        if handle.is_empty() {
            image_url.to_string()
        } else {
            format!("https://www.instagram.com/{}/", handle)
        }
    }
}

/// Search-engine metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSection {
    pub enabled: bool,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
}

impl Default for SeoSection {
    fn default() -> Self {
        Self {
            enabled: true,
            title: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
        }
    }
}

/// Partial update for [`SeoSection`] scalars
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl SeoSection {
    pub fn merge(&mut self, patch: SeoPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(meta_title) = patch.meta_title {
            self.meta_title = meta_title;
        }
        if let Some(meta_description) = patch.meta_description {
            self.meta_description = meta_description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default_to_enabled_with_empty_collections() {
        let faq = FaqSection::default();
        assert!(faq.enabled);
        assert_eq!(faq.title, "Frequently asked questions");
        assert!(faq.items.is_empty());

        let social = SocialSection::default();
        assert!(social.enabled);
        assert!(social.handle.is_empty());
        assert!(social.posts.is_empty());
    }

    #[test]
    fn test_missing_fields_materialize_from_defaults() {
        // a document written before the gallery had a title
        let section: GallerySection = serde_json::from_value(serde_json::json!({
            "enabled": false
        }))
        .unwrap();
        assert!(!section.enabled);
        assert_eq!(section.title, "From the road");
        assert!(section.images.is_empty());
    }

    #[test]
    fn test_persisted_values_win_over_defaults() {
        let section: TeamSection = serde_json::from_value(serde_json::json!({
            "title": "The crew"
        }))
        .unwrap();
        assert_eq!(section.title, "The crew");
        assert!(section.enabled);
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let mut section = FaqSection::default();
        section.merge(FaqSectionPatch {
            enabled: Some(false),
            title: None,
        });
        assert!(!section.enabled);
        assert_eq!(section.title, "Frequently asked questions");
    }

    #[test]
    fn test_post_link_uses_handle_when_set() {
        let mut social = SocialSection::default();
        assert_eq!(
            social.post_link("https://cdn.example.com/p.jpg"),
            "https://cdn.example.com/p.jpg"
        );

        social.handle = "@saddlesouth".to_string();
        assert_eq!(
            social.post_link("https://cdn.example.com/p.jpg"),
            "https://www.instagram.com/saddlesouth/"
        );

        social.handle = "saddlesouth".to_string();
        assert_eq!(
            social.post_link("https://cdn.example.com/p.jpg"),
            "https://www.instagram.com/saddlesouth/"
        );
    }

    #[test]
    fn test_section_serialization_round_trip() {
        let mut seo = SeoSection::default();
        seo.meta_title = "Saddle South | Patagonia by bike".to_string();
        let json = serde_json::to_string(&seo).unwrap();
        let parsed: SeoSection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seo);
    }
}
