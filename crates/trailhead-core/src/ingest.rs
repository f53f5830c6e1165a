//! Bulk media ingest
//!
//! Editors paste a block of text with one image URL per line; the ingest
//! filters it down to well-formed URLs, optionally collects a caption per
//! surviving URL, and merges the whole batch into its target collection as
//! a single model update. It is a best-effort convenience tool, not a
//! validating importer: malformed lines are dropped silently and duplicate
//! URLs are allowed, since their captions may legitimately differ.
//!
//! The ingest owns only provisional state. Nothing touches the document
//! until [`MediaIngest::commit`], and both commit and cancel consume the
//! ingest, so a committed or cancelled batch cannot be reused - reopening
//! the workflow means constructing a fresh one.

use crate::document::{CollectionKey, Document, EntryDraft};
use crate::models::{GalleryImageDraft, SocialPostDraft};

/// Split freeform text into candidate URLs
///
/// Lines are trimmed; empty lines and lines that are not absolute
/// HTTP/HTTPS URLs are dropped. Input order is preserved.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.starts_with("http://") || line.starts_with("https://"))
        .map(str::to_string)
        .collect()
}

/// Collections a bulk ingest can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestTarget {
    GalleryImages,
    SocialPosts,
}

impl IngestTarget {
    /// The collection field this target maps to
    pub fn collection(&self) -> CollectionKey {
        match self {
            IngestTarget::GalleryImages => CollectionKey::GalleryImages,
            IngestTarget::SocialPosts => CollectionKey::SocialPosts,
        }
    }

    /// The target for a collection key, if that collection supports ingest
    pub fn from_collection(key: CollectionKey) -> Option<Self> {
        match key {
            CollectionKey::GalleryImages => Some(IngestTarget::GalleryImages),
            CollectionKey::SocialPosts => Some(IngestTarget::SocialPosts),
            _ => None,
        }
    }
}

/// Which input the ingest is currently collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStep {
    /// Waiting for the pasted URL block
    CollectingUrls,
    /// URLs accepted; waiting for per-URL captions
    CollectingCaptions,
}

/// A two-step batch add: collect URLs, optionally collect captions, commit
#[derive(Debug)]
pub struct MediaIngest {
    target: IngestTarget,
    with_captions: bool,
    urls: Vec<String>,
    captions: Vec<String>,
    step: IngestStep,
}

impl MediaIngest {
    pub fn new(target: IngestTarget, with_captions: bool) -> Self {
        Self {
            target,
            with_captions,
            urls: Vec::new(),
            captions: Vec::new(),
            step: IngestStep::CollectingUrls,
        }
    }

    pub fn target(&self) -> IngestTarget {
        self.target
    }

    pub fn step(&self) -> IngestStep {
        self.step
    }

    /// The surviving URLs, in input order
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Accept a block of line-separated URLs
    ///
    /// Returns the number of surviving URLs. In caption mode this advances
    /// to the caption step; otherwise the batch is ready to commit. Calls
    /// made after the caption step has started are no-ops.
    pub fn submit_urls(&mut self, text: &str) -> usize {
        if self.step != IngestStep::CollectingUrls {
            return self.urls.len();
        }

        let parsed = parse_url_lines(text);
        self.captions
            .extend(std::iter::repeat(String::new()).take(parsed.len()));
        self.urls.extend(parsed);

        if self.with_captions {
            self.step = IngestStep::CollectingCaptions;
        }
        self.urls.len()
    }

    /// Supply the caption for the URL at `index`
    ///
    /// Captions default to the empty string, so supplying captions for only
    /// the first few URLs leaves the rest captionless. No-op outside the
    /// caption step or for an out-of-range index.
    pub fn set_caption(&mut self, index: usize, caption: impl Into<String>) {
        if self.step != IngestStep::CollectingCaptions {
            return;
        }
        if let Some(slot) = self.captions.get_mut(index) {
            *slot = caption.into();
        }
    }

    /// Merge the batch into the target collection in one model update
    ///
    /// Entries land at the end of the collection in input order. A batch
    /// with no surviving URLs is inert and returns the document unchanged.
    pub fn commit(self, doc: Document) -> Document {
        if self.urls.is_empty() {
            return doc;
        }

        let drafts: Vec<EntryDraft> = self
            .urls
            .into_iter()
            .zip(self.captions)
            .map(|(url, caption)| match self.target {
                IngestTarget::GalleryImages => {
                    EntryDraft::GalleryImage(GalleryImageDraft { url, caption })
                }
                IngestTarget::SocialPosts => {
                    let link = doc.social.post_link(&url);
                    EntryDraft::SocialPost(SocialPostDraft {
                        image_url: url,
                        link,
                        caption,
                    })
                }
            })
            .collect();

        doc.extend_collection(drafts)
    }

    /// Discard all pending input without touching any document
    ///
    /// Equivalent to dropping the ingest.
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED_INPUT: &str = "https://a.com/1.jpg\nnot-a-url\n\n  https://a.com/2.jpg  \nftp://a.com/3.jpg\nhttp://a.com/4.jpg";

    #[test]
    fn test_parse_keeps_only_http_urls_in_order() {
        let urls = parse_url_lines(MIXED_INPUT);
        assert_eq!(
            urls,
            [
                "https://a.com/1.jpg",
                "https://a.com/2.jpg",
                "http://a.com/4.jpg"
            ]
        );
    }

    #[test]
    fn test_parse_allows_duplicates() {
        let urls = parse_url_lines("https://a.com/1.jpg\nhttps://a.com/1.jpg");
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_commit_without_captions() {
        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, false);
        let count = ingest.submit_urls("https://a.com/1.jpg\nnot-a-url\nhttps://a.com/2.jpg");
        assert_eq!(count, 2);
        assert_eq!(ingest.step(), IngestStep::CollectingUrls);

        let doc = ingest.commit(Document::default());
        let images = doc.gallery.images.entries();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url, "https://a.com/1.jpg");
        assert_eq!(images[1].url, "https://a.com/2.jpg");
        assert!(images[0].caption.is_empty());
        assert_ne!(images[0].id, images[1].id);
    }

    #[test]
    fn test_captions_supplied_for_prefix_leave_rest_empty() {
        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, true);
        ingest.submit_urls("https://a.com/1.jpg\nhttps://a.com/2.jpg\nhttps://a.com/3.jpg");
        assert_eq!(ingest.step(), IngestStep::CollectingCaptions);

        ingest.set_caption(0, "Leaving camp");

        let doc = ingest.commit(Document::default());
        let captions: Vec<&str> = doc
            .gallery
            .images
            .iter()
            .map(|i| i.caption.as_str())
            .collect();
        assert_eq!(captions, ["Leaving camp", "", ""]);
    }

    #[test]
    fn test_set_caption_out_of_range_is_noop() {
        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, true);
        ingest.submit_urls("https://a.com/1.jpg");
        ingest.set_caption(5, "nope");

        let doc = ingest.commit(Document::default());
        assert!(doc.gallery.images.entries()[0].caption.is_empty());
    }

    #[test]
    fn test_set_caption_ignored_when_captions_off() {
        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, false);
        ingest.submit_urls("https://a.com/1.jpg");
        ingest.set_caption(0, "nope");

        let doc = ingest.commit(Document::default());
        assert!(doc.gallery.images.entries()[0].caption.is_empty());
    }

    #[test]
    fn test_submit_after_caption_step_is_noop() {
        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, true);
        ingest.submit_urls("https://a.com/1.jpg");
        let count = ingest.submit_urls("https://a.com/2.jpg");
        assert_eq!(count, 1);
        assert_eq!(ingest.urls(), ["https://a.com/1.jpg"]);
    }

    #[test]
    fn test_cancel_leaves_document_untouched() {
        let (doc, _) = Document::default().add_entry(EntryDraft::GalleryImage(
            GalleryImageDraft {
                url: "https://a.com/existing.jpg".to_string(),
                caption: String::new(),
            },
        ));
        let before = doc.clone();

        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, true);
        ingest.submit_urls("https://a.com/1.jpg\nhttps://a.com/2.jpg");
        ingest.set_caption(0, "pending");
        ingest.cancel();

        assert_eq!(doc, before);
    }

    #[test]
    fn test_commit_with_zero_urls_is_inert() {
        let mut ingest = MediaIngest::new(IngestTarget::GalleryImages, false);
        ingest.submit_urls("not-a-url\nalso not a url");
        assert!(ingest.is_empty());

        let before = Document::default();
        let after = ingest.commit(before.clone());
        assert_eq!(after, before);
    }

    #[test]
    fn test_social_commit_derives_link_from_handle() {
        let doc = Document::default().merge_section(crate::document::SectionPatch::Social(
            crate::sections::SocialSectionPatch {
                handle: Some("@saddlesouth".to_string()),
                ..Default::default()
            },
        ));

        let mut ingest = MediaIngest::new(IngestTarget::SocialPosts, false);
        ingest.submit_urls("https://cdn.example.com/p1.jpg");
        let doc = ingest.commit(doc);

        let posts = doc.social.posts.entries();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].image_url, "https://cdn.example.com/p1.jpg");
        assert_eq!(posts[0].link, "https://www.instagram.com/saddlesouth/");
    }

    #[test]
    fn test_target_mapping() {
        assert_eq!(
            IngestTarget::from_collection(CollectionKey::GalleryImages),
            Some(IngestTarget::GalleryImages)
        );
        assert_eq!(IngestTarget::from_collection(CollectionKey::FaqItems), None);
        assert_eq!(
            IngestTarget::SocialPosts.collection(),
            CollectionKey::SocialPosts
        );
    }
}
