//! Head metadata management: SEO meta tags, canonical link and JSON-LD.
//!
//! A [`HeadManager`] only ever removes elements it created itself. Elements
//! that were already in the head are updated in place and left behind on
//! [`HeadManager::unmount`] with whatever value was written last.

use crate::document::{Document, ElementHandle, Tag};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::{oneshot, watch, Mutex};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetaTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
    pub og_type: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub canonical: Option<String>,
}

/// JSON-LD object tagged with `@context` and `@type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl StructuredData {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            context: "https://schema.org".to_string(),
            kind: kind.into(),
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.properties.insert(key.to_string(), value);
        self
    }
}

/// Id of the script element holding the structured data item at `index`.
pub fn structured_data_id(index: usize) -> String {
    format!("structured-data-{}", index)
}

/// First non-empty candidate.
fn first_of<'a>(candidates: &[Option<&'a str>]) -> &'a str {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Owns the head elements it creates for one page or component.
#[derive(Debug, Default)]
pub struct HeadManager {
    owned: Vec<ElementHandle>,
}

impl HeadManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements created by this manager that have not been unmounted yet.
    pub fn owned(&self) -> &[ElementHandle] {
        &self.owned
    }

    /// Applies `tags` and, when given, the structured data items.
    pub fn mount(
        &mut self,
        doc: &mut Document,
        tags: &SeoMetaTags,
        structured_data: Option<&[StructuredData]>,
    ) {
        self.apply(doc, tags);
        if let Some(items) = structured_data {
            self.set_structured_data(doc, items);
        }
    }

    /// Writes every non-empty field of `tags` into the head.
    pub fn apply(&mut self, doc: &mut Document, tags: &SeoMetaTags) {
        let title = tags.title.as_deref();
        let description = tags.description.as_deref();
        let og_title = tags.og_title.as_deref();
        let og_description = tags.og_description.as_deref();
        let og_image = tags.og_image.as_deref();

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            doc.set_title(title);
        }

        self.set_meta_tag(doc, "description", first_of(&[description]), false);
        self.set_meta_tag(doc, "keywords", first_of(&[tags.keywords.as_deref()]), false);

        self.set_meta_tag(doc, "og:title", first_of(&[og_title, title]), true);
        self.set_meta_tag(
            doc,
            "og:description",
            first_of(&[og_description, description]),
            true,
        );
        self.set_meta_tag(doc, "og:image", first_of(&[og_image]), true);
        let location = doc.location().to_string();
        self.set_meta_tag(
            doc,
            "og:url",
            first_of(&[tags.og_url.as_deref(), Some(location.as_str())]),
            true,
        );
        self.set_meta_tag(
            doc,
            "og:type",
            first_of(&[tags.og_type.as_deref(), Some("website")]),
            true,
        );

        self.set_meta_tag(
            doc,
            "twitter:card",
            first_of(&[tags.twitter_card.as_deref(), Some("summary_large_image")]),
            false,
        );
        self.set_meta_tag(
            doc,
            "twitter:title",
            first_of(&[tags.twitter_title.as_deref(), og_title, title]),
            false,
        );
        self.set_meta_tag(
            doc,
            "twitter:description",
            first_of(&[tags.twitter_description.as_deref(), og_description, description]),
            false,
        );
        self.set_meta_tag(
            doc,
            "twitter:image",
            first_of(&[tags.twitter_image.as_deref(), og_image]),
            false,
        );

        if let Some(canonical) = tags.canonical.as_deref() {
            self.set_link_tag(doc, "canonical", canonical);
        }
    }

    /// Writes item `i` into `script#structured-data-i`.
    pub fn set_structured_data(&mut self, doc: &mut Document, items: &[StructuredData]) {
        for (index, item) in items.iter().enumerate() {
            let id = structured_data_id(index);
            let script = match doc.element_by_id(&id) {
                Some(existing) => existing,
                None => {
                    let created = doc.create_element(Tag::Script);
                    doc.set_attribute(created, "id", &id);
                    doc.set_attribute(created, "type", "application/ld+json");
                    self.owned.push(created);
                    created
                }
            };

            match serde_json::to_string(item) {
                Ok(json) => {
                    doc.set_text(script, &json);
                }
                Err(e) => tracing::warn!("Failed to serialize structured data {}: {}", id, e),
            }
        }
    }

    /// Applies the current value of `source`, then re-applies on every change.
    ///
    /// Firing `shutdown` (or dropping its sender) tears the head down: every
    /// element this manager created is removed before the future resolves,
    /// even while `source` is still open. If `source` closes first the tags
    /// stay in place and the manager is handed back for a later `unmount`.
    pub async fn subscribe(
        mut self,
        doc: Arc<Mutex<Document>>,
        mut source: watch::Receiver<SeoMetaTags>,
        mut shutdown: oneshot::Receiver<()>,
    ) -> Self {
        let initial = source.borrow_and_update().clone();
        self.apply(&mut *doc.lock().await, &initial);

        loop {
            tokio::select! {
                changed = source.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let tags = source.borrow_and_update().clone();
                    tracing::debug!("Metadata changed, re-applying head tags");
                    self.apply(&mut *doc.lock().await, &tags);
                }
                _ = &mut shutdown => {
                    tracing::debug!("Head subscription shut down, removing {} owned tags", self.owned.len());
                    self.unmount(&mut *doc.lock().await);
                    break;
                }
            }
        }

        self
    }

    /// Removes every element this manager created.
    pub fn unmount(&mut self, doc: &mut Document) {
        for handle in self.owned.drain(..) {
            doc.remove(handle);
        }
    }

    fn set_meta_tag(&mut self, doc: &mut Document, name: &str, content: &str, property: bool) {
        if content.is_empty() {
            return;
        }

        let attr = if property { "property" } else { "name" };
        let element = self.find_or_create(doc, Tag::Meta, attr, name);
        doc.set_attribute(element, "content", content);
    }

    fn set_link_tag(&mut self, doc: &mut Document, rel: &str, href: &str) {
        if href.is_empty() {
            return;
        }

        let element = self.find_or_create(doc, Tag::Link, "rel", rel);
        doc.set_attribute(element, "href", href);
    }

    fn find_or_create(
        &mut self,
        doc: &mut Document,
        tag: Tag,
        attr: &str,
        value: &str,
    ) -> ElementHandle {
        if let Some(existing) = doc.query(tag, attr, value) {
            return existing;
        }

        let created = doc.create_element(tag);
        doc.set_attribute(created, attr, value);
        self.owned.push(created);
        created
    }
}
