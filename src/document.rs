//! In-memory model of a page's document head.
//!
//! Elements are addressed by [`ElementHandle`]s that stay valid until the
//! element is removed. Handles are never reused within one document.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(u64);

/// Head element kinds managed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Meta,
    Link,
    Script,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Meta => "meta",
            Tag::Link => "link",
            Tag::Script => "script",
        }
    }

    fn is_void(self) -> bool {
        !matches!(self, Tag::Script)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    handle: ElementHandle,
    tag: Tag,
    // Insertion order is kept so rendering is stable.
    attributes: Vec<(String, String)>,
    text: String,
}

impl Element {
    pub fn handle(&self) -> ElementHandle {
        self.handle
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    title: String,
    location: String,
    head: Vec<Element>,
    next_handle: u64,
}

impl Document {
    /// Empty document for the page at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// URL of the page this document belongs to.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn head(&self) -> &[Element] {
        &self.head
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        self.head.iter().find(|el| el.handle == handle)
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.element(handle).is_some()
    }

    /// First `tag[attr="value"]` in the head.
    pub fn query(&self, tag: Tag, attr: &str, value: &str) -> Option<ElementHandle> {
        self.head
            .iter()
            .find(|el| el.tag == tag && el.attribute(attr) == Some(value))
            .map(|el| el.handle)
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.head
            .iter()
            .find(|el| el.attribute("id") == Some(id))
            .map(|el| el.handle)
    }

    /// Creates a new element and appends it to the head.
    pub fn create_element(&mut self, tag: Tag) -> ElementHandle {
        self.next_handle += 1;
        let handle = ElementHandle(self.next_handle);
        self.head.push(Element {
            handle,
            tag,
            attributes: Vec::new(),
            text: String::new(),
        });
        handle
    }

    /// Returns `false` when the element is no longer in the head.
    pub fn set_attribute(&mut self, handle: ElementHandle, name: &str, value: &str) -> bool {
        match self.element_mut(handle) {
            Some(el) => {
                el.set_attribute(name, value);
                true
            }
            None => false,
        }
    }

    pub fn attribute(&self, handle: ElementHandle, name: &str) -> Option<&str> {
        self.element(handle).and_then(|el| el.attribute(name))
    }

    pub fn set_text(&mut self, handle: ElementHandle, text: &str) -> bool {
        match self.element_mut(handle) {
            Some(el) => {
                el.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, handle: ElementHandle) -> bool {
        let before = self.head.len();
        self.head.retain(|el| el.handle != handle);
        self.head.len() != before
    }

    /// Serializes the title and every head element as HTML.
    pub fn render_head(&self) -> String {
        let mut html = String::new();
        if !self.title.is_empty() {
            let _ = writeln!(html, "<title>{}</title>", escape_text(&self.title));
        }

        for el in &self.head {
            html.push('<');
            html.push_str(el.tag.as_str());
            for (name, value) in &el.attributes {
                let _ = write!(html, " {}=\"{}\"", name, escape_attr(value));
            }
            html.push('>');
            if !el.tag.is_void() {
                // JSON payloads must not be able to close the script element.
                html.push_str(&el.text.replace("</", "<\\/"));
                let _ = write!(html, "</{}>", el.tag.as_str());
            }
            html.push('\n');
        }

        html
    }

    fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut Element> {
        self.head.iter_mut().find(|el| el.handle == handle)
    }
}

pub fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}
