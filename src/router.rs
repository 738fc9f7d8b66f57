//! Static route table and navigation scroll behaviour.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
}

pub const HOME: Route = Route {
    path: "/",
    name: "home",
};

pub const ROUTES: &[Route] = &[HOME];

/// Where the viewport goes after navigating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollTarget {
    /// Smooth-scroll to the element matching this selector (`#id`).
    Anchor { selector: String },
    Top,
}

pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Anchor targets scroll to their element; everything else to the top.
///
/// `target` may be a bare hash (`#faq`), a path with a hash (`/#faq`) or an
/// absolute URL.
pub fn scroll_behavior(target: &str) -> ScrollTarget {
    let fragment = match url::Url::parse(target) {
        Ok(url) => url.fragment().map(str::to_string),
        Err(_) => target
            .split_once('#')
            .map(|(_, fragment)| fragment.to_string()),
    };

    match fragment {
        Some(fragment) if !fragment.is_empty() => ScrollTarget::Anchor {
            selector: format!("#{}", fragment),
        },
        _ => ScrollTarget::Top,
    }
}
