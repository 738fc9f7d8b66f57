//! Server-rendered page shells.

use crate::config::Config;
use crate::document::{Document, Tag};
use crate::router::Route;
use crate::seo::{HeadManager, SeoMetaTags};
use crate::structured_data::all_structured_data;

pub fn home_meta_tags(config: &Config) -> SeoMetaTags {
    SeoMetaTags {
        title: Some(format!(
            "{} - DevOps & Infrastructure Success as a Service",
            config.site_name
        )),
        description: Some(
            "Complete infrastructure management: hosting, security and deployments handled by a dedicated DevOps team."
                .to_string(),
        ),
        keywords: Some(
            "DevOps, infrastructure management, Google Cloud, CI/CD, managed hosting".to_string(),
        ),
        og_image: Some(format!("{}/og-image.png", config.site_url)),
        canonical: Some(format!("{}/", config.site_url)),
        ..Default::default()
    }
}

/// Document with the tags every page carries before any manager runs.
pub fn base_document(location: impl Into<String>) -> Document {
    let mut doc = Document::new(location);

    let charset = doc.create_element(Tag::Meta);
    doc.set_attribute(charset, "charset", "UTF-8");
    let viewport = doc.create_element(Tag::Meta);
    doc.set_attribute(viewport, "name", "viewport");
    doc.set_attribute(viewport, "content", "width=device-width, initial-scale=1.0");

    doc
}

/// Renders the full HTML page for `route`, returning it with the final title.
pub fn render_page(config: &Config, route: &Route) -> (String, String) {
    let mut doc = base_document(format!("{}{}", config.site_url, route.path));
    let mut head = HeadManager::new();
    head.mount(
        &mut doc,
        &home_meta_tags(config),
        Some(all_structured_data(config).as_slice()),
    );

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
{head}</head>
<body>
<main id="app" data-route="{route}">
  <section id="services"></section>
  <section id="technologies"></section>
  <section id="faq"></section>
  <section id="booking"></section>
  <section id="contact"></section>
</main>
</body>
</html>
"#,
        head = doc.render_head(),
        route = route.name,
    );

    (html, doc.title().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::HOME;

    #[test]
    fn test_home_renders_head_and_json_ld() {
        let config = Config::default();
        let (html, title) = render_page(&config, &HOME);

        assert!(title.starts_with("AccessDevOps"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains(r#"<meta property="og:url" content="https://accessdevops.com/">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://accessdevops.com/">"#));
        assert!(html.contains(r#"id="structured-data-4""#));
        assert!(!html.contains(r#"id="structured-data-5""#));
    }

    #[test]
    fn test_json_ld_uses_configured_site_url() {
        let config = Config {
            site_url: "https://staging.example.com".to_string(),
            ..Config::default()
        };
        let (html, _) = render_page(&config, &HOME);

        assert!(html.contains(r#"<link rel="canonical" href="https://staging.example.com/">"#));
        assert!(html.contains(r#""url":"https://staging.example.com""#));
        assert!(html.contains(r#""target":"https://staging.example.com/?s={search_term_string}""#));
        assert!(!html.contains("https://accessdevops.com"));
    }
}
