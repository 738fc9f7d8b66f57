/// Property-based tests using proptest
/// Invariants of the head manager that should hold for all metadata inputs
use proptest::prelude::*;
use site_support::document::{Document, Tag};
use site_support::seo::{HeadManager, SeoMetaTags};

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 <>&\"]{0,20}")
}

prop_compose! {
    fn meta_tags()(
        title in field(),
        description in field(),
        keywords in field(),
        og_title in field(),
        og_description in field(),
        og_image in field(),
        twitter_title in field(),
        canonical in field(),
    ) -> SeoMetaTags {
        SeoMetaTags {
            title,
            description,
            keywords,
            og_title,
            og_description,
            og_image,
            twitter_title,
            canonical,
            ..Default::default()
        }
    }
}

fn snapshot(doc: &Document) -> Vec<(Tag, Vec<Option<String>>)> {
    doc.head()
        .iter()
        .map(|el| {
            let attrs = ["name", "property", "rel", "content", "href"]
                .iter()
                .map(|a| el.attribute(a).map(str::to_string))
                .collect();
            (el.tag(), attrs)
        })
        .collect()
}

proptest! {
    #[test]
    fn reapplying_same_tags_is_idempotent(tags in meta_tags()) {
        let mut doc = Document::new("https://accessdevops.com/");
        let mut manager = HeadManager::new();

        manager.apply(&mut doc, &tags);
        let first = snapshot(&doc);
        let owned = manager.owned().len();

        manager.apply(&mut doc, &tags);
        prop_assert_eq!(snapshot(&doc), first);
        prop_assert_eq!(manager.owned().len(), owned);
    }

    #[test]
    fn each_key_has_at_most_one_element(first in meta_tags(), second in meta_tags()) {
        let mut doc = Document::new("https://accessdevops.com/");
        let mut manager = HeadManager::new();

        manager.apply(&mut doc, &first);
        manager.apply(&mut doc, &second);

        let mut keys: Vec<String> = doc
            .head()
            .iter()
            .map(|el| {
                el.attribute("name")
                    .or_else(|| el.attribute("property"))
                    .or_else(|| el.attribute("rel"))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }

    #[test]
    fn unmount_leaves_an_empty_head(first in meta_tags(), second in meta_tags()) {
        let mut doc = Document::new("https://accessdevops.com/");
        let mut manager = HeadManager::new();

        manager.apply(&mut doc, &first);
        manager.apply(&mut doc, &second);
        manager.unmount(&mut doc);

        prop_assert!(doc.head().is_empty());
        prop_assert!(manager.owned().is_empty());
    }

    #[test]
    fn rendering_never_leaks_raw_markup(tags in meta_tags()) {
        let mut doc = Document::new("https://accessdevops.com/");
        HeadManager::new().apply(&mut doc, &tags);

        let html = doc.render_head();
        // Every '<' in the output opens or closes one of our own tags.
        for (idx, _) in html.match_indices('<') {
            let rest = &html[idx..];
            prop_assert!(
                rest.starts_with("<title>")
                    || rest.starts_with("</title>")
                    || rest.starts_with("<meta ")
                    || rest.starts_with("<link ")
            );
        }
    }
}
