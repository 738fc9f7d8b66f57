//! JSON-LD schemas describing the site for search engines.

use crate::config::Config;
use crate::seo::StructuredData;
use serde_json::{json, Value};

const CONTACT_EMAIL: &str = "contact@accessdevops.com";

fn provider(config: &Config) -> Value {
    json!({
        "@type": "Organization",
        "name": config.site_name,
    })
}

fn offer_catalog(name: &str, features: &[&str]) -> Value {
    let offers: Vec<Value> = features
        .iter()
        .map(|feature| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": feature,
                },
            })
        })
        .collect();

    json!({
        "@type": "OfferCatalog",
        "name": name,
        "itemListElement": offers,
    })
}

pub fn organization_schema(config: &Config) -> StructuredData {
    let addresses: Vec<Value> = [
        ("FR", "France"),
        ("ES", "Spain"),
        ("CA", "Canada"),
        ("CO", "Colombia"),
        ("JP", "Japan"),
    ]
    .iter()
    .map(|(country, locality)| {
        json!({
            "@type": "PostalAddress",
            "addressCountry": country,
            "addressLocality": locality,
        })
    })
    .collect();

    StructuredData::new("Organization")
        .with("name", json!(config.site_name))
        .with("url", json!(config.site_url))
        .with("logo", json!(format!("{}/logo.png", config.site_url)))
        .with(
            "description",
            json!("DevOps & Infrastructure Success as a Service. Complete infrastructure management with 167+ active customers, 1,084+ managed servers, and 3,412+ major deployments."),
        )
        .with("email", json!(CONTACT_EMAIL))
        .with("telephone", json!("+33-XXX-XXX-XXX"))
        .with("foundingDate", json!("2015"))
        .with(
            "numberOfEmployees",
            json!({"@type": "QuantitativeValue", "value": "50-100"}),
        )
        .with("address", Value::Array(addresses))
        .with(
            "areaServed",
            json!(["Europe", "North America", "South America", "Asia"]),
        )
        .with("sameAs", json!([]))
        .with(
            "contactPoint",
            json!({
                "@type": "ContactPoint",
                "contactType": "Customer Support",
                "email": CONTACT_EMAIL,
                "availableLanguage": ["English", "French", "Spanish", "Japanese"],
                "areaServed": "Worldwide",
            }),
        )
}

pub fn website_schema(config: &Config) -> StructuredData {
    StructuredData::new("WebSite")
        .with("name", json!(config.site_name))
        .with("url", json!(config.site_url))
        .with(
            "description",
            json!("DevOps & Infrastructure Success as a Service"),
        )
        .with("publisher", provider(config))
        .with(
            "potentialAction",
            json!({
                "@type": "SearchAction",
                "target": format!("{}/?s={{search_term_string}}", config.site_url),
                "query-input": "required name=search_term_string",
            }),
        )
}

/// "We Do It": fully managed infrastructure.
pub fn wdi_service_schema(config: &Config) -> StructuredData {
    StructuredData::new("Service")
        .with("name", json!("WDI - We Do It"))
        .with(
            "description",
            json!("Complete infrastructure management. We handle hosting, security, and deployments while you focus on your business."),
        )
        .with("provider", provider(config))
        .with("serviceType", json!("Infrastructure Management"))
        .with("areaServed", json!("Worldwide"))
        .with(
            "hasOfferCatalog",
            offer_catalog(
                "WDI Service Features",
                &[
                    "Full hosting management",
                    "Enterprise-grade security",
                    "Automated deployments",
                    "24/7 support included",
                ],
            ),
        )
}

/// "We Integrate with You": embedded team with knowledge transfer.
pub fn wiu_service_schema(config: &Config) -> StructuredData {
    StructuredData::new("Service")
        .with("name", json!("WIU - We Integrate with You"))
        .with(
            "description",
            json!("Our experts become an extension of your engineering team. We manage your infrastructure while providing mentorship and knowledge transfer."),
        )
        .with("provider", provider(config))
        .with(
            "serviceType",
            json!("DevOps Consulting & Infrastructure Management"),
        )
        .with("areaServed", json!("Worldwide"))
        .with(
            "hasOfferCatalog",
            offer_catalog(
                "WIU Service Features",
                &[
                    "Dedicated infrastructure team",
                    "Knowledge transfer & training",
                    "Scalable management",
                    "Mentorship included",
                ],
            ),
        )
}

pub fn faq_schema() -> StructuredData {
    let questions: Vec<Value> = [
        (
            "Which cloud provider do you use?",
            "We primarily use Google Cloud Platform (GCP) as our main infrastructure partner. We have maintained an 8+ year partnership with Google Cloud, giving us access to cutting-edge infrastructure at competitive pricing. We also work with other cloud providers based on specific client needs.",
        ),
        (
            "Where will my data be hosted?",
            "Your data can be hosted in any of the Google Cloud regions worldwide. We have a global presence with offices in France, Spain, Canada, Colombia, and Japan, and can deploy your infrastructure in the region that best suits your compliance requirements and performance needs. We support deployments across Europe, Americas, and Asia.",
        ),
        (
            "What technology stack do you support?",
            "We support a wide range of technologies including Google Cloud Platform, Docker containers, GitLab, GitHub, Jenkins for CI/CD, Ubuntu and Debian Linux distributions, OpenVPN for secure networking, and various automation tools. Our team has expertise in modern DevOps practices and can adapt to your specific technology requirements.",
        ),
    ]
    .iter()
    .map(|(question, answer)| {
        json!({
            "@type": "Question",
            "name": question,
            "acceptedAnswer": {
                "@type": "Answer",
                "text": answer,
            },
        })
    })
    .collect();

    StructuredData::new("FAQPage").with("mainEntity", Value::Array(questions))
}

/// Every schema rendered on the home page, in head order. Names and URLs
/// come from `config` so the JSON-LD matches the canonical link.
pub fn all_structured_data(config: &Config) -> Vec<StructuredData> {
    vec![
        organization_schema(config),
        website_schema(config),
        wdi_service_schema(config),
        wiu_service_schema(config),
        faq_schema(),
    ]
}
