// src/model.rs - the product record handed to the card

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque image handle. The dimensions ride along as layout hints and
/// are never validated here; resolving `src` is the embedder's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Byline data. `date` is a pre-formatted display string and is shown
/// verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub image: ImageRef,
    pub name: String,
    pub date: String,
}

/// One entry in the share row. `name` only feeds the icon's
/// alternative text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialIcon {
    pub icon: ImageRef,
    pub name: String,
}

/// The immutable payload describing one shareable item.
///
/// Constructed by the caller and passed down read-only; the components
/// never mutate, validate or default any field. `social_icons` may be
/// empty and is rendered in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_image: ImageRef,
    pub title: String,
    pub text: String,
    pub author: Author,
    pub social_icons: Vec<SocialIcon>,
}

static STARTUP_PRODUCT: OnceCell<Product> = OnceCell::new();

/// Hands the launcher-loaded payload to the root component. May only be
/// called once, before launch.
pub fn set_startup_product(product: Product) -> Result<()> {
    STARTUP_PRODUCT
        .set(product)
        .map_err(|_| crate::error::Error::Config {
            message: "startup product was already set".to_string(),
        })
}

/// The record the root component renders: the injected payload, or the
/// built-in sample when the launcher did not provide one (the web build
/// always takes this path).
pub fn startup_product() -> Product {
    STARTUP_PRODUCT.get().cloned().unwrap_or_else(|| {
        tracing::debug!("no startup product injected, rendering the sample");
        sample_product()
    })
}

/// Reads a product payload from a JSON file.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_product(path: &std::path::Path) -> Result<Product> {
    let raw = std::fs::read_to_string(path).map_err(|source| crate::error::Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(serde_json::from_str(&raw)?)
}

/// Built-in demo payload.
pub fn sample_product() -> Product {
    Product {
        product_image: ImageRef {
            src: "images/product-drawers.svg".to_string(),
            width: 280,
            height: 280,
        },
        title: "Shift the overall look and feel".to_string(),
        text: "Put the focus back on your content and remove the visual clutter around it."
            .to_string(),
        author: Author {
            image: ImageRef {
                src: "images/avatar-jonathan.svg".to_string(),
                width: 40,
                height: 40,
            },
            name: "Jonathan Walters".to_string(),
            date: "22 Jun 2022".to_string(),
        },
        social_icons: vec![
            SocialIcon {
                icon: ImageRef {
                    src: "images/icon-facebook.svg".to_string(),
                    width: 20,
                    height: 20,
                },
                name: "facebook".to_string(),
            },
            SocialIcon {
                icon: ImageRef {
                    src: "images/icon-twitter.svg".to_string(),
                    width: 20,
                    height: 20,
                },
                name: "twitter".to_string(),
            },
            SocialIcon {
                icon: ImageRef {
                    src: "images/icon-pinterest.svg".to_string(),
                    width: 20,
                    height: 20,
                },
                name: "pinterest".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_icons_keep_insertion_order() {
        let product = sample_product();
        let names: Vec<&str> = product
            .social_icons
            .iter()
            .map(|icon| icon.name.as_str())
            .collect();
        assert_eq!(names, ["facebook", "twitter", "pinterest"]);
    }

    #[test]
    fn payload_parses_field_exact() {
        let raw = r#"{
            "product_image": { "src": "images/item.svg", "width": 280, "height": 280 },
            "title": "Shift the overall look and feel",
            "text": "Put the focus back on your content.",
            "author": {
                "image": { "src": "images/avatar.svg", "width": 40, "height": 40 },
                "name": "Jonathan Walters",
                "date": "22 Jun 2022"
            },
            "social_icons": []
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.title, "Shift the overall look and feel");
        assert_eq!(product.author.name, "Jonathan Walters");
        assert_eq!(product.author.date, "22 Jun 2022");
        assert!(product.social_icons.is_empty());
    }

    #[test]
    fn missing_fields_are_rejected() {
        // No defaulting: a payload without an author is not a Product.
        let raw = r#"{ "title": "x", "text": "y", "social_icons": [] }"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }

    #[test]
    fn load_product_reports_missing_file() {
        let err = load_product(std::path::Path::new("no/such/payload.json")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io { .. }));
    }

    #[test]
    fn load_product_reads_a_payload_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("product.json");
        std::fs::write(&path, serde_json::to_string(&sample_product()).unwrap()).unwrap();

        let product = load_product(&path).unwrap();
        assert_eq!(product, sample_product());
    }

    #[test]
    fn startup_product_falls_back_to_sample() {
        // No test in this binary injects a payload, so the fallback is
        // what startup_product returns.
        assert_eq!(startup_product(), sample_product());
    }
}
