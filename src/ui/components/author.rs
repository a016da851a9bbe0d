// src/ui/components/author.rs - author byline with the share toggle control

use dioxus::prelude::*;

use crate::model::Product;
use crate::ui::components::icons::ShareIcon;

/// Visual treatment of the circular share control.
///
/// Only two treatments exist, so they are a closed enumeration resolved
/// to class names here; no free-form class string crosses the component
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareButtonStyle {
    /// Neutral control on the light byline.
    Light,
    /// Inverted control on the dark share panel.
    Dark,
}

impl ShareButtonStyle {
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "share-toggle share-toggle-light",
            Self::Dark => "share-toggle share-toggle-dark",
        }
    }
}

/// Avatar, name and date for the product's author, plus the circular
/// control that asks the parent to toggle the view.
#[component]
pub fn AuthorByline(product: Product, on_click: Callback<()>, style: ShareButtonStyle) -> Element {
    rsx! {
        div { class: "author-byline",
            img {
                class: "author-avatar",
                src: "{product.author.image.src}",
                alt: "Profile picture of {product.author.name}",
                width: "{product.author.image.width}",
                height: "{product.author.image.height}",
            }
            div { class: "author-meta",
                p { class: "author-name", "{product.author.name}" }
                p { class: "author-date", "{product.author.date}" }
            }
            button {
                r#type: "button",
                class: style.class(),
                onclick: move |_| on_click.call(()),
                span { class: "sr-only", "Toggle sharing options" }
                ShareIcon {}
            }
        }
    }
}
