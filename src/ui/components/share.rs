// src/ui/components/share.rs - share panel in its wide and narrow layouts

use dioxus::prelude::*;

use crate::model::Product;
use crate::ui::components::author::{AuthorByline, ShareButtonStyle};
use crate::ui::components::icons::ShareIcon;

/// Social share panel.
///
/// Both layout variants are always in the tree; the stylesheet's 768px
/// breakpoint decides which one is presented, so the accessibility tree
/// of each exists at every viewport width. Icons render in payload
/// order and the list may be empty.
#[component]
pub fn ShareBar(product: Product, on_click: Callback<()>) -> Element {
    rsx! {
        div { class: "share-bar",
            // Wide viewports: floating strip above the inverted byline.
            div { class: "share-bar-wide",
                div { class: "share-strip",
                    span { class: "share-label", "SHARE" }
                    for icon in product.social_icons.iter() {
                        img {
                            class: "share-icon",
                            src: "{icon.icon.src}",
                            alt: "Icon for {icon.name}",
                            width: "{icon.icon.width}",
                            height: "{icon.icon.height}",
                        }
                    }
                }
                AuthorByline {
                    product: product.clone(),
                    style: ShareButtonStyle::Dark,
                    on_click: move |_| on_click.call(()),
                }
            }
            // Narrow viewports: one horizontal bar with a trailing control.
            div { class: "share-bar-narrow",
                span { class: "share-label", "SHARE" }
                for icon in product.social_icons.iter() {
                    img {
                        class: "share-icon",
                        src: "{icon.icon.src}",
                        alt: "Icon for {icon.name}",
                        width: "{icon.icon.width}",
                        height: "{icon.icon.height}",
                    }
                }
                button {
                    r#type: "button",
                    class: ShareButtonStyle::Dark.class(),
                    onclick: move |_| on_click.call(()),
                    span { class: "sr-only", "Show author" }
                    ShareIcon {}
                }
            }
        }
    }
}
