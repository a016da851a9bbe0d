// src/ui/components/product.rs - card root owning the view toggle

use dioxus::prelude::*;

use crate::model::Product;
use crate::ui::components::author::{AuthorByline, ShareButtonStyle};
use crate::ui::components::share::ShareBar;
use crate::ui::state::ShareView;

/// Share-card root.
///
/// Owns the single piece of view state and wires both children's
/// controls to the toggle transition. The header block always renders;
/// the section below it swaps between the byline and the share panel
/// and is announced as a live region.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut view = use_signal(ShareView::default);

    rsx! {
        article { class: "product-card", aria_labelledby: "product-title",
            div { class: "product-card-grid",
                div { class: "product-image-frame",
                    img {
                        class: "product-image",
                        src: "{product.product_image.src}",
                        alt: "{product.title}",
                        width: "{product.product_image.width}",
                        height: "{product.product_image.height}",
                    }
                }
                div { class: "product-card-column",
                    section { class: "product-copy", aria_describedby: "product-info",
                        h1 { id: "product-title", class: "product-title", "{product.title}" }
                        h2 { id: "product-info", class: "product-text", "{product.text}" }
                    }
                    section { aria_live: "polite",
                        if view() == ShareView::AuthorShown {
                            AuthorByline {
                                product: product.clone(),
                                style: ShareButtonStyle::Light,
                                on_click: move |_| {
                                    let next = view().toggled();
                                    view.set(next);
                                },
                            }
                        } else {
                            ShareBar {
                                product: product.clone(),
                                on_click: move |_| {
                                    let next = view().toggled();
                                    view.set(next);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
