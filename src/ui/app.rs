// src/ui/app.rs - application shell around the card

use dioxus::prelude::*;

use crate::model;
use crate::ui::components::ProductCard;
use crate::ui::css;

/// Root component: embeds the stylesheet and centers the card in the
/// viewport. The product record comes from the launcher, or the
/// built-in sample when nothing was injected.
#[component]
pub fn App() -> Element {
    let product = model::startup_product();

    rsx! {
        style { {css::STYLE_SHEET} }
        main { class: "card-viewport",
            ProductCard { product }
        }
    }
}
