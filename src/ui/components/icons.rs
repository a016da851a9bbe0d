// src/ui/components/icons.rs - inline vector glyphs

use dioxus::prelude::*;

/// Fixed share-arrow glyph used by every toggle control.
#[component]
pub fn ShareIcon() -> Element {
    rsx! {
        svg {
            class: "share-glyph",
            xmlns: "http://www.w3.org/2000/svg",
            width: "15",
            height: "13",
            view_box: "0 0 15 13",
            path {
                fill: "currentColor",
                d: "M15 6.495L8.766.014V3.88H7.441C3.33 3.88 0 7.039 0 10.936v2.049l.589-.612C2.59 10.294 5.422 9.11 8.39 9.11h.375v3.867L15 6.495z",
            }
        }
    }
}
