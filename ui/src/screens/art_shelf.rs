use dioxus::prelude::*;

use crate::app_state::use_app_state;
use crate::catalog::ExampleDescriptor;

/// Pieces hung in the gallery, in hanging order.
const PIECES: [(&str, &str); 3] = [
    ("Shelves", "acrylic on canvas, 2021"),
    ("Dunes", "oil pastel on paper, 2021"),
    ("Jacaranda", "digital, 2022"),
];

/// The descriptor this screen registers while it is open. The header
/// reads its `url` for the owner link.
pub(crate) fn descriptor() -> ExampleDescriptor {
    ExampleDescriptor {
        title: "إلي أصدقائي".into(),
        description: "3D art gallery".into(),
        path: "/examples/art-shelf".into(),
        url: Some("https://www.instagram.com/mariamzahw/".into()),
    }
}

/// The art gallery example.
///
/// Registers itself as the open example when it mounts; no other
/// component does that on its behalf.
#[component]
pub fn ArtShelf() -> Element {
    let mut state = use_app_state();
    use_hook(move || state.set_current_example(descriptor()));

    let current = descriptor();

    rsx! {
        document::Title { "{current.title}" }

        section { class: "gallery",
            h1 { "{current.title}" }
            p { class: "gallery-note", "{current.description}" }
            div { class: "shelf",
                for (name, medium) in PIECES {
                    figure { key: "{name}",
                        div { class: "frame" }
                        figcaption {
                            strong { "{name}" }
                            span { "{medium}" }
                        }
                    }
                }
            }
        }
    }
}
