use dioxus::prelude::*;

use crate::app_state::use_app_state;
use crate::catalog;
use crate::catalog::ExampleDescriptor;
use crate::site::SiteInfo;

/// Landing page: the site masthead plus the catalog of examples.
#[component]
pub fn Home() -> Element {
    let mut state = use_app_state();

    // Being on the home page means no example is open. Keyed to the mount
    // lifecycle, not the render cycle: the slot is cleared once per
    // display, never on a re-render.
    use_hook(move || state.set_current_example(ExampleDescriptor::default()));

    let site = SiteInfo::from_env();

    rsx! {
        document::Title { "{site.window_title}" }
        document::Meta { name: "description", content: "{site.description}" }

        section { class: "wrapper",
            h1 { class: "title", "{site.heading}" }
            p { class: "byline",
                "By "
                a {
                    href: "{site.author_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{site.author_handle}"
                }
            }
            ExampleGrid { examples: catalog::examples() }
        }
    }
}

/// The catalog grid. Cards appear in declaration order; an empty catalog
/// renders an empty grid.
#[component]
fn ExampleGrid(examples: Vec<ExampleDescriptor>) -> Element {
    rsx! {
        div { class: "grid",
            for example in examples {
                Link {
                    key: "{example.path}",
                    to: example.path.clone(),
                    class: "card",
                    h2 { "{example.title}" }
                    p { "{example.description}" }
                }
            }
        }
    }
}
