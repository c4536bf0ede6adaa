use dioxus::prelude::*;

use crate::app_state::use_app_state;
use crate::site::SiteInfo;
use crate::Route;

/// The navigation bar shared by every route.
///
/// Always offers the way back home. While an example is open (the shared
/// slot holds a descriptor with a non-empty title) it also offers that
/// example's external link, labeled with the site owner's name rather
/// than the example's title. Pure read-and-branch; this component never
/// writes the slot.
#[component]
pub fn Header() -> Element {
    let state = use_app_state();
    let current = state.current_example();
    let site = SiteInfo::from_env();

    rsx! {
        header {
            nav {
                ul {
                    li {
                        Link { to: Route::Home {}, "Home" }
                    }
                    if !current.is_empty() {
                        li {
                            // A missing url surfaces as a dead link, which
                            // is an authoring mistake, not a runtime error.
                            a {
                                href: current.url.clone().unwrap_or_default(),
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{site.author}"
                            }
                        }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
