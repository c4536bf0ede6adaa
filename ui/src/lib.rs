// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod catalog;
mod components;
mod screens;
mod site;

pub use app_state::use_app_state;
pub use app_state::AppState;
pub use catalog::ExampleDescriptor;

use components::header::Header;
use screens::art_shelf::ArtShelf;
use screens::home::Home;

/// The internal routes of the portfolio. Every route is wrapped in the
/// [`Header`] layout, which renders the navigation bar above the active
/// screen.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Header)]
        #[route("/")]
        Home {},
        #[route("/examples/art-shelf")]
        ArtShelf {},
}

/// Root component of the shell. Owns the shared example slot for the
/// lifetime of the session and mounts the router below it.
#[allow(non_snake_case)]
pub fn App() -> Element {
    // Screens and the header only ever hold the handle, never the slot.
    AppState::provide();

    rsx! {
        document::Link { rel: "icon", href: "/favicon.ico" }
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use dioxus_core::NoOpMutations;
    use dioxus_history::History;
    use dioxus_history::MemoryHistory;

    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct ShellProps {
        path: String,
        seed: Option<ExampleDescriptor>,
    }

    /// Test root: pins the router to `path`, optionally seeds the shared
    /// slot with a leftover descriptor before any screen mounts, and
    /// exposes the live title through a probe element after the router.
    #[component]
    fn Shell(props: ShellProps) -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path(props.path.clone())) as Rc<dyn History>
        });

        let mut state = AppState::provide();
        let seed = props.seed.clone();
        use_hook(move || {
            if let Some(stale) = seed {
                state.set_current_example(stale);
            }
        });

        let current = state.current_example();
        rsx! {
            Router::<Route> {}
            span { id: "probe", "{current.title}" }
        }
    }

    /// Mounts the route tree at `path` and returns the rendered html.
    ///
    /// Writes performed while screens mount dirty the header's scope, so
    /// the dom is flushed once before rendering, mirroring the flush the
    /// framework performs before paint.
    fn render_at(path: &str, seed: Option<ExampleDescriptor>) -> String {
        let mut dom = VirtualDom::new_with_props(
            Shell,
            ShellProps {
                path: path.to_string(),
                seed,
            },
        );
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    fn header_html(html: &str) -> &str {
        let end = html.find("</header>").expect("header should render");
        &html[..end]
    }

    fn probe_title(html: &str) -> &str {
        let open = r#"<span id="probe">"#;
        let start = html.find(open).expect("probe should render") + open.len();
        let end = html[start..].find("</span>").expect("probe should close") + start;
        &html[start..end]
    }

    fn leftover() -> ExampleDescriptor {
        ExampleDescriptor {
            title: "left over".into(),
            description: "descriptor from a previously viewed example".into(),
            path: "/examples/left-over".into(),
            url: Some("https://example.com/left-over".into()),
        }
    }

    #[test]
    fn home_renders_a_single_header_link() {
        let html = render_at("/", None);
        let header = header_html(&html);
        assert_eq!(header.matches("<a ").count(), 1);
        assert!(header.contains("Home"));
        assert_eq!(probe_title(&html), "");
    }

    #[test]
    fn home_mount_clears_a_leftover_descriptor() {
        let html = render_at("/", Some(leftover()));
        assert_eq!(probe_title(&html), "");
        assert_eq!(header_html(&html).matches("<a ").count(), 1);
    }

    #[test]
    fn art_shelf_registers_itself_and_unlocks_the_owner_link() {
        let html = render_at("/examples/art-shelf", None);
        let header = header_html(&html);
        assert_eq!(header.matches("<a ").count(), 2);
        assert!(header.contains(r#"href="https://www.instagram.com/mariamzahw/""#));
        assert!(header.contains("Mariam Zahw"));
        assert_eq!(probe_title(&html), "إلي أصدقائي");
    }

    #[test]
    fn owner_link_opens_a_new_browsing_context() {
        let html = render_at("/examples/art-shelf", None);
        assert!(header_html(&html).contains(r#"target="_blank""#));
    }

    #[test]
    fn home_lists_every_catalog_entry_in_order() {
        let html = render_at("/", None);
        assert_eq!(
            html.matches(r#"class="card""#).count(),
            catalog::examples().len()
        );

        let mut previous = 0;
        for example in catalog::examples() {
            let at = html[previous..]
                .find(&example.title)
                .expect("every catalog entry should be shown")
                + previous;
            previous = at;
        }
    }
}
