use dioxus::prelude::*;

use crate::context::{get_site_config, get_site_content};
use crate::pages::{ErrorPage, Home, NotFound};
use crate::theme::GLOBAL_STYLES;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Application routes.
///
/// - `/` - Landing page with every section
/// - anything else - Error page
///
/// Both sit under [`RouteBoundary`], so a render failure inside a page
/// also ends on the error page.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RouteBoundary)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the translator context, and routing.
#[component]
pub fn App() -> Element {
    let translator =
        use_context_provider(|| get_site_content().translator(&get_site_config().locale));
    let title = translator.t("meta.title");

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout for every route
#[component]
fn RouteBoundary() -> Element {
    rsx! {
        PageBoundary { Outlet::<Route> {} }
    }
}

/// Renders `children`, or the error page once any of them fails to render.
#[component]
pub fn PageBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| {
                tracing::error!("Page failed to render, showing error page");
                rsx! { ErrorPage {} }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use dioxus::dioxus_core::NoOpMutations;

    use crate::context::test_translator;

    #[component]
    fn BrokenSection() -> Element {
        let year: u32 = "MMXXV".parse()?;
        rsx! { p { "{year}" } }
    }

    #[component]
    fn HealthySection() -> Element {
        rsx! { p { "Two faces. One photo." } }
    }

    fn broken_page() -> Element {
        use_context_provider(test_translator);
        rsx! {
            PageBoundary { BrokenSection {} }
        }
    }

    fn healthy_page() -> Element {
        use_context_provider(test_translator);
        rsx! {
            PageBoundary { HealthySection {} }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn render_failure_shows_error_page() {
        let html = render(broken_page);
        assert!(html.contains("Something went wrong"), "{html}");
        assert!(html.contains("Back to home"), "{html}");
    }

    #[test]
    fn healthy_page_renders_through_boundary() {
        let html = render(healthy_page);
        assert!(html.contains("Two faces. One photo."), "{html}");
        assert!(!html.contains("Something went wrong"), "{html}");
    }

    #[test]
    fn root_is_home() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(Route::Home {}.to_string(), "/");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let route = Route::from_str("/blog/2024/morphing").unwrap();
        match route {
            Route::NotFound { segments } => {
                assert_eq!(segments, vec!["blog", "2024", "morphing"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
