//! Navbar Component
//!
//! Desktop: brand, anchor links, CTA in one row.
//! Mobile: brand and a menu toggle; the links open in a dropdown that
//! closes on toggle, on link activation, or on a click outside it.

use demorph_core::content::{CtaData, NavLink};
use demorph_core::{Disclosure, DisclosureEvent};
use demorph_ui::{ButtonLink, Icon, IconKind};
use dioxus::prelude::*;

use crate::components::Brand;
use crate::context::use_translator;

const LINK_CLASS: &str = "font-montserrat text-sm text-white/80 hover:text-white transition-colors";

#[component]
pub fn Navbar() -> Element {
    let t = use_translator();
    let mut menu = use_signal(Disclosure::new);

    let links: Vec<NavLink> = t.records("navbar.links");
    let cta: Option<CtaData> = t.record("navbar.cta");

    let open = menu.read().is_open();
    let toggle_label = if open {
        t.t("navbar.menu_close")
    } else {
        t.t("navbar.menu_open")
    };

    rsx! {
        nav { class: "absolute inset-x-0 top-0 z-50 mx-auto flex w-full items-center justify-between px-4 py-5 md:px-8 lg:w-[80vw]",
            a {
                href: "#hero",
                onclick: move |_| {
                    menu.write().apply(DisclosureEvent::LinkActivated);
                },
                Brand {}
            }

            // Desktop links
            ul { class: "hidden items-center gap-8 md:flex",
                for link in links.iter() {
                    li { key: "{link.href}",
                        a { class: LINK_CLASS, href: "{link.href}", "{link.label}" }
                    }
                }
            }

            if let Some(cta) = &cta {
                ButtonLink { href: cta.href.clone(), class: "hidden md:inline-flex".to_string(), "{cta.label}" }
            }

            // Mobile toggle
            button {
                class: "rounded-xl bg-black p-2 text-white md:hidden focus:outline-none focus:ring-2 focus:ring-gray-500",
                r#type: "button",
                "aria-label": "{toggle_label}",
                "aria-expanded": open,
                "aria-controls": "mobile-menu",
                onclick: move |_| {
                    menu.write().apply(DisclosureEvent::Toggle);
                },
                if open {
                    Icon { kind: IconKind::Close, size: 20 }
                } else {
                    Icon { kind: IconKind::Menu, size: 20 }
                }
            }

            if open {
                // Backdrop, under the nav's own controls
                div {
                    class: "fixed inset-0 -z-10 md:hidden",
                    onclick: move |_| {
                        menu.write().apply(DisclosureEvent::BackdropActivated);
                    },
                }

                div {
                    id: "mobile-menu",
                    class: "absolute inset-x-4 top-20 z-50 flex flex-col gap-4 rounded-lg bg-foreground p-5 shadow-lg md:hidden",
                    for link in links.iter() {
                        a {
                            key: "{link.href}",
                            class: LINK_CLASS,
                            href: "{link.href}",
                            onclick: move |_| {
                                menu.write().apply(DisclosureEvent::LinkActivated);
                            },
                            "{link.label}"
                        }
                    }
                    if let Some(cta) = &cta {
                        ButtonLink {
                            href: cta.href.clone(),
                            class: "w-full".to_string(),
                            onclick: move |_| {
                                menu.write().apply(DisclosureEvent::LinkActivated);
                            },
                            "{cta.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;

    use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
    use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

    use super::*;
    use crate::context::test_translator;

    fn navbar_page() -> Element {
        use_context_provider(test_translator);
        rsx! { Navbar {} }
    }

    fn click_listeners(mutations: &Mutations) -> Vec<ElementId> {
        mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Click `id`, re-render, and return the click listeners the render added.
    fn click(dom: &mut VirtualDom, id: ElementId) -> Vec<ElementId> {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        dom.runtime().handle_event("click", event, id);
        click_listeners(&dom.render_immediate_to_vec())
    }

    fn menu_open(dom: &VirtualDom) -> bool {
        dioxus_ssr::render(dom).contains("id=\"mobile-menu\"")
    }

    #[test]
    fn menu_opens_from_toggle_and_closes_from_every_revealed_control() {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(navbar_page);
        let initial = click_listeners(&dom.rebuild_to_vec());
        assert!(!menu_open(&dom), "menu starts hidden");

        // Brand and desktop CTA leave a hidden menu hidden; the toggle opens it
        let mut toggle = None;
        let mut revealed = Vec::new();
        for id in initial {
            let added = click(&mut dom, id);
            if menu_open(&dom) {
                toggle = Some(id);
                revealed = added;
                break;
            }
            assert!(!menu_open(&dom));
        }
        let toggle = toggle.expect("the menu toggle opens the menu");

        // Backdrop, four links and the CTA
        assert!(revealed.len() >= 6, "revealed {} controls", revealed.len());

        click(&mut dom, toggle);
        assert!(!menu_open(&dom), "second toggle hides the menu");

        for idx in 0.. {
            let revealed = click(&mut dom, toggle);
            assert!(menu_open(&dom));
            let Some(&control) = revealed.get(idx) else {
                break;
            };
            click(&mut dom, control);
            assert!(!menu_open(&dom), "control {idx} left the menu open");
        }
    }
}
