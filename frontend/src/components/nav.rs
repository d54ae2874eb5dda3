use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::config::{MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS};
use crate::page::{apply_highlight, current_page, current_page_from_window};
use crate::timer::{BrowserScheduler, Debouncer};
use crate::Route;

pub const GLYPH_CLOSED: &str = "☰";
pub const GLYPH_OPEN: &str = "✕";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry { href: "index.html", label: "Home", route: Route::Home },
    NavEntry { href: "about.html", label: "About", route: Route::About },
    NavEntry { href: "services.html", label: "Services", route: Route::Services },
    NavEntry { href: "faq.html", label: "FAQ", route: Route::Faq },
    NavEntry { href: "contact.html", label: "Contact", route: Route::Contact },
];

/// Visibility of the collapsible nav list and the glyph on its toggle.
/// These move together except above the breakpoint, where the list is
/// forced visible and the glyph reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    list_visible: bool,
    glyph_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Toggle,
    /// A nav link was followed.
    Close,
    /// Any click on the page; `inside` when it landed on the toggle or list.
    Click { inside: bool },
    Resize(f64),
}

impl MobileMenu {
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => {
                let visible = !self.list_visible;
                Self { list_visible: visible, glyph_open: visible }
            }
            MenuAction::Close | MenuAction::Click { inside: false } => Self::default(),
            MenuAction::Click { inside: true } => self,
            MenuAction::Resize(width) if width > MOBILE_BREAKPOINT_PX => {
                Self { list_visible: true, glyph_open: false }
            }
            MenuAction::Resize(_) => self,
        }
    }

    pub fn is_list_hidden(&self) -> bool {
        !self.list_visible
    }

    pub fn glyph(&self) -> &'static str {
        if self.glyph_open {
            GLYPH_OPEN
        } else {
            GLYPH_CLOSED
        }
    }
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            debug!("Mobile menu {:?} -> {:?}", action, next);
            Rc::new(next)
        }
    }
}

// None when the element isn't mounted
fn holds(node_ref: &NodeRef, target: &Node) -> Option<bool> {
    node_ref.get().map(|node| node.contains(Some(target)))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let location = use_location();
    let page = location
        .as_ref()
        .map(|l| current_page(l.path()))
        .unwrap_or_else(current_page_from_window);
    let active = apply_highlight(NAV_ENTRIES.iter().map(|e| e.href), &page);

    let menu = use_reducer(MobileMenu::default);
    let toggle_ref = use_node_ref();
    let list_ref = use_node_ref();

    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        let list_ref = list_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if let (Some(on_toggle), Some(on_list)) =
                (holds(&toggle_ref, &target), holds(&list_ref, &target))
            {
                menu.dispatch(MenuAction::Click { inside: on_toggle || on_list });
            }
        });
    }

    {
        let menu = menu.clone();
        let debouncer = use_state(move || {
            Debouncer::new(BrowserScheduler, RESIZE_DEBOUNCE_MS, move || {
                let width = window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|w| w.as_f64());
                if let Some(width) = width {
                    menu.dispatch(MenuAction::Resize(width));
                }
            })
        });
        use_event_with_window("resize", move |_: Event| debouncer.call());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header nav {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                    }
                    .nav-list {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link.active {
                        color: #1d4ed8;
                        font-weight: 600;
                    }
                    .mobile-menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .mobile-menu-toggle { display: block; }
                        .nav-list { flex-direction: column; }
                        .nav-list.hidden { display: none; }
                    }
                "#}
            </style>
            <nav>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"K2 Insurance"}
                </Link<Route>>
                <button
                    ref={toggle_ref}
                    class="mobile-menu-toggle"
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    {menu.glyph()}
                </button>
                <ul ref={list_ref} class={classes!("nav-list", menu.is_list_hidden().then_some("hidden"))}>
                    { for NAV_ENTRIES.iter().zip(active).map(|(entry, is_active)| html! {
                        <li onclick={close_menu.clone()}>
                            <Link<Route> to={entry.route} classes={classes!("nav-link", is_active.then_some("active"))}>
                                {entry.label}
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
            </nav>
        </header>
    }
}
