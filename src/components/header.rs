use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::site_link::{route_for, SiteLink};
use crate::config;
use crate::content::{GET_STARTED_LINK, LOGIN_LINK, NAV_LINKS};
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub is_scrolled: bool,
    pub is_menu_open: bool,
}

impl HeaderState {
    pub fn apply(self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::Scrolled(offset) => Self {
                is_scrolled: offset > config::SCROLL_THRESHOLD_PX,
                ..self
            },
            HeaderAction::ToggleMenu => Self {
                is_menu_open: !self.is_menu_open,
                ..self
            },
            HeaderAction::CloseMenu => Self {
                is_menu_open: false,
                ..self
            },
        }
    }
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let state = use_reducer_eq(HeaderState::default);
    let current = use_route::<Route>();

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_dispatcher = dispatcher.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        scroll_dispatcher.dispatch(HeaderAction::Scrolled(offset));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("Could not attach header scroll listener");
                    }
                    // Page may load already scrolled (anchor, back navigation).
                    dispatcher.dispatch(HeaderAction::Scrolled(window.scroll_y().unwrap_or(0.0)));
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(HeaderAction::ToggleMenu);
        })
    };

    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeaderAction::CloseMenu))
    };

    let is_active = |href: &str| route_for(href).is_some() && route_for(href) == current;

    html! {
        <header class={classes!("site-header", state.is_scrolled.then_some("scrolled"))}>
            <div class="container-narrow">
                <div class="header-bar">
                    <Link<Route> to={Route::Home} classes="brand">
                        <span class="brand-mark">{"R"}</span>
                        <span class="brand-name">{"Ryze"}</span>
                    </Link<Route>>

                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <SiteLink
                                href={link.href}
                                classes={classes!("nav-link", is_active(link.href).then_some("active"))}
                            >
                                {link.name}
                            </SiteLink>
                        }) }
                    </nav>

                    <div class="desktop-cta">
                        <SiteLink href={LOGIN_LINK.href} classes="nav-login">{LOGIN_LINK.name}</SiteLink>
                        <SiteLink href={GET_STARTED_LINK.href} classes="btn-primary btn-small group">
                            {GET_STARTED_LINK.name}
                            <IconView icon={Icon::ArrowRight} class="nudge" />
                        </SiteLink>
                    </div>

                    <button
                        class="burger-menu"
                        aria-label="Toggle navigation"
                        aria-expanded={state.is_menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <IconView icon={if state.is_menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
            </div>

            if state.is_menu_open {
                <div class="mobile-menu">
                    <div class="container-narrow mobile-menu-inner">
                        { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                            <div class="mobile-item" style={format!("animation-delay: {}ms;", i * 100)}>
                                <SiteLink href={link.href} classes="mobile-link" onclick={close_menu.clone()}>
                                    {link.name}
                                </SiteLink>
                            </div>
                        }) }
                        <div class="mobile-cta">
                            <SiteLink href={LOGIN_LINK.href} classes="mobile-login" onclick={close_menu.clone()}>
                                {LOGIN_LINK.name}
                            </SiteLink>
                            <SiteLink href={GET_STARTED_LINK.href} classes="btn-primary" onclick={close_menu.clone()}>
                                {GET_STARTED_LINK.name}
                            </SiteLink>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.5s ease;
                    animation: header-drop 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .site-header.scrolled {
                    background: hsl(var(--background) / 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid hsl(var(--border) / 0.5);
                    box-shadow: 0 1px 2px hsl(220 13% 10% / 0.05);
                }

                @keyframes header-drop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                .header-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                }

                .brand {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .brand:hover { transform: scale(1.02); }

                .brand-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: var(--radius);
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                    font-weight: 700;
                    font-size: 1.125rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .brand-name {
                    font-weight: 600;
                    font-size: 1.25rem;
                    color: hsl(var(--foreground));
                }

                .desktop-nav, .desktop-cta {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }

                .desktop-cta { gap: 0.75rem; }

                .nav-link, .nav-login {
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    border-radius: var(--radius);
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                    transition: color 0.2s ease, background 0.2s ease;
                }

                .nav-link:hover {
                    color: hsl(var(--foreground));
                    background: hsl(var(--secondary) / 0.5);
                }

                .nav-link.active {
                    color: hsl(var(--foreground));
                    background: hsl(var(--secondary));
                }

                .nav-login:hover { color: hsl(var(--foreground)); }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    font-size: 1.5rem;
                    color: hsl(var(--foreground));
                    cursor: pointer;
                }

                .mobile-menu {
                    background: hsl(var(--background));
                    border-bottom: 1px solid hsl(var(--border));
                    overflow: hidden;
                    animation: menu-open 0.3s cubic-bezier(0.22, 1, 0.36, 1);
                }

                @keyframes menu-open {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 600px; }
                }

                .mobile-menu-inner {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    padding-bottom: 1.5rem;
                }

                .mobile-item {
                    opacity: 0;
                    animation: slide-in-left 0.4s ease-out forwards;
                }

                .mobile-link {
                    display: block;
                    padding: 0.5rem 0;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: hsl(var(--foreground));
                    text-decoration: none;
                }

                .mobile-cta {
                    padding-top: 1rem;
                    border-top: 1px solid hsl(var(--border));
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    text-align: center;
                }

                .mobile-login {
                    padding: 0.5rem 0;
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .desktop-nav, .desktop-cta { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_tracks_latest_offset() {
        let state = HeaderState::default();
        assert!(!state.apply(HeaderAction::Scrolled(0.0)).is_scrolled);
        assert!(!state.apply(HeaderAction::Scrolled(20.0)).is_scrolled);
        assert!(state.apply(HeaderAction::Scrolled(20.5)).is_scrolled);

        let back_up = state
            .apply(HeaderAction::Scrolled(400.0))
            .apply(HeaderAction::Scrolled(3.0));
        assert!(!back_up.is_scrolled);
    }

    #[test]
    fn offset_at_mount_sets_scrolled_before_any_event() {
        let mounted = Rc::new(HeaderState::default()).reduce(HeaderAction::Scrolled(640.0));
        assert!(mounted.is_scrolled);
        assert!(!mounted.is_menu_open);

        let again = mounted.clone().reduce(HeaderAction::Scrolled(700.0));
        assert!(Rc::ptr_eq(&mounted, &again));
    }

    #[test]
    fn toggle_flips_menu() {
        let open = HeaderState::default().apply(HeaderAction::ToggleMenu);
        assert!(open.is_menu_open);
        assert!(!open.apply(HeaderAction::ToggleMenu).is_menu_open);
    }

    #[test]
    fn link_activation_closes_menu_once() {
        let open = Rc::new(HeaderState::default().apply(HeaderAction::ToggleMenu));
        let closed = open.reduce(HeaderAction::CloseMenu);
        assert!(!closed.is_menu_open);

        let again = closed.clone().reduce(HeaderAction::CloseMenu);
        assert!(Rc::ptr_eq(&closed, &again));
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let open = HeaderState::default().apply(HeaderAction::ToggleMenu);
        let scrolled = open.apply(HeaderAction::Scrolled(120.0));
        assert!(scrolled.is_menu_open && scrolled.is_scrolled);
    }
}
