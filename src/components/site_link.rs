use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// The routed page an href points at, if this app renders it.
pub fn route_for(href: &str) -> Option<Route> {
    if !href.starts_with('/') {
        return None;
    }
    match Route::recognize(href) {
        Some(Route::NotFound) | None => None,
        route => route,
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Router link for pages we serve, plain anchor for everything else
/// (signup, contact, docs, ...) so the host handles them.
#[function_component(SiteLink)]
pub fn site_link(props: &SiteLinkProps) -> Html {
    let onclick = props.onclick.clone().unwrap_or_default();
    match route_for(&props.href) {
        Some(route) => html! {
            <span class="site-link-wrap" {onclick}>
                <Link<Route> to={route} classes={props.classes.clone()}>
                    {props.children.clone()}
                </Link<Route>>
            </span>
        },
        None if props.href.starts_with("http") => html! {
            <a
                href={props.href.clone()}
                class={props.classes.clone()}
                target="_blank"
                rel="noopener noreferrer"
                {onclick}
            >
                {props.children.clone()}
            </a>
        },
        None => html! {
            <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
                {props.children.clone()}
            </a>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn served_pages_resolve_to_routes() {
        assert!(matches!(route_for("/"), Some(Route::Home)));
        assert!(matches!(route_for("/product"), Some(Route::Product)));
        assert!(matches!(route_for("/pricing"), Some(Route::Pricing)));
    }

    #[test]
    fn everything_else_stays_an_anchor() {
        assert!(route_for("/get-started").is_none());
        assert!(route_for("/blog").is_none());
        assert!(route_for("/404").is_none());
        assert!(route_for("https://github.com").is_none());
    }
}
