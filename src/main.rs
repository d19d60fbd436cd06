use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod theme;
mod components {
    pub mod animated_number;
    pub mod carousel;
    pub mod footer;
    pub mod header;
    pub mod icon;
    pub mod reveal;
    pub mod site_link;
}
mod home {
    pub mod features;
    pub mod final_cta;
    pub mod hero;
    pub mod how_it_works;
    pub mod metrics;
    pub mod testimonials;
}
mod pages {
    pub mod index;
    pub mod not_found;
    pub mod pricing;
    pub mod product;
}

use pages::{
    index::Index,
    not_found::NotFound,
    pricing::Pricing,
    product::Product,
};
use theme::GlobalStyle;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/product")]
    Product,
    #[at("/pricing")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Index /> }
        },
        Route::Product => {
            info!("Rendering Product page");
            html! { <Product /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyle />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Panics land in the browser console instead of a bare "unreachable"
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
