use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page">
            <Header />
            <main class="not-found">
                <div class="container-narrow">
                    <span class="eyebrow">{"404"}</span>
                    <h1>{"This page doesn't exist yet"}</h1>
                    <p>{"The link you followed may be broken, or the page may have moved."}</p>
                    <Link<Route> to={Route::Home} classes="btn-primary">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </main>
            <Footer />

            <style>
                {r#"
                .not-found {
                    padding: 12rem 0 8rem;
                    text-align: center;
                }

                .not-found h1 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .not-found p {
                    color: hsl(var(--muted-foreground));
                    margin: 0 0 2rem;
                }
                "#}
            </style>
        </div>
    }
}
