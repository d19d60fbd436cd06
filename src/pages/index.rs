use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::home::{
    features::Features, final_cta::FinalCta, hero::Hero, how_it_works::HowItWorks,
    metrics::Metrics, testimonials::Testimonials,
};

#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <HowItWorks />
                <Features />
                <Metrics />
                <Testimonials />
                <FinalCta />
            </main>
            <Footer />
        </div>
    }
}
