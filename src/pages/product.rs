use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::components::site_link::SiteLink;
use crate::config;
use crate::content::{ProductFeature, GET_STARTED_LINK, INTEGRATIONS, PRODUCT_FEATURES};

#[derive(Properties, PartialEq)]
struct FeatureRowProps {
    index: usize,
}

/// Feature rows alternate text/visual sides and reveal one by one.
#[function_component(FeatureRow)]
fn feature_row(props: &FeatureRowProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), config::SECTION_REVEAL_MARGIN);
    let feature: &ProductFeature = &PRODUCT_FEATURES[props.index];
    let flipped = props.index % 2 == 1;

    html! {
        <div ref={node} class={classes!("feature-row", flipped.then_some("flipped"), reveal_classes(revealed))}>
            <div class="feature-copy">
                <div class="feature-badge">
                    <IconView icon={feature.icon} />
                </div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>
                <ul class="benefits">
                    { for feature.benefits.iter().map(|benefit| html! {
                        <li>
                            <span class="benefit-dot"><span></span></span>
                            <span>{*benefit}</span>
                        </li>
                    }) }
                </ul>
            </div>
            <div class="feature-visual">
                <div class="visual-frame">
                    <IconView icon={feature.icon} class="visual-icon" />
                </div>
            </div>
        </div>
    }
}

#[function_component(Product)]
pub fn product() -> Html {
    let intro_ref = use_node_ref();
    let intro_revealed = use_reveal_once(intro_ref.clone(), config::SECTION_REVEAL_MARGIN);
    let integrations_ref = use_node_ref();
    let integrations_revealed = use_reveal_once(integrations_ref.clone(), "0px");
    let closing_ref = use_node_ref();
    let closing_revealed = use_reveal_once(closing_ref.clone(), "0px");

    html! {
        <div class="page">
            <Header />
            <main class="page-main">
                <section class="page-hero">
                    <div class="container-narrow">
                        <span class="eyebrow animate-fade-up">{"Product"}</span>
                        <h1 class="animate-fade-up" style="animation-delay: 100ms;">
                            {"The complete AI platform for "}
                            <span class="text-gradient">{"paid advertising"}</span>
                        </h1>
                        <p class="animate-fade-up" style="animation-delay: 200ms;">
                            {"Ryze connects to your ad accounts, analyzes performance in real-time, and automatically makes optimizations that improve your results."}
                        </p>
                        <div class="hero-actions animate-fade-up" style="animation-delay: 300ms;">
                            <SiteLink href={GET_STARTED_LINK.href} classes="btn-primary group">
                                {"Start Free Trial"}
                                <IconView icon={Icon::ArrowRight} class="nudge" />
                            </SiteLink>
                            <SiteLink href="/pricing" classes="text-link">{"View Pricing"}</SiteLink>
                        </div>
                    </div>
                </section>

                <section class="section-padding bg-muted-band" ref={intro_ref}>
                    <div class="container-narrow">
                        <div class={classes!("section-heading", reveal_classes(intro_revealed))}>
                            <h2>{"Powerful features, zero complexity"}</h2>
                            <p>{"Everything you need to run world-class ad campaigns, powered by AI."}</p>
                        </div>
                        <div class="feature-rows">
                            { for (0..PRODUCT_FEATURES.len()).map(|index| html! {
                                <FeatureRow {index} />
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section-padding">
                    <div class="container-narrow integrations" ref={integrations_ref}>
                        <div class={classes!("section-heading", reveal_classes(integrations_revealed))}>
                            <span class="eyebrow">{"Integrations"}</span>
                            <h2>{"Connect all your ad platforms"}</h2>
                            <p>{"Ryze integrates with all major advertising platforms in minutes."}</p>
                        </div>
                        <div class="integration-grid">
                            { for INTEGRATIONS.iter().enumerate().map(|(i, platform)| html! {
                                <div
                                    class={classes!("integration", "card", reveal_classes(integrations_revealed))}
                                    style={stagger(0, 50, i)}
                                >
                                    <p>{*platform}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section-padding bg-muted-band">
                    <div class={classes!("container-narrow", "closing", reveal_classes(closing_revealed))} ref={closing_ref}>
                        <h2>{"Ready to transform your ad performance?"}</h2>
                        <p>{"Join thousands of marketing teams using Ryze to drive better results."}</p>
                        <SiteLink href={GET_STARTED_LINK.href} classes="btn-primary group">
                            {"Start Free Trial"}
                            <IconView icon={Icon::ArrowRight} class="nudge" />
                        </SiteLink>
                    </div>
                </section>
            </main>
            <Footer />

            <style>
                {r#"
                .page-main { padding-top: 8rem; }

                .page-hero {
                    padding-bottom: 4rem;
                    text-align: center;
                }

                .page-hero .animate-fade-up { opacity: 0; }

                .page-hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    max-width: 56rem;
                    margin: 0 auto 1.5rem;
                }

                .page-hero p {
                    font-size: 1.125rem;
                    color: hsl(var(--muted-foreground));
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }

                .hero-actions {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .text-link {
                    padding: 1rem 2rem;
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .text-link:hover { color: hsl(var(--foreground)); }

                .feature-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }

                .feature-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .feature-row.reveal { transform: translateY(60px); }
                .feature-row.reveal.is-visible { transform: none; }

                .feature-row.flipped .feature-copy { order: 2; }
                .feature-row.flipped .feature-visual { order: 1; }

                .feature-badge {
                    width: 3.5rem;
                    height: 3.5rem;
                    margin-bottom: 1.5rem;
                    border-radius: var(--radius-2xl);
                    background: hsl(var(--primary) / 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }

                .feature-copy h3 {
                    font-size: clamp(1.5rem, 3vw, 1.875rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .feature-copy > p {
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: hsl(var(--muted-foreground));
                    margin: 0 0 1.5rem;
                }

                .benefits {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .benefits li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .benefit-dot {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary) / 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .benefit-dot span {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary));
                }

                .visual-frame {
                    padding: 2rem;
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    border-radius: var(--radius-3xl);
                    transition: transform 0.3s ease;
                }

                .visual-frame:hover { transform: scale(1.02); }

                .visual-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    aspect-ratio: 16 / 9;
                    border-radius: var(--radius-2xl);
                    background: hsl(var(--secondary) / 0.5);
                    font-size: 4rem;
                    opacity: 0.3;
                }

                .integrations { text-align: center; }

                .integration-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .integration {
                    padding: 1.5rem;
                    border-radius: var(--radius-xl);
                }

                .integration.is-visible:hover { transform: translateY(-4px); }
                .integration p { margin: 0; font-weight: 500; }

                .closing { text-align: center; }

                .closing h2 {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .closing p {
                    font-size: 1.125rem;
                    color: hsl(var(--muted-foreground));
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }

                @media (max-width: 1024px) {
                    .feature-row { grid-template-columns: 1fr; }
                    .feature-row.flipped .feature-copy, .feature-row.flipped .feature-visual { order: 0; }
                }

                @media (max-width: 640px) {
                    .integration-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </div>
    }
}
