use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::components::site_link::SiteLink;
use crate::config;
use crate::content::{CONTACT_HREF, GET_STARTED_LINK};

const ASSURANCES: &[&str] = &["No credit card required", "14-day free trial", "Cancel anytime"];

#[function_component(FinalCta)]
pub fn final_cta() -> Html {
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), config::SECTION_REVEAL_MARGIN);

    html! {
        <section class="section-padding" ref={container}>
            <div class="container-narrow">
                <div class={classes!("cta-panel", reveal_classes(revealed))}>
                    <div class="cta-orb cta-orb-a"></div>
                    <div class="cta-orb cta-orb-b"></div>

                    <div class="cta-content">
                        <h2 class={reveal_classes(revealed)} style={stagger(200, 0, 0)}>
                            {"Ready to optimize your ads with AI?"}
                        </h2>
                        <p class={classes!("cta-lede", reveal_classes(revealed))} style={stagger(300, 0, 0)}>
                            {"Join thousands of marketing teams using Ryze to drive better results with less effort. Start your free trial today."}
                        </p>

                        <div class={classes!("cta-actions", reveal_classes(revealed))} style={stagger(400, 0, 0)}>
                            <SiteLink
                                href={GET_STARTED_LINK.href}
                                classes={classes!("btn-primary", "group", revealed.then_some("animate-pulse-glow"))}
                            >
                                {"Start Free Trial"}
                                <IconView icon={Icon::ArrowRight} class="nudge" />
                            </SiteLink>
                            <SiteLink href={CONTACT_HREF} classes="cta-secondary">
                                {"Talk to Sales"}
                            </SiteLink>
                        </div>

                        <div class={classes!("cta-assurances", reveal_classes(revealed))} style={stagger(500, 0, 0)}>
                            { for ASSURANCES.iter().map(|line| html! {
                                <span class="assurance">
                                    <IconView icon={Icon::Check} class="tone-green" />
                                    {*line}
                                </span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .cta-panel {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 3rem;
                    border-radius: var(--radius-3xl);
                    background: linear-gradient(to bottom right, hsl(var(--foreground)), hsl(var(--slate-800)));
                    text-align: center;
                }

                .cta-orb {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .cta-orb-a {
                    top: 0; right: 0;
                    width: 24rem; height: 24rem;
                    background: hsl(var(--primary) / 0.2);
                    transform: translate(50%, -50%);
                }

                .cta-orb-b {
                    bottom: 0; left: 0;
                    width: 16rem; height: 16rem;
                    background: hsl(var(--orange-400) / 0.1);
                    transform: translate(-50%, 50%);
                }

                .cta-content { position: relative; z-index: 1; }

                .cta-content h2 {
                    color: #fff;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .cta-lede {
                    color: rgb(255 255 255 / 0.7);
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }

                .cta-actions {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .cta-secondary {
                    padding: 1rem 2rem;
                    color: #fff;
                    border: 1px solid rgb(255 255 255 / 0.2);
                    border-radius: var(--radius-2xl);
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .cta-secondary:hover { background: rgb(255 255 255 / 0.1); }

                .cta-assurances {
                    margin-top: 2.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    color: rgb(255 255 255 / 0.6);
                    font-size: 0.875rem;
                }

                .assurance {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                @media (max-width: 640px) {
                    .cta-panel { padding: 3rem 1.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
