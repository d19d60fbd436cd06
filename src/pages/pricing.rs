use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::components::site_link::SiteLink;
use crate::config;
use crate::content::{format_price, FaqEntry, PricingPlan, CONTACT_HREF, GET_STARTED_LINK, PLANS, PRICING_FAQ};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    index: usize,
    revealed: bool,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan: &PricingPlan = &PLANS[props.index];

    html! {
        <div
            class={classes!("plan", plan.popular.then_some("plan-popular"), reveal_classes(props.revealed))}
            style={stagger(0, 100, props.index)}
        >
            if plan.popular {
                <div class="plan-badge">{"Most Popular"}</div>
            }
            <div class="plan-body">
                <h3>{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>

                <div class="plan-price">
                    <span class="price">{format_price(plan.price)}</span>
                    <span class="period">{plan.period}</span>
                </div>

                <SiteLink
                    href={GET_STARTED_LINK.href}
                    classes={classes!("plan-cta", if plan.popular { "plan-cta-primary" } else { "plan-cta-muted" })}
                >
                    {plan.cta}
                </SiteLink>

                <ul class="plan-features">
                    { for plan.features.iter().map(|feature| html! {
                        <li>
                            <IconView icon={Icon::Check} class="tone-primary" />
                            <span>{*feature}</span>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
}

/// Each FAQ card reveals on its own as it scrolls in.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), "0px");
    let faq: &FaqEntry = &PRICING_FAQ[props.index];

    html! {
        <div ref={node} class={classes!("faq-item", reveal_classes(revealed))} style={stagger(0, 100, props.index)}>
            <h3>{faq.question}</h3>
            <p>{faq.answer}</p>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let plans_ref = use_node_ref();
    let plans_revealed = use_reveal_once(plans_ref.clone(), config::SECTION_REVEAL_MARGIN);
    let closing_ref = use_node_ref();
    let closing_revealed = use_reveal_once(closing_ref.clone(), "0px");

    html! {
        <div class="page">
            <Header />
            <main class="page-main">
                <section class="page-hero">
                    <div class="container-narrow">
                        <span class="eyebrow animate-fade-up">{"Pricing"}</span>
                        <h1 class="animate-fade-up" style="animation-delay: 100ms;">{"Simple, transparent pricing"}</h1>
                        <p class="animate-fade-up" style="animation-delay: 200ms;">
                            {"Choose the plan that fits your ad spend. All plans include a 14-day free trial."}
                        </p>
                    </div>
                </section>

                <section class="section-padding plans-section" ref={plans_ref}>
                    <div class="container-narrow">
                        <div class="plans-grid">
                            { for (0..PLANS.len()).map(|index| html! {
                                <PlanCard {index} revealed={plans_revealed} />
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section-padding bg-muted-band">
                    <div class="container-narrow">
                        <div class="section-heading faq-heading">
                            <h2>{"Frequently asked questions"}</h2>
                        </div>
                        <div class="faq-list">
                            { for (0..PRICING_FAQ.len()).map(|index| html! {
                                <FaqItem {index} />
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section-padding">
                    <div class={classes!("container-narrow", "closing", reveal_classes(closing_revealed))} ref={closing_ref}>
                        <h2>{"Still have questions?"}</h2>
                        <p>{"Our team is here to help you find the right plan for your needs."}</p>
                        <SiteLink href={CONTACT_HREF} classes="btn-dark group">
                            {"Contact Sales"}
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
                    margin: 0 0 1.5rem;
                }

                .page-hero p {
                    font-size: 1.125rem;
                    color: hsl(var(--muted-foreground));
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .plans-section { padding-top: 2rem; }

                .plans-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    align-items: start;
                }

                .plan { position: relative; }
                .plan.is-visible:hover { transform: translateY(-8px); }
                .plan-popular { margin-top: -1rem; }

                .plan-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: nowrap;
                }

                .plan-body {
                    height: 100%;
                    padding: 2rem;
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    border-radius: var(--radius-2xl);
                    transition: border-color 0.5s ease, box-shadow 0.5s ease;
                }

                .plan:not(.plan-popular) .plan-body:hover {
                    border-color: hsl(var(--primary) / 0.3);
                    box-shadow: var(--shadow-card-hover);
                }

                .plan-popular .plan-body {
                    border-color: hsl(var(--primary));
                    box-shadow: var(--shadow-glow);
                }

                .plan-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }

                .plan-description {
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                    margin: 0 0 1.5rem;
                }

                .plan-price { margin-bottom: 2rem; }
                .price { font-size: 2.25rem; font-weight: 700; }
                .period { color: hsl(var(--muted-foreground)); }

                .plan-cta {
                    display: block;
                    padding: 0.75rem 1.5rem;
                    border-radius: var(--radius-xl);
                    text-align: center;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .plan-cta:hover { transform: scale(1.02); }

                .plan-cta-primary {
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                }

                .plan-cta-primary:hover { box-shadow: var(--shadow-glow); }

                .plan-cta-muted {
                    background: hsl(var(--secondary));
                    color: hsl(var(--foreground));
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 2rem 0 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .plan-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                }

                .faq-heading { margin-bottom: 3rem; }

                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .faq-item {
                    padding: 1.5rem;
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    border-radius: var(--radius-xl);
                }

                .faq-item h3 { margin: 0 0 0.5rem; font-weight: 600; font-size: 1rem; }
                .faq-item p { margin: 0; color: hsl(var(--muted-foreground)); }

                .closing { text-align: center; }

                .closing h2 {
                    font-size: clamp(1.5rem, 3vw, 1.875rem);
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .closing p {
                    color: hsl(var(--muted-foreground));
                    margin: 0 0 2rem;
                }

                .btn-dark {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: var(--radius-xl);
                    background: hsl(var(--foreground));
                    color: hsl(var(--background));
                    font-weight: 500;
                    text-decoration: none;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .btn-dark:hover { background: hsl(var(--foreground) / 0.9); transform: scale(1.02); }

                @media (max-width: 768px) {
                    .plans-grid { grid-template-columns: 1fr; }
                    .plan-popular { margin-top: 1rem; }
                }
                "#}
            </style>
        </div>
    }
}
