use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::config;
use crate::content::FEATURES;

#[function_component(Features)]
pub fn features() -> Html {
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), config::SECTION_REVEAL_MARGIN);

    html! {
        <section class="section-padding" ref={container}>
            <div class="container-narrow">
                <div class={classes!("section-heading", reveal_classes(revealed))}>
                    <span class="eyebrow">{"Features"}</span>
                    <h2>{"Everything you need to scale ads"}</h2>
                    <p>{"Powerful tools that work together to maximize your advertising performance."}</p>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <div class={classes!("feature-card", "card", reveal_classes(revealed))} style={stagger(0, 50, i)}>
                            <div class="feature-icon">
                                <IconView icon={feature.icon} />
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .feature-card {
                    padding: 1.5rem;
                    height: 100%;
                }

                .feature-card:hover { transform: translateY(-4px); }

                .feature-icon {
                    width: 3rem;
                    height: 3rem;
                    margin-bottom: 1rem;
                    border-radius: var(--radius-xl);
                    background: hsl(var(--primary) / 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .feature-card:hover .feature-icon {
                    background: hsl(var(--primary) / 0.2);
                    transform: scale(1.1);
                }

                .feature-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }

                .feature-card p {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: hsl(var(--muted-foreground));
                    margin: 0;
                }

                @media (max-width: 1024px) {
                    .feature-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (max-width: 640px) {
                    .feature-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
