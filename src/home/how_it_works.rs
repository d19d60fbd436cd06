use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::config;
use crate::content::STEPS;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), config::SECTION_REVEAL_MARGIN);

    html! {
        <section class="section-padding bg-muted-band">
            <div class="container-narrow" ref={container}>
                <div class={classes!("section-heading", reveal_classes(revealed))}>
                    <span class="eyebrow">{"How It Works"}</span>
                    <h2>{"Three steps to better ads"}</h2>
                    <p>{"Set up in minutes, see results in hours. No learning curve, no manual work."}</p>
                </div>

                <div class="steps">
                    <div class={classes!("steps-line", revealed.then_some("drawn"))}></div>
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class={classes!("step", reveal_classes(revealed))} style={stagger(200, 150, i)}>
                            <div class="step-icon-wrap">
                                <div class="step-icon">
                                    <IconView icon={step.icon} />
                                </div>
                                <span class="step-number">{i + 1}</span>
                            </div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .steps {
                    position: relative;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .steps-line {
                    position: absolute;
                    top: 2.5rem;
                    left: 16%;
                    right: 16%;
                    height: 2px;
                    background: linear-gradient(to right, hsl(var(--primary) / 0.2), hsl(var(--primary) / 0.5), hsl(var(--primary) / 0.2));
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 1s ease-out 0.5s;
                }

                .steps-line.drawn { transform: scaleX(1); }

                .step {
                    position: relative;
                    text-align: center;
                }

                .step-icon-wrap {
                    position: relative;
                    display: inline-block;
                    margin-bottom: 1.5rem;
                }

                .step-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: var(--radius-2xl);
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    box-shadow: var(--shadow-card);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .step:hover .step-icon {
                    transform: translateY(-4px);
                    box-shadow: var(--shadow-glow);
                }

                .step-number {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                    font-size: 0.875rem;
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .step h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }

                .step p {
                    color: hsl(var(--muted-foreground));
                    line-height: 1.6;
                    max-width: 20rem;
                    margin: 0 auto;
                }

                @media (max-width: 768px) {
                    .steps { grid-template-columns: 1fr; gap: 3rem; }
                    .steps-line { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
