use yew::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::config;
use crate::content::{DECISIONS, HEALTH_BARS, METRICS};

#[function_component(Metrics)]
pub fn metrics() -> Html {
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), config::SECTION_REVEAL_MARGIN);

    html! {
        <section class="section-padding metrics-section" ref={container}>
            <div class="metrics-wash"></div>

            <div class="container-narrow metrics-inner">
                <div class={classes!("section-heading", reveal_classes(revealed))}>
                    <span class="eyebrow">{"Results"}</span>
                    <h2>{"AI-powered results you can measure"}</h2>
                    <p>{"Our customers see measurable improvements within the first week of using Ryze."}</p>
                </div>

                <div class="metric-grid">
                    { for METRICS.iter().enumerate().map(|(i, metric)| html! {
                        <div class={classes!("metric-card", "card", reveal_classes(revealed))} style={stagger(100, 100, i)}>
                            <div class={classes!("metric-value", metric.tone.text_class())}>
                                <AnimatedNumber
                                    value={metric.value}
                                    suffix={metric.suffix}
                                    decimals={metric.decimals()}
                                />
                            </div>
                            <h3>{metric.label}</h3>
                            <p>{metric.description}</p>
                            <div
                                class={classes!("metric-rule", revealed.then_some("drawn"))}
                                style={stagger(400, 100, i)}
                            ></div>
                        </div>
                    }) }
                </div>

                <div class={classes!("decisions-panel", "card", reveal_classes(revealed))} style={stagger(500, 0, 0)}>
                    <div>
                        <h3>{"AI decisions in real-time"}</h3>
                        <p class="decisions-lede">
                            {"Ryze continuously monitors your campaigns and makes intelligent adjustments to maximize performance. Every decision is logged and explained."}
                        </p>
                        <div class="decision-list">
                            { for DECISIONS.iter().enumerate().map(|(i, decision)| html! {
                                <div class={classes!("decision", revealed.then_some("shown"))} style={stagger(700, 100, i)}>
                                    <span class="decision-dot"></span>
                                    <span>{decision.action}</span>
                                    <span class="decision-impact">{decision.impact}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="health-bars">
                        { for HEALTH_BARS.iter().enumerate().map(|(i, bar)| {
                            let width = if revealed { bar.value } else { 0 };
                            html! {
                                <div class="health-bar">
                                    <div class="health-label">
                                        <span>{bar.label}</span>
                                        <span class="health-value">{format!("{}%", bar.value)}</span>
                                    </div>
                                    <div class="health-track">
                                        <div
                                            class={classes!("health-fill", bar.tone.fill_class())}
                                            style={format!("width: {}%; transition-delay: {}ms;", width, 800 + i * 150)}
                                        ></div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .metrics-section {
                    position: relative;
                    overflow: hidden;
                }

                .metrics-wash {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, hsl(var(--background)), hsl(var(--orange-50) / 0.3), hsl(var(--background)));
                    pointer-events: none;
                }

                .metrics-inner { position: relative; }

                .metric-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .metric-card {
                    position: relative;
                    padding: 2rem;
                    text-align: center;
                }

                .metric-value {
                    font-size: clamp(3rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                    animation: count-up 0.4s ease-out;
                }

                .metric-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 0.25rem;
                }

                .metric-card p {
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                    margin: 0;
                }

                .metric-rule {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    width: 4rem;
                    height: 0.25rem;
                    margin-left: -2rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary) / 0.2);
                    transform: scaleX(0);
                    transition: transform 0.6s ease;
                }

                .metric-rule.drawn { transform: scaleX(1); }

                .decisions-panel {
                    margin-top: 4rem;
                    padding: 3rem;
                    border-radius: var(--radius-3xl);
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                }

                .decisions-panel h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .decisions-lede {
                    color: hsl(var(--muted-foreground));
                    line-height: 1.6;
                    margin: 0 0 1.5rem;
                }

                .decision-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .decision {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    opacity: 0;
                    transform: translateX(-20px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }

                .decision.shown { opacity: 1; transform: none; }

                .decision-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: hsl(142 71% 45%);
                }

                .decision-impact {
                    margin-left: auto;
                    color: hsl(var(--primary));
                    font-weight: 500;
                }

                .health-bars {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .health-label {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .health-value { color: hsl(var(--muted-foreground)); }

                .health-track {
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: hsl(var(--secondary));
                    overflow: hidden;
                }

                .health-fill {
                    height: 100%;
                    border-radius: 9999px;
                    transition: width 1s ease-out;
                }

                @media (max-width: 1024px) {
                    .metric-grid { grid-template-columns: repeat(2, 1fr); }
                    .decisions-panel { grid-template-columns: 1fr; padding: 2rem; }
                }

                @media (max-width: 640px) {
                    .metric-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
