use gloo_timers::callback::Interval;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::carousel::{CarouselAction, CarouselState};
use crate::components::icon::{Icon, IconView};
use crate::components::reveal::{reveal_classes, stagger, use_reveal_once};
use crate::config;
use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let container = use_node_ref();
    let revealed = use_reveal_once(container.clone(), config::SECTION_REVEAL_MARGIN);
    let carousel = use_reducer_eq(|| CarouselState::new(TESTIMONIALS.len()));

    // Autoplay. A fresh interval is armed on every resume so a hover never
    // leaves a half-elapsed period behind.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |armed: &bool| {
                let interval = armed.then(|| {
                    debug!("Carousel autoplay armed");
                    Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselAction::Tick);
                    })
                });
                move || {
                    if let Some(interval) = interval {
                        debug!("Carousel autoplay dropped");
                        drop(interval);
                    }
                }
            },
            carousel.autoplay_armed(),
        );
    }

    let send = |action: CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let current = carousel.index();
    let testimonial = &TESTIMONIALS[current];

    html! {
        <section class="section-padding bg-muted-band" ref={container}>
            <div class="container-narrow">
                <div class={classes!("section-heading", reveal_classes(revealed))}>
                    <span class="eyebrow">{"Testimonials"}</span>
                    <h2>{"Loved by marketing teams"}</h2>
                    <p>{"See what our customers have to say about their experience with Ryze."}</p>
                </div>

                <div
                    class={classes!("carousel", reveal_classes(revealed))}
                    style={stagger(200, 0, 0)}
                    onmouseenter={send(CarouselAction::Pause)}
                    onmouseleave={send(CarouselAction::Resume)}
                >
                    <div class="carousel-card">
                        <IconView icon={Icon::Quote} class="quote-mark" />

                        <div class="slide" key={current}>
                            <p class="slide-quote">{format!("\"{}\"", testimonial.quote)}</p>
                            <div class="slide-footer">
                                <div class="slide-author">
                                    <div class="avatar">{testimonial.avatar}</div>
                                    <div>
                                        <p class="author-name">{testimonial.author}</p>
                                        <p class="author-role">
                                            {format!("{} at {}", testimonial.role, testimonial.company)}
                                        </p>
                                    </div>
                                </div>
                                <div class="slide-metric">{testimonial.metric}</div>
                            </div>
                        </div>
                    </div>

                    <div class="carousel-nav">
                        <button
                            class="carousel-arrow"
                            aria-label="Previous testimonial"
                            onclick={send(CarouselAction::Prev)}
                        >
                            <IconView icon={Icon::ChevronLeft} />
                        </button>

                        <div class="carousel-dots">
                            { for (0..TESTIMONIALS.len()).map(|i| html! {
                                <button
                                    class={classes!("dot", (i == current).then_some("active"))}
                                    aria-label={format!("Go to testimonial {}", i + 1)}
                                    onclick={send(CarouselAction::GoTo(i))}
                                ></button>
                            }) }
                        </div>

                        <button
                            class="carousel-arrow"
                            aria-label="Next testimonial"
                            onclick={send(CarouselAction::Next)}
                        >
                            <IconView icon={Icon::ChevronRight} />
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .carousel {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .carousel-card {
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    border-radius: var(--radius-3xl);
                    padding: 3rem;
                    overflow: hidden;
                }

                .quote-mark {
                    font-size: 4rem;
                    color: hsl(var(--primary) / 0.2);
                    margin-bottom: 1rem;
                }

                .slide { animation: slide-swap 0.4s ease-out; }

                @keyframes slide-swap {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .slide-quote {
                    font-size: 1.5rem;
                    line-height: 1.6;
                    margin: 0 0 2rem;
                }

                .slide-footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .slide-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary) / 0.1);
                    color: hsl(var(--primary));
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .author-name { margin: 0; font-weight: 600; }

                .author-role {
                    margin: 0;
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                }

                .slide-metric {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary) / 0.1);
                    color: hsl(var(--primary));
                    font-weight: 600;
                    animation: scale-in 0.4s ease-out 0.2s both;
                }

                .carousel-nav {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .carousel-arrow {
                    padding: 0.5rem 0.75rem;
                    border-radius: 9999px;
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .carousel-arrow:hover { background: hsl(var(--secondary)); }

                .carousel-dots { display: flex; gap: 0.5rem; }

                .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: hsl(var(--border));
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .dot:hover { background: hsl(var(--muted-foreground)); }

                .dot.active {
                    width: 1.5rem;
                    background: hsl(var(--primary));
                }

                @media (max-width: 640px) {
                    .carousel-card { padding: 2rem; }
                    .slide-quote { font-size: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
