use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::site_link::SiteLink;
use crate::config;
use crate::content::{GET_STARTED_LINK, HERO_CHART, HERO_STATS, TRUSTED_BY};

/// Maps the pointer offset from the mockup centre to (rotateX, rotateY)
/// degrees. Linear within the tilt range, clamped outside it.
pub fn tilt_for_offset(dx: f64, dy: f64) -> (f64, f64) {
    let scale = |v: f64| (v / config::TILT_RANGE_PX).clamp(-1.0, 1.0) * config::TILT_MAX_DEG;
    (-scale(dy), scale(dx))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();
    let tilt = use_state(|| (0.0_f64, 0.0_f64));

    let on_mouse_move = {
        let container = container.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = container.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                let dx = e.client_x() as f64 - (rect.left() + rect.width() / 2.0);
                let dy = e.client_y() as f64 - (rect.top() + rect.height() / 2.0);
                tilt.set(tilt_for_offset(dx, dy));
            }
        })
    };

    let on_mouse_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set((0.0, 0.0)))
    };

    let (rotate_x, rotate_y) = *tilt;
    let mockup_style = format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg);",
        rotate_x, rotate_y
    );
    let last_bar = HERO_CHART.len().saturating_sub(1);

    html! {
        <section
            class="hero"
            ref={container}
            onmousemove={on_mouse_move}
            onmouseleave={on_mouse_leave}
        >
            <div class="hero-wash"></div>
            <div class="hero-orbs">
                <div class="orb orb-a"></div>
                <div class="orb orb-b"></div>
            </div>

            <div class="container-narrow hero-inner">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <div class="hero-badge animate-fade-up">
                            <span class="pulse-dot"></span>
                            {"Now with GPT-4 Intelligence"}
                        </div>

                        <h1 class="hero-title animate-fade-up" style="animation-delay: 100ms;">
                            {"Your ads, "}
                            <span class="underlined">
                                <span class="text-gradient">{"optimized"}</span>
                                <span class="underline-bar"></span>
                            </span>
                            {" by AI"}
                        </h1>

                        <p class="hero-subtitle animate-fade-up" style="animation-delay: 200ms;">
                            {"Ryze autonomously manages, audits, and optimizes your paid advertising campaigns. Get better ROAS while spending less time in ad managers."}
                        </p>

                        <div class="hero-cta-group animate-fade-up" style="animation-delay: 300ms;">
                            <SiteLink href={GET_STARTED_LINK.href} classes="btn-primary group">
                                {"Start Free Trial"}
                                <IconView icon={Icon::ArrowRight} class="nudge" />
                            </SiteLink>
                            <button class="demo-button group">
                                <span class="play-disc"><IconView icon={Icon::Play} /></span>
                                {"Watch Demo"}
                            </button>
                        </div>

                        <div class="trusted animate-fade-in" style="animation-delay: 500ms;">
                            <p>{"Trusted by marketing teams at"}</p>
                            <div class="trusted-logos">
                                { for TRUSTED_BY.iter().map(|company| html! {
                                    <span>{*company}</span>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="hero-mockup animate-scale-in">
                        <div class="mockup-tilt" style={mockup_style}>
                            <div class="mockup-float">
                                <div class="dashboard-card">
                                    <div class="dashboard-chrome">
                                        <div class="traffic-lights">
                                            <span class="light red"></span>
                                            <span class="light yellow"></span>
                                            <span class="light green"></span>
                                        </div>
                                        <div class="address-bar">{"dashboard.ryze.ai"}</div>
                                    </div>
    
                                    <div class="dashboard-body">
                                        <div class="stat-row">
                                            { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                                                <div class="stat-tile animate-fade-up" style={format!("animation-delay: {}ms;", 500 + i * 100)}>
                                                    <p class="stat-label">{stat.label}</p>
                                                    <p class="stat-value">{stat.value}</p>
                                                    <p class={classes!("stat-change", if stat.is_gain() { "tone-green" } else { "tone-primary" })}>
                                                        {stat.change}
                                                    </p>
                                                </div>
                                            }) }
                                        </div>
    
                                        <div class="chart">
                                            { for HERO_CHART.iter().enumerate().map(|(i, height)| html! {
                                                <div
                                                    class={classes!("chart-bar", (i == last_bar).then_some("chart-bar-hot"))}
                                                    style={format!("--bar-height: {}%; animation-delay: {}ms;", height, 800 + i * 50)}
                                                ></div>
                                            }) }
                                        </div>
    
                                        <div class="ai-note animate-slide-in-right" style="animation-delay: 1200ms;">
                                            <div class="ai-chip">{"AI"}</div>
                                            <div>
                                                <p class="ai-title">{"Optimization Applied"}</p>
                                                <p class="ai-body">{"Reallocated $2,400 to top-performing ad sets"}</p>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                <div class="mockup-glow"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }

                .hero-wash {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, hsl(var(--orange-50) / 0.5), hsl(var(--background)), hsl(var(--background)));
                    pointer-events: none;
                }

                .hero-orbs { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }

                .orb {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .orb-a {
                    top: 25%; left: 25%;
                    width: 24rem; height: 24rem;
                    background: hsl(var(--primary) / 0.05);
                    animation: orb-drift 8s ease-in-out infinite;
                }

                .orb-b {
                    bottom: 25%; right: 25%;
                    width: 20rem; height: 20rem;
                    background: hsl(var(--orange-200) / 0.2);
                    animation: orb-drift 10s ease-in-out infinite reverse;
                }

                @keyframes orb-drift {
                    0%, 100% { transform: translateY(-20px); opacity: 0.3; }
                    50% { transform: translateY(20px); opacity: 0.5; }
                }

                .hero-inner { position: relative; width: 100%; }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .hero-copy > * { opacity: 0; }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.375rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary) / 0.1);
                    color: hsl(var(--primary));
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .pulse-dot {
                    width: 0.5rem; height: 0.5rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary));
                    animation: fade-in 1s ease-in-out infinite alternate;
                }

                .hero-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    margin: 0 0 1.5rem;
                }

                .underlined { position: relative; }

                .underline-bar {
                    position: absolute;
                    left: 0; right: 0; bottom: -0.25rem;
                    height: 0.25rem;
                    border-radius: 9999px;
                    background: hsl(var(--primary) / 0.2);
                    transform-origin: left;
                    transform: scaleX(0);
                    animation: underline-grow 0.8s ease-out 0.8s forwards;
                }

                @keyframes underline-grow { to { transform: scaleX(1); } }

                .hero-subtitle {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: hsl(var(--muted-foreground));
                    max-width: 36rem;
                    margin: 0 0 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero-cta-group .btn-primary:hover { box-shadow: var(--shadow-glow-lg); }

                .demo-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 1.5rem;
                    font-size: 1rem;
                    font-weight: 500;
                    color: hsl(var(--foreground));
                    background: transparent;
                    border: 1px solid hsl(var(--border));
                    border-radius: var(--radius-2xl);
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.2s ease;
                }

                .demo-button:hover { background: hsl(var(--secondary)); transform: scale(1.02); }

                .play-disc {
                    width: 2.5rem; height: 2.5rem;
                    border-radius: 9999px;
                    background: hsl(var(--foreground) / 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                }

                .trusted {
                    margin-top: 2.5rem;
                    padding-top: 2.5rem;
                    border-top: 1px solid hsl(var(--border) / 0.5);
                }

                .trusted p {
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                    margin: 0 0 1rem;
                }

                .trusted-logos {
                    display: flex;
                    gap: 2rem;
                    opacity: 0.5;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: hsl(var(--foreground) / 0.6);
                }

                .hero-mockup {
                    position: relative;
                    opacity: 0;
                    animation-delay: 200ms;
                }

                .mockup-tilt { transition: transform 0.3s ease-out; }

                .mockup-float {
                    position: relative;
                    animation: mockup-bob 6s ease-in-out infinite;
                }

                @keyframes mockup-bob {
                    0%, 100% { transform: translateY(-8px); }
                    50% { transform: translateY(8px); }
                }

                .dashboard-card {
                    background: hsl(var(--card));
                    border: 1px solid hsl(var(--border));
                    border-radius: var(--radius-3xl);
                    box-shadow: 0 25px 50px -12px hsl(220 13% 10% / 0.25);
                    overflow: hidden;
                }

                .dashboard-chrome {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border-bottom: 1px solid hsl(var(--border));
                    background: hsl(var(--secondary) / 0.3);
                }

                .traffic-lights { display: flex; gap: 0.5rem; }
                .light { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
                .light.red { background: #f87171; }
                .light.yellow { background: #facc15; }
                .light.green { background: #4ade80; }

                .address-bar {
                    margin: 0 auto;
                    padding: 0.25rem 1rem;
                    border-radius: var(--radius-sm);
                    background: hsl(var(--secondary));
                    font-size: 0.75rem;
                    color: hsl(var(--muted-foreground));
                }

                .dashboard-body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .stat-row {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .stat-tile {
                    opacity: 0;
                    padding: 1rem;
                    border-radius: var(--radius-xl);
                    background: hsl(var(--secondary) / 0.5);
                }

                .stat-tile p { margin: 0; }
                .stat-label { font-size: 0.75rem; color: hsl(var(--muted-foreground)); margin-bottom: 0.25rem !important; }
                .stat-value { font-size: 1.25rem; font-weight: 700; }
                .stat-change { font-size: 0.75rem; font-weight: 500; }

                .chart {
                    height: 8rem;
                    padding: 1rem;
                    border-radius: var(--radius-xl);
                    background: hsl(var(--secondary) / 0.3);
                    display: flex;
                    align-items: flex-end;
                    gap: 0.5rem;
                }

                .chart-bar {
                    flex: 1;
                    height: 0;
                    border-radius: 4px 4px 0 0;
                    background: hsl(var(--primary) / 0.2);
                    animation: bar-grow 0.5s ease-out forwards;
                }

                .chart-bar-hot {
                    background: linear-gradient(180deg, hsl(var(--primary)) 0%, hsl(var(--primary) / 0.6) 100%);
                }

                @keyframes bar-grow { to { height: var(--bar-height); } }

                .ai-note {
                    opacity: 0;
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: var(--radius-xl);
                    background: hsl(var(--primary) / 0.05);
                    border: 1px solid hsl(var(--primary) / 0.2);
                }

                .ai-chip {
                    flex-shrink: 0;
                    width: 2rem; height: 2rem;
                    border-radius: var(--radius);
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                    font-size: 0.875rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .ai-title { margin: 0; font-size: 0.875rem; font-weight: 500; }
                .ai-body { margin: 0; font-size: 0.75rem; color: hsl(var(--muted-foreground)); }

                .mockup-glow {
                    position: absolute;
                    inset: -1rem;
                    z-index: -1;
                    border-radius: 2rem;
                    filter: blur(40px);
                    background: linear-gradient(to right, hsl(var(--primary) / 0.1), hsl(var(--orange-200) / 0.1), hsl(var(--primary) / 0.1));
                }

                @media (max-width: 1024px) {
                    .hero-grid { grid-template-columns: 1fr; text-align: center; }
                    .hero-subtitle { margin-left: auto; margin-right: auto; }
                    .hero-cta-group, .trusted-logos { justify-content: center; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt_for_offset(0.0, 0.0), (-0.0, 0.0));
    }

    #[test]
    fn edges_reach_full_tilt() {
        assert_eq!(tilt_for_offset(300.0, 300.0), (-5.0, 5.0));
        assert_eq!(tilt_for_offset(-300.0, -300.0), (5.0, -5.0));
    }

    #[test]
    fn far_pointer_is_clamped() {
        assert_eq!(tilt_for_offset(2000.0, -900.0), (5.0, 5.0));
    }

    #[test]
    fn linear_inside_range() {
        let (rx, ry) = tilt_for_offset(150.0, -60.0);
        assert!((ry - 2.5).abs() < 1e-9);
        assert!((rx - 1.0).abs() < 1e-9);
    }
}
