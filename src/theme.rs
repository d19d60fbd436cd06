//! Design tokens. Everything visual that is shared between components is
//! declared here and emitted once as CSS custom properties plus a handful of
//! utility classes.

use std::fmt::Write;

use yew::prelude::*;

/// HSL triple as written inside `hsl(...)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl(pub u16, pub u8, pub u8);

impl Hsl {
    pub fn css(self) -> String {
        format!("{} {}% {}%", self.0, self.1, self.2)
    }
}

pub const PALETTE: &[(&str, Hsl)] = &[
    ("background", Hsl(0, 0, 100)),
    ("foreground", Hsl(222, 47, 11)),
    ("card", Hsl(0, 0, 100)),
    ("card-foreground", Hsl(222, 47, 11)),
    ("primary", Hsl(18, 89, 55)),
    ("primary-foreground", Hsl(0, 0, 100)),
    ("secondary", Hsl(210, 40, 96)),
    ("secondary-foreground", Hsl(222, 47, 11)),
    ("muted", Hsl(210, 40, 96)),
    ("muted-foreground", Hsl(215, 16, 47)),
    ("accent", Hsl(30, 100, 93)),
    ("accent-foreground", Hsl(12, 80, 40)),
    ("border", Hsl(214, 32, 91)),
    ("input", Hsl(214, 32, 91)),
    ("ring", Hsl(18, 89, 55)),
];

pub const ORANGE: [Hsl; 10] = [
    Hsl(32, 100, 97),
    Hsl(30, 100, 93),
    Hsl(26, 100, 85),
    Hsl(22, 100, 74),
    Hsl(18, 95, 62),
    Hsl(18, 89, 55),
    Hsl(14, 85, 48),
    Hsl(12, 80, 40),
    Hsl(10, 75, 33),
    Hsl(8, 70, 28),
];

pub const SLATE: [Hsl; 10] = [
    Hsl(210, 40, 98),
    Hsl(214, 32, 91),
    Hsl(213, 27, 84),
    Hsl(215, 20, 65),
    Hsl(215, 16, 47),
    Hsl(215, 19, 35),
    Hsl(215, 25, 27),
    Hsl(217, 33, 17),
    Hsl(222, 47, 11),
    Hsl(222, 84, 5),
];

const SCALE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

pub const RADII: &[(&str, &str)] = &[
    ("radius", "0.75rem"),
    ("radius-md", "calc(0.75rem - 2px)"),
    ("radius-sm", "calc(0.75rem - 4px)"),
    ("radius-xl", "1rem"),
    ("radius-2xl", "1.25rem"),
    ("radius-3xl", "1.5rem"),
];

pub const SHADOWS: &[(&str, &str)] = &[
    ("shadow-glow", "0 0 40px -10px hsl(18 89% 55% / 0.3)"),
    ("shadow-glow-lg", "0 0 60px -10px hsl(18 89% 55% / 0.4)"),
    (
        "shadow-card",
        "0 4px 6px -1px hsl(220 13% 10% / 0.05), 0 2px 4px -2px hsl(220 13% 10% / 0.03)",
    ),
    ("shadow-card-hover", "0 25px 50px -12px hsl(220 13% 10% / 0.15)"),
    (
        "shadow-elevated",
        "0 10px 15px -3px hsl(220 13% 10% / 0.08), 0 4px 6px -4px hsl(220 13% 10% / 0.03)",
    ),
];

/// (name, keyframes body, animation shorthand without the name)
pub const ANIMATIONS: &[(&str, &str, &str)] = &[
    (
        "float",
        "0%, 100% { transform: translateY(0px); } 50% { transform: translateY(-10px); }",
        "6s ease-in-out infinite",
    ),
    (
        "pulse-glow",
        "0%, 100% { box-shadow: 0 0 40px -10px hsl(18 89% 55% / 0.3); } 50% { box-shadow: 0 0 60px -10px hsl(18 89% 55% / 0.5); }",
        "3s ease-in-out infinite",
    ),
    (
        "fade-up",
        "from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); }",
        "0.6s ease-out forwards",
    ),
    ("fade-in", "from { opacity: 0; } to { opacity: 1; }", "0.5s ease-out forwards"),
    (
        "scale-in",
        "from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); }",
        "0.4s ease-out forwards",
    ),
    (
        "slide-in-right",
        "from { opacity: 0; transform: translateX(30px); } to { opacity: 1; transform: translateX(0); }",
        "0.6s ease-out forwards",
    ),
    (
        "slide-in-left",
        "from { opacity: 0; transform: translateX(-30px); } to { opacity: 1; transform: translateX(0); }",
        "0.6s ease-out forwards",
    ),
    (
        "count-up",
        "from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); }",
        "0.4s ease-out forwards",
    ),
];

const UTILITIES: &str = r#"
*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: 'Inter', system-ui, sans-serif;
    background: hsl(var(--background));
    color: hsl(var(--foreground));
    -webkit-font-smoothing: antialiased;
}

.container-narrow {
    max-width: 1200px;
    margin: 0 auto;
    padding-left: 1.5rem;
    padding-right: 1.5rem;
}

.section-padding {
    padding-top: 6rem;
    padding-bottom: 6rem;
}

.bg-muted-band { background: hsl(var(--secondary) / 0.3); }

.text-gradient {
    background: linear-gradient(135deg, hsl(var(--orange-500)), hsl(var(--orange-600)));
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}

.eyebrow {
    display: inline-block;
    padding: 0.375rem 1rem;
    margin-bottom: 1rem;
    border-radius: 9999px;
    background: hsl(var(--primary) / 0.1);
    color: hsl(var(--primary));
    font-size: 0.875rem;
    font-weight: 500;
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading h2 {
    font-size: clamp(1.875rem, 4vw, 3rem);
    font-weight: 700;
    margin: 0 0 1rem;
}

.section-heading p {
    font-size: 1.125rem;
    color: hsl(var(--muted-foreground));
    max-width: 42rem;
    margin: 0 auto;
}

.btn-primary {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    background: hsl(var(--primary));
    color: hsl(var(--primary-foreground));
    border-radius: var(--radius-2xl);
    font-weight: 500;
    text-decoration: none;
    transition: box-shadow 0.3s ease, transform 0.2s ease;
}

.btn-primary:hover { box-shadow: var(--shadow-glow); transform: scale(1.02); }
.btn-primary:active { transform: scale(0.98); }

.btn-small {
    padding: 0.625rem 1.25rem;
    font-size: 0.875rem;
    border-radius: var(--radius-xl);
}

.group:hover .nudge { transform: translateX(2px); }
.nudge { display: inline-block; transition: transform 0.3s ease; }

.card {
    background: hsl(var(--card));
    border: 1px solid hsl(var(--border));
    border-radius: var(--radius-2xl);
    transition: border-color 0.5s ease, box-shadow 0.5s ease, transform 0.3s ease;
}

.card:hover {
    border-color: hsl(var(--primary) / 0.2);
    box-shadow: var(--shadow-card-hover);
}

.tone-primary { color: hsl(var(--primary)); }
.tone-green { color: hsl(142 71% 45%); }
.tone-blue { color: hsl(217 91% 60%); }
.tone-purple { color: hsl(271 91% 65%); }
.fill-primary { background: hsl(var(--primary)); }
.fill-green { background: hsl(142 71% 45%); }
.fill-blue { background: hsl(217 91% 60%); }
.fill-purple { background: hsl(271 91% 65%); }

.reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.is-visible {
    opacity: 1;
    transform: none;
}

.icon { display: inline-block; line-height: 1; }

@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; }
}
"#;

/// Full global stylesheet: custom properties, keyframes, utilities.
pub fn global_css() -> String {
    let mut css = String::from(":root {\n");
    for (name, color) in PALETTE {
        let _ = writeln!(css, "    --{}: {};", name, color.css());
    }
    for (step, color) in SCALE_STEPS.iter().zip(ORANGE.iter()) {
        let _ = writeln!(css, "    --orange-{}: {};", step, color.css());
    }
    for (step, color) in SCALE_STEPS.iter().zip(SLATE.iter()) {
        let _ = writeln!(css, "    --slate-{}: {};", step, color.css());
    }
    for (name, value) in RADII.iter().chain(SHADOWS.iter()) {
        let _ = writeln!(css, "    --{}: {};", name, value);
    }
    css.push_str("}\n");

    for (name, frames, timing) in ANIMATIONS {
        let _ = writeln!(css, "@keyframes {} {{ {} }}", name, frames);
        let _ = writeln!(css, ".animate-{} {{ animation: {} {}; }}", name, name, timing);
    }

    css.push_str(UTILITIES);
    css
}

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    let css = use_memo(|_| global_css(), ());
    html! { <style>{(*css).clone()}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_declares_every_token() {
        let css = global_css();
        assert!(css.contains("--primary: 18 89% 55%;"));
        assert!(css.contains("--orange-50: 32 100% 97%;"));
        assert!(css.contains("--slate-900: 222 84% 5%;"));
        assert!(css.contains("--radius-3xl: 1.5rem;"));
        assert!(css.contains("--shadow-glow: 0 0 40px -10px hsl(18 89% 55% / 0.3);"));
    }

    #[test]
    fn every_animation_has_keyframes_and_class() {
        let css = global_css();
        for (name, _, _) in ANIMATIONS {
            assert!(css.contains(&format!("@keyframes {} {{", name)), "{}", name);
            assert!(css.contains(&format!(".animate-{} {{", name)), "{}", name);
        }
    }

    #[test]
    fn hsl_renders_space_separated() {
        assert_eq!(Hsl(215, 16, 47).css(), "215 16% 47%");
    }
}
