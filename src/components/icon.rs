use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Brain,
    TrendingUp,
    BarChart,
    Shield,
    Globe,
    Layers,
    RefreshCw,
    Target,
    LineChart,
    Check,
    ArrowRight,
    ArrowUpRight,
    ChevronLeft,
    ChevronRight,
    Quote,
    Menu,
    Close,
    Play,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Zap => "⚡",
            Icon::Brain => "🧠",
            Icon::TrendingUp => "📈",
            Icon::BarChart => "📊",
            Icon::Shield => "🛡",
            Icon::Globe => "🌐",
            Icon::Layers => "🗂",
            Icon::RefreshCw => "🔄",
            Icon::Target => "🎯",
            Icon::LineChart => "📉",
            Icon::Check => "✓",
            Icon::ArrowRight => "→",
            Icon::ArrowUpRight => "↗",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
            Icon::Quote => "“",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::Play => "▶",
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            Icon::Zap => "icon-zap",
            Icon::Brain => "icon-brain",
            Icon::TrendingUp => "icon-trending-up",
            Icon::BarChart => "icon-bar-chart",
            Icon::Shield => "icon-shield",
            Icon::Globe => "icon-globe",
            Icon::Layers => "icon-layers",
            Icon::RefreshCw => "icon-refresh",
            Icon::Target => "icon-target",
            Icon::LineChart => "icon-line-chart",
            Icon::Check => "icon-check",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::ArrowUpRight => "icon-arrow-up-right",
            Icon::ChevronLeft => "icon-chevron-left",
            Icon::ChevronRight => "icon-chevron-right",
            Icon::Quote => "icon-quote",
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-close",
            Icon::Play => "icon-play",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <span
            class={classes!("icon", props.icon.class_name(), props.class.clone())}
            aria-hidden="true"
        >
            {props.icon.glyph()}
        </span>
    }
}
