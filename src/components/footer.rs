use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::site_link::SiteLink;
use crate::content::{FOOTER_COLUMNS, SOCIAL_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container-narrow section-padding">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="brand">
                            <span class="brand-mark">{"R"}</span>
                            <span class="brand-name">{"Ryze"}</span>
                        </Link<Route>>
                        <p>{"AI-powered ad optimization for modern marketing teams."}</p>
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div class="footer-column">
                            <h4>{column.title}</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li>
                                        <SiteLink href={link.href} classes="footer-link">{link.name}</SiteLink>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Ryze. All rights reserved.", year)}</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <SiteLink href={link.href} classes="footer-link">
                                {link.name}{" "}<IconView icon={Icon::ArrowUpRight} />
                            </SiteLink>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: hsl(var(--secondary) / 0.3);
                    border-top: 1px solid hsl(var(--border));
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 3rem;
                }

                .footer-brand p {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: hsl(var(--muted-foreground));
                }

                .footer-column h4 {
                    margin: 0 0 1rem;
                    font-weight: 500;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-link {
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-link:hover { color: hsl(var(--foreground)); }

                .footer-bottom {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid hsl(var(--border));
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                }

                .footer-social {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                    .footer-brand { grid-column: span 2; }
                    .footer-bottom { flex-direction: column; }
                }
                "#}
            </style>
        </footer>
    }
}
