mod about;
mod contact;
mod effects;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, Portfolio};
use crate::settings::{SiteSettings, SETTINGS_ELEMENT_ID};

use about::AboutSection;
use contact::ContactSection;
use effects::CursorGlow;
use footer::Footer;
use hero::HeroSection;
use nav::BottomNavigation;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_settings();
    let settings_json = settings.to_script_json().unwrap_or_else(|e| {
        log::error!("couldn't serialize site settings: {e}");
        "null".to_string()
    });
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="generator" content=concat!("built ", env!("BUILD_TIME")) />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                // the 3D viewer is optional decoration, a failed load leaves the hero empty
                <script type="module" src=settings.viewer_script></script>
                <script type="application/json" id=SETTINGS_ELEMENT_ID inner_html=settings_json></script>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    if use_context::<SiteSettings>().is_none() {
        provide_context(embedded_settings());
    }
    let owner = portfolio()
        .map(|p| p.owner.name.as_str())
        .unwrap_or("Portfolio");

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Settings provided at composition time, falling back to the defaults.
pub(crate) fn use_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

/// The settings the server rendered into the page, so the client composes
/// with the same values.
fn embedded_settings() -> SiteSettings {
    #[cfg(feature = "hydrate")]
    {
        let json = document()
            .get_element_by_id(SETTINGS_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match json.as_deref().map(SiteSettings::from_script_json) {
            Some(Ok(settings)) => return settings,
            Some(Err(e)) => log::warn!("ignoring embedded site settings: {e}"),
            None => log::warn!("no embedded site settings, using defaults"),
        }
    }
    SiteSettings::default()
}

#[component]
fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(p) => Either::Left(view! { <PortfolioPage p /> }),
        Err(e) => {
            log::error!("portfolio content unavailable: {e}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <main class="container">
                        <p class="section-subtitle">"This page couldn't be loaded."</p>
                    </main>
                },
            )
        }
    }
}

#[component]
fn PortfolioPage(p: &'static Portfolio) -> impl IntoView {
    view! {
        <Title text="Software Engineer" />
        <main>
            <div class="grid-bg" />
            <CursorGlow />
            <BottomNavigation owner=&p.owner />

            <HeroSection hero=&p.hero />
            <AboutSection about=&p.about />
            <ProjectsSection projects=&p.projects />
            <SkillsSection skills=&p.skills />
            <ContactSection owner=&p.owner socials=&p.socials />
            <Footer owner=&p.owner />
        </main>
    }
}
