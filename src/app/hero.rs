use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::Hero;
use crate::motion::Parallax;
use crate::reveal::reveal_class;

use super::effects::use_mounted;
use super::use_settings;

#[component]
pub fn HeroSection(hero: &'static Hero) -> impl IntoView {
    let settings = use_settings();
    let mounted = use_mounted();
    let (_, scroll_y) = use_window_scroll();

    // intro plays on load rather than on scroll
    let intro = move |from: &'static str| move || reveal_class(from, mounted.get());

    view! {
        <section class="hero">
            <div class="hero-spline">
                <spline-viewer
                    url=settings.scene_url
                    loading-anim-type="spinner-small-dark"
                ></spline-viewer>
            </div>

            <div class="hero-content" style=move || Parallax::at(scroll_y.get()).style()>
                <div class="hero-left">
                    <div
                        class=intro("fade-up hero-badge")
                        style="transition-duration: 0.6s; transition-delay: 0.3s;"
                    >
                        <span>{hero.badge.as_str()}</span>
                    </div>

                    <h1
                        class=intro("fade-up-far hero-title")
                        style="transition-duration: 0.8s; transition-delay: 0.4s;"
                    >
                        {hero
                            .title
                            .iter()
                            .enumerate()
                            .map(|(i, line)| {
                                let class = if i == 0 { "title-line" } else { "title-line title-italic" };
                                view! { <span class=class>{line.as_str()}</span> }
                            })
                            .collect_view()}
                    </h1>

                    <div
                        class=intro("fade-up hero-cta")
                        style="transition-duration: 0.6s; transition-delay: 0.6s;"
                    >
                        <a href="#projects" class="btn-glass">
                            "🚀 View Projects"
                        </a>
                        <a href="#contact" class="btn-primary">
                            "✉ Get In Touch"
                        </a>
                    </div>
                </div>

                <div
                    class=intro("fade-left hero-right")
                    style="transition-duration: 0.8s; transition-delay: 0.5s;"
                >
                    <div class="hero-tagline">
                        {hero.tagline_lead.as_str()}
                        <br />
                        <span class="tagline-gradient">{hero.tagline_accent.as_str()}</span>
                        <span class="tagline-small">{hero.tagline.as_str()}</span>
                    </div>
                </div>
            </div>

            <div
                class=intro("fade hero-scroll")
                style="transition-duration: 1s; transition-delay: 1s;"
            >
                "Scroll to explore ↓"
            </div>
        </section>
    }
}
