use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::task::spawn_local;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;
#[cfg(feature = "hydrate")]
use web_sys::HtmlAudioElement;

use crate::audio::Playback;
use crate::content::Owner;
use crate::reveal::reveal_class;

use super::effects::use_mounted;
#[cfg(feature = "hydrate")]
use super::use_settings;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#", "Home"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#about", "About"),
];

#[component]
pub fn BottomNavigation(owner: &'static Owner) -> impl IntoView {
    let mounted = use_mounted();

    view! {
        <div class="bottom-nav-container">
            <nav
                class=move || reveal_class("slide-up bottom-nav", mounted.get())
                style="transition-duration: 0.6s; transition-delay: 0.5s;"
            >
                <a href="#" class="nav-logo">
                    <span class="logo-icon">{owner.initials.as_str()}</span>
                    <span class="hide-mobile">{owner.handle.as_str()}</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, (href, label))| {
                            let class = if i == 0 {
                                "bottom-nav-link active"
                            } else {
                                "bottom-nav-link"
                            };
                            view! {
                                <a href=*href class=class>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <AudioToggle />
            </nav>
        </div>
    }
}

/// Play/pause over one looping, volume-capped background track.
#[component]
fn AudioToggle() -> impl IntoView {
    let (playback, set_playback) = signal(Playback::default());

    #[cfg(feature = "hydrate")]
    let audio = {
        let settings = use_settings();
        let audio = StoredValue::new_local(None::<HtmlAudioElement>);
        Effect::new(move |_| match HtmlAudioElement::new_with_src(&settings.audio_src) {
            Ok(el) => {
                el.set_loop(true);
                el.set_volume(settings.audio_volume);
                audio.set_value(Some(el));
            }
            Err(e) => log::warn!("couldn't create audio element: {e:?}"),
        });
        on_cleanup(move || {
            audio.with_value(|el| {
                if let Some(el) = el {
                    let _ = el.pause();
                }
            });
        });
        audio
    };

    let toggle = move |_| {
        let next = playback.get_untracked().toggle();

        #[cfg(feature = "hydrate")]
        {
            if audio.with_value(Option::is_none) {
                return;
            }
        }
        set_playback.set(next);

        #[cfg(feature = "hydrate")]
        audio.with_value(|el| {
            let Some(el) = el else {
                return;
            };
            if !next.is_playing() {
                let _ = el.pause();
                return;
            }
            match el.play() {
                Ok(promise) => spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        log::warn!("Audio autoplay blocked");
                        set_playback.update(|p| *p = p.rejected());
                    }
                }),
                Err(e) => {
                    log::warn!("Audio playback failed: {e:?}");
                    set_playback.update(|p| *p = p.rejected());
                }
            }
        });
    };

    view! {
        <button
            class=move || playback.get().class()
            on:click=toggle
            aria-label=move || playback.get().label()
            title=move || playback.get().label()
        >
            {move || playback.get().icon()}
        </button>
    }
}
