use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_media_query, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::motion::glow_style;
use crate::reveal::RevealState;

use super::use_settings;

/// `false` during the server render and hydration, `true` once mounted in the browser.
///
/// Anything driven by browser-only state keys off this so the first client
/// render matches the HTML the server sent.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}

/// Whether the browser has `IntersectionObserver`. The server render has no
/// observer to build, so it reports support and the sections stay hidden
/// until the client decides.
fn intersection_observer_supported() -> bool {
    #[cfg(feature = "hydrate")]
    {
        window().get("IntersectionObserver").is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Latches `true` the first time `target` intersects the viewport.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let settings = use_settings();
    let state = RwSignal::new(RevealState::default());
    let supported = intersection_observer_supported();

    if supported {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let hit = entries.iter().any(|e| e.is_intersecting());
                if hit && !state.get_untracked().is_seen() {
                    state.update(|s| *s = s.observe(hit));
                }
            },
            UseIntersectionObserverOptions::default().root_margin(settings.reveal_margin),
        );
        Effect::new(move |_| {
            if state.get().is_seen() {
                stop();
            }
        });
    } else {
        // after hydration, so the first client render still matches the server
        Effect::new(move |_| state.update(|s| *s = s.on_mount(false)));
    }

    Signal::derive(move || state.get().is_seen())
}

#[component]
pub fn CursorGlow() -> impl IntoView {
    let mounted = use_mounted();
    let touch_only = use_media_query("(hover: none)");
    let (pos, set_pos) = signal(None::<(f64, f64)>);

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        set_pos.set(Some((e.client_x() as f64, e.client_y() as f64)));
    });

    view! {
        <div
            class=move || {
                if mounted.get() && !touch_only.get() && pos.get().is_some() {
                    "cursor-glow hide-mobile"
                } else {
                    "cursor-glow hide-mobile hidden"
                }
            }
            style=move || pos.get().map(|(x, y)| glow_style(x, y)).unwrap_or_default()
            aria-hidden="true"
        />
    }
}
