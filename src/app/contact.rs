use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::contact::{ContactError, ContactForm, ContactMessage, FormStatus, RelayReply};
use crate::content::{Owner, SocialLink};
use crate::reveal::{reveal_class, stagger_style};

use super::effects::use_reveal;
use super::use_settings;

/// Relays one contact message. Runs on the server so the relay access key stays there.
#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
    botcheck: String,
) -> Result<RelayReply, ServerFnError> {
    use crate::relay::RelayClient;

    let relay = use_context::<RelayClient>()
        .ok_or_else(|| ServerFnError::new("Contact relay is not available"))?;
    let msg = ContactMessage {
        name,
        email,
        subject,
        message,
        botcheck,
    };
    relay.send(&msg).await.map_err(|e| {
        tracing::warn!(error = %e, "contact submission failed");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ContactSection(owner: &'static Owner, socials: &'static [SocialLink]) -> impl IntoView {
    let settings = use_settings();
    let section_ref = NodeRef::<html::Section>::new();
    let seen = use_reveal(section_ref);

    let form = RwSignal::new(ContactForm::new());
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let botcheck_ref = NodeRef::<html::Input>::new();

    let loading = move || form.with(|f| f.status().is_loading());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };

        let input_value = |r: NodeRef<html::Input>| {
            r.get_untracked().map(|el| el.value()).unwrap_or_default()
        };
        let msg = ContactMessage {
            name: input_value(name_ref),
            email: input_value(email_ref),
            subject: input_value(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
            botcheck: botcheck_ref
                .get_untracked()
                .filter(|el| el.checked())
                .map(|_| "true".to_string())
                .unwrap_or_default(),
        };
        let reset_after = settings.status_reset;

        spawn_local(async move {
            let outcome = match submit_contact(
                msg.name,
                msg.email,
                msg.subject,
                msg.message,
                msg.botcheck,
            )
            .await
            {
                Ok(reply) => reply.into_result(),
                Err(e) => {
                    log::warn!("contact submission failed: {e}");
                    Err(ContactError::Transport(e.to_string()))
                }
            };

            let clear = form
                .try_update(|f| f.finish(attempt, outcome))
                .unwrap_or(false);
            if clear {
                for r in [name_ref, email_ref, subject_ref] {
                    if let Some(el) = r.get_untracked() {
                        el.set_value("");
                    }
                }
                if let Some(el) = message_ref.get_untracked() {
                    el.set_value("");
                }
            }

            set_timeout(move || form.update(|f| f.reset(attempt)), reset_after);
        });
    };

    view! {
        <section id="contact" class="section contact-section" node_ref=section_ref>
            <div class="container">
                <div
                    class=move || reveal_class("fade-up contact-content", seen.get())
                    style=stagger_style(0.6, 0.0, 0.0, 0)
                >
                    <span class="section-label">"Get In Touch"</span>
                    <h2 class="section-title">
                        "Let's Build Something " <span class="italic accent">"Amazing"</span>
                    </h2>
                    <p class="section-subtitle centered">
                        "Have a project in mind? I'd love to hear about it."
                    </p>

                    <form
                        class=move || reveal_class("fade-up contact-form glass-card", seen.get())
                        style=stagger_style(0.6, 0.2, 0.0, 0)
                        on:submit=on_submit
                    >
                        // honeypot, hidden from humans
                        <input
                            node_ref=botcheck_ref
                            type="checkbox"
                            name="botcheck"
                            class="honeypot"
                            tabindex="-1"
                            autocomplete="off"
                        />

                        <div class="form-row">
                            <div class="form-group">
                                <label for="name">"Name"</label>
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    id="name"
                                    name="name"
                                    placeholder="Your name"
                                    required
                                    disabled=loading
                                />
                            </div>
                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    node_ref=email_ref
                                    type="email"
                                    id="email"
                                    name="email"
                                    placeholder="your@email.com"
                                    required
                                    disabled=loading
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="subject">"Subject"</label>
                            <input
                                node_ref=subject_ref
                                type="text"
                                id="subject"
                                name="subject"
                                placeholder="Project inquiry"
                                required
                                disabled=loading
                            />
                        </div>
                        <div class="form-group">
                            <label for="message">"Message"</label>
                            <textarea
                                node_ref=message_ref
                                id="message"
                                name="message"
                                rows="4"
                                placeholder="Tell me about your project..."
                                required
                                disabled=loading
                            ></textarea>
                        </div>

                        {move || {
                            form.with(|f| f.message().map(|m| (f.status(), m.to_string())))
                                .map(|(status, text)| {
                                    view! {
                                        <div class=format!("form-message {}", status.class())>
                                            {(status == FormStatus::Success).then_some("✔ ")}
                                            {text}
                                            {(status == FormStatus::Error)
                                                .then(|| {
                                                    view! {
                                                        " "
                                                        <a href=owner.mailto()>{owner.email.as_str()}</a>
                                                    }
                                                })}
                                        </div>
                                    }
                                })
                        }}

                        <button type="submit" class="submit-btn" disabled=loading>
                            {move || {
                                if loading() {
                                    view! { <span class="spin">"⟳"</span> " Sending..." }.into_any()
                                } else {
                                    view! { <span>"➤"</span> " Send Message" }.into_any()
                                }
                            }}
                        </button>
                    </form>

                    <div
                        class=move || reveal_class("fade contact-social", seen.get())
                        style=stagger_style(0.6, 0.4, 0.0, 0)
                    >
                        <p>"Or connect with me on"</p>
                        <div class="social-links">
                            {socials
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href.as_str()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="social-link"
                                            aria-label=s.label.as_str()
                                        >
                                            <i class=s.icon.as_str()></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a href=owner.mailto() class="social-link" aria-label="Email">
                                "✉"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="contact-bg" aria-hidden="true">
                <div class="gradient-orb orb-1" />
                <div class="gradient-orb orb-2" />
            </div>
        </section>
    }
}
