use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config;
use crate::content::{ContactContent, SocialLink};
use crate::hooks::{use_hover, use_reveal, use_tween};
use crate::motion::ease::Ease;
use crate::motion::props::{Layer, PropertySet};
use crate::motion::schedule::{AnimationStage, Target};
use crate::pages::about::{on_enter, section_fade};

#[derive(Properties, PartialEq)]
struct SocialIconProps {
    link: SocialLink,
}

#[function_component(SocialIcon)]
fn social_icon(props: &SocialIconProps) -> Html {
    let node = use_node_ref();
    let hover = use_hover(&node, PropertySet::new().scale(1.1).rotation(5.0), 0.3);
    html! {
        <a
            ref={node}
            href={props.link.href.clone()}
            title={props.link.label.clone()}
            class="social-icon glass motion"
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            { &props.link.icon }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section = use_node_ref();
    let form = use_node_ref();
    let socials = use_node_ref();
    let submit = use_node_ref();
    let submitting = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);
    let content = &props.content;

    use_reveal(&section, on_enter(), section_fade());
    use_reveal(
        &form,
        on_enter(),
        AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).x(-50.0).blur(5.0),
            0.8,
        )
        .stagger_children(4, 0.1),
    );
    use_reveal(
        &socials,
        on_enter(),
        AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).scale(0.8).blur(5.0),
            0.6,
        )
        .ease(Ease::BackOut)
        .stagger_children(content.socials.len(), 0.1),
    );
    let press = use_tween(&submit, Layer::Hover, PropertySet::new().scale(1.0));

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            info!("Sending message");
            submitting.set(true);
            press.pulse(PropertySet::new().scale(0.95), 0.1, 1);
            let submitting = submitting.clone();
            *pending.borrow_mut() = Some(Timeout::new(config::SUBMIT_DELAY_MS, move || {
                info!("Message sent");
                submitting.set(false);
            }));
        })
    };

    html! {
        <section ref={section} id="contact" class="page-section motion">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 4rem;
                    }
                    .contact-card { padding: 2rem; border-radius: 1rem; margin-bottom: 2rem; }
                    .contact-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .contact-form > * { margin-bottom: 1.5rem; }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid var(--border);
                        background: rgba(255, 255, 255, 0.04);
                        color: var(--foreground);
                        resize: none;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        border-color: var(--primary);
                        box-shadow: var(--shadow-neon);
                        outline: none;
                    }
                    .submit-button { width: 100%; padding: 0.75rem; cursor: pointer; }
                    .submit-button:disabled { cursor: wait; opacity: 0.7; }
                    .spinner {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        margin-right: 0.5rem;
                        border: 2px solid var(--primary);
                        border-top-color: transparent;
                        border-radius: 9999px;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .contact-details p { margin-bottom: 1rem; }
                    .socials { display: flex; gap: 1rem; }
                    .social-icon {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        color: var(--foreground);
                        text-decoration: none;
                        font-weight: 700;
                    }
                    .social-icon:hover { color: var(--primary); box-shadow: var(--shadow-neon); }
                "#}
            </style>
            <div class="section-inner narrow">
                <h2 class="section-title text-gradient">{ &content.title }</h2>
                <p class="section-intro muted">{ &content.intro }</p>
                <div class="contact-grid">
                    <div class="contact-card glass-card">
                        <h3 class="glow-text">{"Send a Message"}</h3>
                        <form ref={form} class="contact-form" {onsubmit}>
                            <div class="motion">
                                <input type="text" placeholder="Your Name" required=true />
                            </div>
                            <div class="motion">
                                <input type="email" placeholder="Your Email" required=true />
                            </div>
                            <div class="motion">
                                <textarea placeholder="Your Message" rows="5" required=true />
                            </div>
                            <div class="motion">
                                <button
                                    ref={submit}
                                    type="submit"
                                    class="submit-button glass-card motion"
                                    disabled={*submitting}
                                >
                                    if *submitting {
                                        <span class="spinner"></span>{"Sending..."}
                                    } else {
                                        <span class="glow-text">{"Send Message"}</span>
                                    }
                                </button>
                            </div>
                        </form>
                    </div>
                    <div>
                        <div class="contact-card glass-card contact-details">
                            <h3 class="glow-text">{"Get in Touch"}</h3>
                            <p class="muted">{"✉ "}<span>{ &content.email }</span></p>
                            <p class="muted">{"☎ "}<span>{ &content.phone }</span></p>
                            <p class="muted">{"⌖ "}<span>{ &content.location }</span></p>
                        </div>
                        <div class="contact-card glass-card">
                            <h3 class="glow-text">{"Follow Me"}</h3>
                            <div ref={socials} class="socials">
                                { for content.socials.iter().map(|link| html! {
                                    <SocialIcon key={link.label.clone()} link={link.clone()} />
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
