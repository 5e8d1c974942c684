use yew::prelude::*;

use crate::components::glowing_orb::{GlowingOrb, OrbSize};
use crate::config;
use crate::content::{FooterContent, Tone};
use crate::dom;
use crate::hooks::{use_looping, use_reveal};
use crate::motion::ease::Ease;
use crate::motion::props::PropertySet;
use crate::motion::schedule::{AnimationStage, Target};
use crate::motion::sequencer::{ReplayPolicy, TriggerBinding};
use crate::motion::tracker::Section;
use crate::motion::tween::{Repeat, Tween};

#[derive(Properties, PartialEq)]
struct ParticleProps {
    index: usize,
    class: &'static str,
}

#[function_component(Particle)]
fn particle(props: &ParticleProps) -> Html {
    let node = use_node_ref();
    let i = props.index as f64;
    use_looping(
        &node,
        Tween::new(PropertySet::new().y(0.0))
            .repeat(Repeat::Forever)
            .yoyo(true)
            .delay(0.2 * i)
            .with_target(PropertySet::new().y(-30.0), 3.0 + 0.5 * i, Ease::Power1InOut),
    );
    html! { <div ref={node} class={classes!("particle", "motion", props.class)} /> }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: String,
    pub content: FooterContent,
    pub sections: Vec<Section>,
}

const PARTICLES: [&str; 3] = ["particle-a", "particle-b", "particle-c"];

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer_ref = use_node_ref();

    use_reveal(
        &footer_ref,
        TriggerBinding::on_enter(config::footer_threshold(), ReplayPolicy::Toggle),
        vec![AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).y(60.0).blur(10.0),
            1.0,
        )],
    );

    html! {
        <footer ref={footer_ref} class="site-footer motion">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 5rem 4rem;
                        overflow: hidden;
                        background: var(--gradient-hero);
                    }
                    .site-footer .footer-decor {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .site-footer .footer-decor > * { position: absolute; }
                    .site-footer .orb-a { top: 2.5rem; left: 2.5rem; }
                    .site-footer .orb-b { top: 5rem; right: 5rem; }
                    .site-footer .orb-c { bottom: 5rem; left: 25%; }
                    .site-footer .orb-d { bottom: 2.5rem; right: 33%; }
                    .particle { border-radius: 9999px; }
                    .particle-a { top: 25%; left: 33%; width: 0.5rem; height: 0.5rem; background: var(--primary); opacity: 0.6; }
                    .particle-b { top: 75%; right: 25%; width: 0.75rem; height: 0.75rem; background: var(--accent); opacity: 0.4; }
                    .particle-c { bottom: 33%; left: 20%; width: 0.5rem; height: 0.5rem; background: var(--secondary); opacity: 0.5; }
                    .site-footer .footer-body {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .site-footer .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .site-footer .footer-links button {
                        display: block;
                        margin-bottom: 0.5rem;
                        background: none;
                        border: none;
                        color: var(--muted-foreground);
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .site-footer .footer-links button:hover { color: var(--primary); }
                    .site-footer .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        color: var(--muted-foreground);
                    }
                "#}
            </style>
            <div class="footer-decor">
                <GlowingOrb size={OrbSize::Small} tone={Tone::Primary} class="orb-a" />
                <GlowingOrb size={OrbSize::Small} tone={Tone::Secondary} class="orb-b" />
                <GlowingOrb size={OrbSize::Small} tone={Tone::Accent} class="orb-c" />
                <GlowingOrb size={OrbSize::Small} tone={Tone::Primary} class="orb-d" />
                { for PARTICLES.iter().enumerate().map(|(index, class)| html! {
                    <Particle {index} class={*class} />
                }) }
            </div>
            <div class="footer-body">
                <div class="footer-grid">
                    <div>
                        <h3 class="text-gradient">{ &props.brand }</h3>
                        <p class="muted">{ &props.content.tagline }</p>
                    </div>
                    <div class="footer-links">
                        <h4>{"Navigation"}</h4>
                        { for props.sections.iter().enumerate().map(|(i, section)| {
                            let anchor = section.anchor.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                dom::scroll_to_anchor(&anchor, i == 0);
                            });
                            html! { <button key={section.id.clone()} {onclick}>{ &section.label }</button> }
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ &props.content.copyright }</p>
                    <p>{"Made with ♥ "}{ &props.content.credit }</p>
                </div>
            </div>
        </footer>
    }
}
