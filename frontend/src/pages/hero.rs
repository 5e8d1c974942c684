use yew::prelude::*;

use crate::components::glowing_orb::{GlowingOrb, OrbSize};
use crate::config;
use crate::content::{HeroContent, Tone};
use crate::hooks::{use_hover, use_reveal};
use crate::motion::props::PropertySet;
use crate::motion::schedule::{AnimationStage, Target};
use crate::motion::sequencer::TriggerBinding;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

fn intro() -> Vec<AnimationStage> {
    let rise = PropertySet::new().opacity(0.0).y(50.0).blur(10.0);
    vec![
        AnimationStage::reveal(Target::select(".hero-headline"), rise.clone(), 1.2),
        AnimationStage::reveal(Target::select(".hero-subtitle"), rise.clone(), 1.0)
            .order(1.0)
            .overlap(0.6),
        AnimationStage::reveal(Target::select(".hero-cta"), rise, 0.8)
            .order(2.0)
            .overlap(0.4),
        AnimationStage::reveal(
            Target::select(".hero-showcase"),
            PropertySet::new().opacity(0.0).x(100.0).blur(10.0),
            1.5,
        )
        .order(3.0)
        .overlap(0.8),
    ]
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let root = use_node_ref();
    let cta = use_node_ref();

    use_reveal(
        &root,
        TriggerBinding::on_mount().delay(config::INTRO_DELAY_SECS),
        intro(),
    );
    let cta_hover = use_hover(&cta, PropertySet::new().scale(1.05), 0.3);

    let content = &props.content;
    html! {
        <div ref={root} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 4rem;
                        padding: 0 4rem;
                        overflow: hidden;
                        background: var(--gradient-hero);
                    }
                    .hero .hero-orbs { position: absolute; inset: 0; pointer-events: none; }
                    .hero .hero-orbs > * { position: absolute; }
                    .hero .orb-a { top: 5rem; left: 5rem; }
                    .hero .orb-b { bottom: 8rem; left: 8rem; }
                    .hero .orb-c { top: 50%; right: 25%; }
                    .hero .hero-copy { flex: 1; max-width: 48rem; z-index: 10; }
                    .hero .hero-headline { font-size: 5rem; font-weight: 700; line-height: 1.1; margin-bottom: 1.5rem; }
                    .hero .hero-headline span { display: block; }
                    .hero .hero-subtitle { font-size: 1.5rem; max-width: 42rem; margin-bottom: 2rem; line-height: 1.6; }
                    .hero .hero-cta { display: inline-block; }
                    .hero .hero-cta button { padding: 1rem 2rem; font-size: 1.125rem; font-weight: 600; cursor: pointer; }
                    .hero .hero-showcase {
                        flex: 1;
                        height: 24rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        text-align: center;
                    }
                    .hero .showcase-core {
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        background: var(--gradient-primary);
                    }
                    @media (max-width: 1024px) {
                        .hero { padding: 0 2rem; }
                        .hero .hero-headline { font-size: 3.5rem; }
                        .hero .hero-showcase { display: none; }
                    }
                "#}
            </style>
            <div class="hero-orbs">
                <GlowingOrb size={OrbSize::Large} tone={Tone::Primary} class="orb-a" />
                <GlowingOrb size={OrbSize::Medium} tone={Tone::Secondary} class="orb-b" />
                <GlowingOrb size={OrbSize::Small} tone={Tone::Accent} class="orb-c" />
            </div>
            <div class="hero-copy">
                <h1 class="hero-headline motion">
                    <span class="text-gradient">{ &content.greeting }</span>
                    <span>{ &content.role }</span>
                </h1>
                <p class="hero-subtitle muted motion">{ &content.tagline }</p>
                <div class="hero-cta motion">
                    <button
                        ref={cta}
                        class="glass-card motion"
                        onmouseenter={cta_hover.onmouseenter}
                        onmouseleave={cta_hover.onmouseleave}
                    >
                        { &content.cta }
                    </button>
                </div>
            </div>
            <div class="hero-showcase glass-card motion">
                <div>
                    <div class="showcase-core"></div>
                    <p class="muted">{ &content.showcase_title }</p>
                    <p class="muted small">{ &content.showcase_note }</p>
                </div>
            </div>
        </div>
    }
}
