use yew::prelude::*;

use crate::config;
use crate::content::{AboutContent, Skill};
use crate::hooks::{use_hover, use_reveal};
use crate::motion::ease::Ease;
use crate::motion::props::PropertySet;
use crate::motion::schedule::{AnimationStage, Target};
use crate::motion::sequencer::{ReplayPolicy, TriggerBinding};

/// Section-level fade shared by about, projects and contact.
pub fn section_fade() -> Vec<AnimationStage> {
    vec![AnimationStage::reveal(
        Target::Root,
        PropertySet::new().opacity(0.0).blur(10.0),
        1.0,
    )
    .ease(Ease::Power1Out)]
}

pub fn on_enter() -> TriggerBinding {
    TriggerBinding::on_enter(config::reveal_threshold(), ReplayPolicy::Toggle)
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    skill: Skill,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let icon = use_node_ref();
    let hover = use_hover(&icon, PropertySet::new().scale(1.2).rotation(360.0), 0.3);

    html! {
        <div
            class="skill-card glass-card motion"
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <span ref={icon} class={classes!("skill-icon", "motion", props.skill.tone.class())}>
                { &props.skill.icon }
            </span>
            <p class="muted">{ &props.skill.name }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let section = use_node_ref();
    let portrait = use_node_ref();
    let copy = use_node_ref();
    let skills = use_node_ref();
    let content = &props.content;

    use_reveal(&section, on_enter(), section_fade());
    use_reveal(
        &portrait,
        on_enter(),
        vec![AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).x(-100.0).rotation(-5.0),
            1.2,
        )],
    );
    use_reveal(
        &copy,
        on_enter(),
        vec![AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).x(100.0),
            1.2,
        )],
    );
    use_reveal(
        &skills,
        on_enter(),
        AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).y(60.0).scale(0.8),
            0.6,
        )
        .ease(Ease::BackOut)
        .stagger_children(content.skills.len(), 0.1),
    );
    let portrait_hover = use_hover(&portrait, PropertySet::new().scale(1.05).rotation(2.0), 0.4);

    html! {
        <section ref={section} id="about" class="page-section motion">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .portrait { display: flex; justify-content: center; cursor: pointer; }
                    .portrait-disc {
                        width: 20rem;
                        height: 20rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 3.75rem;
                        background: var(--gradient-primary);
                    }
                    .about-copy h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                    .about-copy p { font-size: 1.125rem; line-height: 1.7; margin-bottom: 1.5rem; }
                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                    }
                    .skill-card { padding: 1rem; border-radius: 0.5rem; text-align: center; cursor: pointer; }
                    .skill-icon { display: inline-block; font-size: 2rem; margin-bottom: 0.5rem; }
                    @media (max-width: 768px) {
                        .skills-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="section-inner">
                <h2 class="section-title text-gradient">{ &content.title }</h2>
                <div class="about-grid">
                    <div
                        ref={portrait}
                        class="portrait motion"
                        onmouseenter={portrait_hover.onmouseenter}
                        onmouseleave={portrait_hover.onmouseleave}
                    >
                        <div class="portrait-disc glass-card">{ &content.monogram }</div>
                    </div>
                    <div ref={copy} class="about-copy motion">
                        <h3>{ &content.heading }</h3>
                        { for content.paragraphs.iter().map(|p| html! { <p class="muted">{ p }</p> }) }
                        <h4>{ &content.skills_title }</h4>
                        <div ref={skills} class="skills-grid">
                            { for content.skills.iter().map(|skill| html! {
                                <SkillCard key={skill.name.clone()} skill={skill.clone()} />
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
