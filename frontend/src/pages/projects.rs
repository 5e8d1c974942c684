use yew::prelude::*;

use crate::content::{Project, ProjectsContent};
use crate::hooks::{use_hover, use_reveal};
use crate::motion::props::PropertySet;
use crate::motion::schedule::{AnimationStage, Target};
use crate::pages::about::{on_enter, section_fade};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let card = use_node_ref();
    let hover = use_hover(&card, PropertySet::new().y(-10.0).scale(1.02), 0.4);
    let project = &props.project;

    html! {
        <div
            ref={card}
            class={classes!("project-card", "glass-card", "motion", project.featured.then_some("featured"))}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <div class="project-image">
                <img src={project.image.clone()} alt={project.title.clone()} />
            </div>
            <h3>{ &project.title }</h3>
            <p class="muted">{ &project.description }</p>
            <div class="tech-list">
                { for project.tech.iter().map(|tech| html! { <span class="tech-pill">{ tech }</span> }) }
            </div>
            <button class="glass-card project-cta">{"View Project"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub content: ProjectsContent,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let section = use_node_ref();
    let cards = use_node_ref();
    let content = &props.content;

    use_reveal(&section, on_enter(), section_fade());
    use_reveal(
        &cards,
        on_enter(),
        AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).y(100.0).scale(0.8).blur(10.0),
            0.8,
        )
        .stagger_children(content.items.len(), 0.2),
    );

    html! {
        <section ref={section} id="projects" class="page-section motion">
            <style>
                {r#"
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .project-card { padding: 1.5rem; border-radius: 1rem; cursor: pointer; }
                    .project-card.featured { grid-column: span 2; }
                    .project-card h3 { font-size: 1.5rem; font-weight: 700; margin: 1rem 0; }
                    .project-image { overflow: hidden; border-radius: 0.75rem; margin-bottom: 1.5rem; }
                    .project-image img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .project-card:hover .project-image img { transform: scale(1.1); }
                    .tech-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .tech-pill {
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        color: var(--muted-foreground);
                    }
                    .project-cta { width: 100%; margin-top: 1rem; padding: 0.75rem; cursor: pointer; }
                    @media (max-width: 1024px) {
                        .projects-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .projects-grid { grid-template-columns: 1fr; }
                        .project-card.featured { grid-column: auto; }
                    }
                "#}
            </style>
            <div class="section-inner">
                <h2 class="section-title text-gradient">{ &content.title }</h2>
                <p class="section-intro muted">{ &content.intro }</p>
                <div ref={cards} class="projects-grid">
                    { for content.items.iter().map(|project| html! {
                        <ProjectCard key={project.id} project={project.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
