use std::rc::Rc;

use log::info;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::footer::Footer;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navigation::Navigation;
use crate::config;
use crate::content::SiteContent;
use crate::hooks::{use_reveal, MotionContext};
use crate::motion::cancel::MotionRegistry;
use crate::motion::props::PropertySet;
use crate::motion::schedule::{AnimationStage, Target};
use crate::motion::sequencer::TriggerBinding;
use crate::motion::tracker::Section;
use crate::pages::about::About;
use crate::pages::contact::Contact;
use crate::pages::hero::Hero;
use crate::pages::projects::Projects;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub content: Rc<SiteContent>,
}

/// Loading screen first, then the page. The switch happens once.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let ready = use_state(|| false);

    let on_loaded = {
        let ready = ready.clone();
        Callback::from(move |_| ready.set(true))
    };

    if *ready {
        html! { <PortfolioPage content={props.content.clone()} /> }
    } else {
        html! {
            <LoadingScreen
                brand={props.content.brand.clone()}
                caption={props.content.loading_caption.clone()}
                on_complete={on_loaded}
            />
        }
    }
}

#[derive(Default, PartialEq)]
struct RefreshEpoch(u32);

impl Reducible for RefreshEpoch {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[function_component(PortfolioPage)]
fn portfolio_page(props: &PortfolioProps) -> Html {
    let registry = use_memo(|_| MotionRegistry::default(), ());
    let epoch = use_reducer(RefreshEpoch::default);
    let content = &props.content;
    let sections = use_memo(|content| content.sections(), content.clone());

    // Runs after every child has mounted, so their geometry is real.
    {
        let epoch = epoch.dispatcher();
        use_effect_with_deps(
            move |_| {
                info!("Portfolio ready");
                epoch.dispatch(());
                || ()
            },
            (),
        );
    }

    {
        let epoch = epoch.dispatcher();
        use_event_with_window("resize", move |_: Event| epoch.dispatch(()));
    }

    {
        let registry = registry.clone();
        use_unmount(move || {
            info!("Tearing down {} timelines", registry.live());
            registry.cancel_all();
        });
    }

    let context = MotionContext {
        registry: (*registry).clone(),
        refresh_epoch: epoch.0,
    };

    html! {
        <ContextProvider<MotionContext> {context}>
            // Outside the animated container: its mobile drawer is fixed-position.
            <Navigation brand={content.brand.clone()} sections={(*sections).clone()} />
            <PageContent content={content.clone()} sections={(*sections).clone()} />
        </ContextProvider<MotionContext>>
    }
}

fn content_fade() -> Vec<AnimationStage> {
    vec![AnimationStage::reveal(
        Target::Root,
        PropertySet::new().opacity(0.0).blur(20.0),
        config::CONTENT_FADE_SECS,
    )]
}

#[derive(Properties, PartialEq)]
struct PageContentProps {
    content: Rc<SiteContent>,
    sections: Vec<Section>,
}

/// The fading container. Rendered under the provider so its fade is
/// registered with the page like every other timeline.
#[function_component(PageContent)]
fn page_content(props: &PageContentProps) -> Html {
    let container = use_node_ref();
    use_reveal(&container, TriggerBinding::on_mount(), content_fade());

    let content = &props.content;
    html! {
        <div ref={container} class="portfolio motion">
            <main>
                <section id="home">
                    <Hero content={content.hero.clone()} />
                </section>
                <About content={content.about.clone()} />
                <Projects content={content.projects.clone()} />
                <Contact content={content.contact.clone()} />
            </main>
            <Footer
                brand={content.brand.clone()}
                content={content.footer.clone()}
                sections={props.sections.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::props::Property;
    use crate::motion::sequencer::RevealSequencer;

    #[test]
    fn page_teardown_freezes_the_content_fade() {
        let registry = MotionRegistry::default();
        let mut fade = RevealSequencer::bind(TriggerBinding::on_mount(), content_fade()).unwrap();
        registry.register(fade.cancel_token());
        fade.start();
        fade.tick(config::CONTENT_FADE_SECS / 2.0);
        let frozen = fade.value(&Target::Root).unwrap().get(Property::Opacity).unwrap();
        assert!(frozen > 0.0 && frozen < 1.0, "{frozen}");

        registry.cancel_all();
        assert!(fade.is_cancelled());
        assert!(!fade.tick(config::CONTENT_FADE_SECS));
        assert_eq!(
            fade.value(&Target::Root).unwrap().get(Property::Opacity),
            Some(frozen)
        );
    }
}
