use yew::prelude::*;

use crate::content::Tone;
use crate::hooks::use_looping;
use crate::motion::ease::Ease;
use crate::motion::props::PropertySet;
use crate::motion::tween::{Repeat, Tween};

const FLOAT_SECS: f64 = 3.0;
const PULSE_SECS: f64 = 2.0;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum OrbSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl OrbSize {
    fn class(self) -> &'static str {
        match self {
            OrbSize::Small => "orb-sm",
            OrbSize::Medium => "orb-md",
            OrbSize::Large => "orb-lg",
        }
    }
}

fn float_tween() -> Tween {
    Tween::new(PropertySet::new().y(0.0))
        .repeat(Repeat::Forever)
        .yoyo(true)
        .with_target(PropertySet::new().y(-30.0), FLOAT_SECS, Ease::Power1InOut)
}

fn pulse_tween() -> Tween {
    Tween::new(PropertySet::new().scale(1.0))
        .repeat(Repeat::Forever)
        .yoyo(true)
        .with_target(PropertySet::new().scale(1.1), PULSE_SECS, Ease::Power1InOut)
}

#[derive(Properties, PartialEq)]
pub struct GlowingOrbProps {
    #[prop_or_default]
    pub size: OrbSize,
    #[prop_or(Tone::Primary)]
    pub tone: Tone,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative blurred orb that floats and breathes forever. The float and
/// the pulse run on their own clocks.
#[function_component(GlowingOrb)]
pub fn glowing_orb(props: &GlowingOrbProps) -> Html {
    let orb = use_node_ref();
    use_looping(&orb, float_tween());
    use_looping(&orb, pulse_tween());

    html! {
        <div
            ref={orb}
            class={classes!("glowing-orb", "motion", props.size.class(), props.tone.class(), props.class.clone())}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::props::Property;
    use crate::motion::tween::Animated;

    fn run(tweens: &mut [&mut Tween], secs: f64) {
        let mut t = 0.0;
        while t < secs {
            for tween in tweens.iter_mut() {
                tween.tick(0.5);
            }
            t += 0.5;
        }
    }

    #[test]
    fn float_and_pulse_write_disjoint_properties() {
        let float = float_tween();
        let pulse = pulse_tween();
        assert_eq!(float.current().get(Property::Scale), None);
        assert_eq!(pulse.current().get(Property::Y), None);
    }

    #[test]
    fn pulse_peaks_before_the_float() {
        let mut float = float_tween();
        let mut pulse = pulse_tween();

        run(&mut [&mut float, &mut pulse], 2.0);
        let scale = pulse.current().get(Property::Scale).unwrap();
        let y = float.current().get(Property::Y).unwrap();
        assert!((scale - 1.1).abs() < 1e-6, "{scale}");
        assert!(y > -29.0, "{y}");

        run(&mut [&mut float, &mut pulse], 1.0);
        let scale = pulse.current().get(Property::Scale).unwrap();
        let y = float.current().get(Property::Y).unwrap();
        assert!((y + 30.0).abs() < 1e-6, "{y}");
        assert!(scale < 1.09, "{scale}");
        assert!(float.is_active() && pulse.is_active());
    }
}
