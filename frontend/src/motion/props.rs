use std::collections::BTreeMap;

/// A single animatable visual property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Opacity,
    /// Gaussian blur radius in px.
    Blur,
    /// Horizontal translation in px.
    X,
    /// Vertical translation in px.
    Y,
    Scale,
    /// Rotation in degrees.
    Rotation,
    /// Width as a percentage of the parent.
    Width,
}

impl Property {
    /// Value the property has when nothing animates it.
    pub fn rest(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::Width => 100.0,
            Self::Blur | Self::X | Self::Y | Self::Rotation => 0.0,
        }
    }

    /// Transform-only properties, the ones pointer micro-interactions may drive.
    pub fn is_transform(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Scale | Self::Rotation)
    }

    fn css_suffix(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Blur => "blur",
            Self::X => "x",
            Self::Y => "y",
            Self::Scale => "scale",
            Self::Rotation => "rotate",
            Self::Width => "width",
        }
    }

    fn css_value(self, v: f64) -> String {
        match self {
            Self::Opacity | Self::Scale => format!("{v:.4}"),
            Self::Blur | Self::X | Self::Y => format!("{v:.2}px"),
            Self::Rotation => format!("{v:.2}deg"),
            Self::Width => format!("{v:.2}%"),
        }
    }
}

/// Which style layer a set of values is written to. Layers use separate CSS
/// custom properties and are composed by the motion stylesheet, so a hover
/// tween and a reveal sequence on the same element never overwrite each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Reveal,
    Hover,
}

impl Layer {
    fn prefix(self) -> &'static str {
        match self {
            Self::Reveal => "--reveal",
            Self::Hover => "--hover",
        }
    }
}

/// Property values keyed by [`Property`]. Missing keys mean "at rest".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySet {
    values: BTreeMap<Property, f64>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Property, value: f64) -> Self {
        self.values.insert(prop, value);
        self
    }

    pub fn opacity(self, v: f64) -> Self {
        self.with(Property::Opacity, v)
    }

    pub fn blur(self, v: f64) -> Self {
        self.with(Property::Blur, v)
    }

    pub fn x(self, v: f64) -> Self {
        self.with(Property::X, v)
    }

    pub fn y(self, v: f64) -> Self {
        self.with(Property::Y, v)
    }

    pub fn scale(self, v: f64) -> Self {
        self.with(Property::Scale, v)
    }

    pub fn rotation(self, v: f64) -> Self {
        self.with(Property::Rotation, v)
    }

    pub fn width(self, v: f64) -> Self {
        self.with(Property::Width, v)
    }

    /// The same keys as `self`, every one at its rest value.
    pub fn at_rest(&self) -> Self {
        Self {
            values: self.values.keys().map(|p| (*p, p.rest())).collect(),
        }
    }

    pub fn get(&self, prop: Property) -> Option<f64> {
        self.values.get(&prop).copied()
    }

    pub fn set(&mut self, prop: Property, value: f64) {
        self.values.insert(prop, value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    /// Overwrite `self` with every value present in `other`.
    pub fn merge(&mut self, other: &PropertySet) {
        for (prop, value) in other.iter() {
            self.values.insert(prop, value);
        }
    }

    /// Interpolate towards `to`. Keys only present in `from` are carried over
    /// unchanged; keys only present in `to` start from their rest value.
    pub fn lerp(from: &PropertySet, to: &PropertySet, t: f64) -> PropertySet {
        let mut out = from.clone();
        for (prop, end) in to.iter() {
            let start = from.get(prop).unwrap_or_else(|| prop.rest());
            out.values.insert(prop, start + (end - start) * t);
        }
        out
    }

    /// CSS declarations for this set on the given layer.
    pub fn css_declarations(&self, layer: Layer) -> Vec<(String, String)> {
        self.iter()
            .map(|(prop, value)| {
                let name = match prop {
                    Property::Width => "width".to_string(),
                    _ => format!("{}-{}", layer.prefix(), prop.css_suffix()),
                };
                (name, prop.css_value(value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_fills_missing_start_with_rest_value() {
        let from = PropertySet::new().opacity(0.0);
        let to = PropertySet::new().opacity(1.0).scale(2.0);
        let mid = PropertySet::lerp(&from, &to, 0.5);
        assert_eq!(mid.get(Property::Opacity), Some(0.5));
        assert_eq!(mid.get(Property::Scale), Some(1.5));
    }

    #[test]
    fn lerp_keeps_keys_only_in_from() {
        let from = PropertySet::new().blur(10.0).y(20.0);
        let to = PropertySet::new().y(0.0);
        let end = PropertySet::lerp(&from, &to, 1.0);
        assert_eq!(end.get(Property::Blur), Some(10.0));
        assert_eq!(end.get(Property::Y), Some(0.0));
    }

    #[test]
    fn layers_write_separate_custom_properties() {
        let set = PropertySet::new().scale(1.05).rotation(2.0);
        let reveal = set.css_declarations(Layer::Reveal);
        let hover = set.css_declarations(Layer::Hover);
        assert!(reveal.iter().any(|(k, v)| k == "--reveal-scale" && v == "1.0500"));
        assert!(hover.iter().any(|(k, v)| k == "--hover-rotate" && v == "2.00deg"));
    }

    #[test]
    fn width_is_written_directly() {
        let decls = PropertySet::new().width(42.0).css_declarations(Layer::Reveal);
        assert_eq!(decls, vec![("width".to_string(), "42.00%".to_string())]);
    }

    #[test]
    fn at_rest_keeps_keys() {
        let rest = PropertySet::new().opacity(0.0).x(-100.0).at_rest();
        assert_eq!(rest.get(Property::Opacity), Some(1.0));
        assert_eq!(rest.get(Property::X), Some(0.0));
        assert_eq!(rest.get(Property::Blur), None);
    }
}
