//! Animatable element state and its CSS rendering.

/// `will-change` hint applied while an element is animating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WillChange {
    Auto,
    Opacity,
    TransformOpacity,
}

impl WillChange {
    pub fn as_css(&self) -> &'static str {
        match self {
            WillChange::Auto => "auto",
            WillChange::Opacity => "opacity",
            WillChange::TransformOpacity => "transform, opacity",
        }
    }
}

/// Opacity plus a 2D offset (logical px) and rotation (degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl ElementStyle {
    /// Fully visible, no transform
    pub const SETTLED: ElementStyle = ElementStyle {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
    };

    /// Transparent, no transform
    pub const HIDDEN: ElementStyle = ElementStyle {
        opacity: 0.0,
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
    };

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Interpolate towards `to`. `t` is not clamped so overshooting eases work.
    pub fn lerp(&self, to: &ElementStyle, t: f64) -> ElementStyle {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        ElementStyle {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            rotation: mix(self.rotation, to.rotation),
        }
    }

    pub fn is_settled(&self) -> bool {
        const EPS: f64 = 1e-6;
        (self.opacity - 1.0).abs() < EPS
            && self.x.abs() < EPS
            && self.y.abs() < EPS
            && self.rotation.abs() < EPS
    }

    pub fn opacity_css(&self) -> String {
        css_number(self.opacity)
    }

    /// GPU-promoted transform value
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0px) rotate({}deg)",
            css_number(self.x),
            css_number(self.y),
            css_number(self.rotation)
        )
    }

    /// Inline `style` attribute value
    pub fn to_css(&self, hint: WillChange) -> String {
        format!(
            "opacity: {}; transform: {}; will-change: {};",
            self.opacity_css(),
            self.transform_css(),
            hint.as_css()
        )
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::SETTLED
    }
}

/// Round to 3 decimals and drop `-0`
fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
