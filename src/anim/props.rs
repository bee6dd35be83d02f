/// Numeric properties a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    Scale,
    Rotation,
    RotateX,
    Opacity,
    Brightness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
}

impl PointerEvents {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
        }
    }
}

/// A partial set of property values, built fluently:
/// `Props::new().y(400.0).opacity(0.0)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: Vec<(Prop, f64)>,
    pointer_events: Option<PointerEvents>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: Prop, value: f64) -> Self {
        match self.values.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.values.push((prop, value)),
        }
        self
    }

    pub fn x(self, value: f64) -> Self {
        self.set(Prop::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.set(Prop::Y, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.set(Prop::Scale, value)
    }

    pub fn rotation(self, degrees: f64) -> Self {
        self.set(Prop::Rotation, degrees)
    }

    pub fn rotate_x(self, degrees: f64) -> Self {
        self.set(Prop::RotateX, degrees)
    }

    pub fn opacity(self, value: f64) -> Self {
        self.set(Prop::Opacity, value)
    }

    pub fn brightness(self, value: f64) -> Self {
        self.set(Prop::Brightness, value)
    }

    pub fn pointer_events(mut self, value: PointerEvents) -> Self {
        self.pointer_events = Some(value);
        self
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values.iter().find(|(p, _)| *p == prop).map(|(_, v)| *v)
    }

    pub fn values(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn pointer(&self) -> Option<PointerEvents> {
        self.pointer_events
    }
}

/// Fully resolved visual state of one target. `brightness` and
/// `pointer_events` stay `None` unless something animates them, so the
/// element keeps whatever its stylesheet says.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub rotate_x: f64,
    pub opacity: f64,
    pub brightness: Option<f64>,
    pub pointer_events: Option<PointerEvents>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            rotate_x: 0.0,
            opacity: 1.0,
            brightness: None,
            pointer_events: None,
        }
    }
}

impl Style {
    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::Scale => self.scale,
            Prop::Rotation => self.rotation,
            Prop::RotateX => self.rotate_x,
            Prop::Opacity => self.opacity,
            Prop::Brightness => self.brightness.unwrap_or(1.0),
        }
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        let slot = match prop {
            Prop::X => &mut self.x,
            Prop::Y => &mut self.y,
            Prop::Scale => &mut self.scale,
            Prop::Rotation => &mut self.rotation,
            Prop::RotateX => &mut self.rotate_x,
            Prop::Opacity => &mut self.opacity,
            Prop::Brightness => {
                self.brightness = Some(value);
                return;
            }
        };
        *slot = value;
    }

    pub fn apply(&mut self, props: &Props) {
        for (prop, value) in props.values() {
            self.set(prop, value);
        }
        if let Some(pointer) = props.pointer() {
            self.pointer_events = Some(pointer);
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0px) rotate({:.3}deg) rotateX({:.3}deg) scale({:.4})",
            self.x, self.y, self.rotation, self.rotate_x, self.scale
        )
    }

    pub fn filter(&self) -> Option<String> {
        self.brightness.map(|b| format!("brightness({:.3})", b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_setter_wins() {
        let props = Props::new().y(10.0).y(20.0);
        assert_eq!(props.get(Prop::Y), Some(20.0));
        assert_eq!(props.values().count(), 1);
    }

    #[test]
    fn apply_keeps_untouched_fields() {
        let mut style = Style::default();
        style.apply(&Props::new().opacity(0.0).pointer_events(PointerEvents::None));
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.pointer_events, Some(PointerEvents::None));
        assert_eq!(style.brightness, None);
    }

    #[test]
    fn untouched_style_emits_no_filter() {
        let mut style = Style::default();
        assert_eq!(style.filter(), None);
        assert_eq!(style.get(Prop::Brightness), 1.0);
        style.set(Prop::Brightness, 0.7);
        assert_eq!(style.filter().as_deref(), Some("brightness(0.700)"));
    }

    #[test]
    fn transform_lists_every_component() {
        let style = Style { x: 5.0, y: -2.5, ..Style::default() };
        assert_eq!(
            style.transform(),
            "translate3d(5.00px, -2.50px, 0px) rotate(0.000deg) rotateX(0.000deg) scale(1.0000)"
        );
    }
}
