/// One of the level-triggered view controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    IterationsUp,
    IterationsDown,
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
}

impl Control {
    pub const ALL: &'static [Self] = &[
        Self::IterationsUp,
        Self::IterationsDown,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::PanUp,
        Self::PanDown,
        Self::PanLeft,
        Self::PanRight,
    ];
}

/// Which controls were held when the frame started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlsSnapshot {
    pub iterations_up: bool,
    pub iterations_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub pan_left: bool,
    pub pan_right: bool,
}

impl ControlsSnapshot {
    #[must_use]
    pub fn holding(controls: &[Control]) -> Self {
        let mut snapshot = Self::default();
        for &control in controls {
            *snapshot.flag_mut(control) = true;
        }
        snapshot
    }

    #[must_use]
    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::IterationsUp => self.iterations_up,
            Control::IterationsDown => self.iterations_down,
            Control::ZoomIn => self.zoom_in,
            Control::ZoomOut => self.zoom_out,
            Control::PanUp => self.pan_up,
            Control::PanDown => self.pan_down,
            Control::PanLeft => self.pan_left,
            Control::PanRight => self.pan_right,
        }
    }

    #[must_use]
    pub fn any_held(&self) -> bool {
        Control::ALL.iter().any(|&control| self.is_held(control))
    }

    pub fn set(&mut self, control: Control, held: bool) {
        *self.flag_mut(control) = held;
    }

    fn flag_mut(&mut self, control: Control) -> &mut bool {
        match control {
            Control::IterationsUp => &mut self.iterations_up,
            Control::IterationsDown => &mut self.iterations_down,
            Control::ZoomIn => &mut self.zoom_in,
            Control::ZoomOut => &mut self.zoom_out,
            Control::PanUp => &mut self.pan_up,
            Control::PanDown => &mut self.pan_down,
            Control::PanLeft => &mut self.pan_left,
            Control::PanRight => &mut self.pan_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Control, ControlsSnapshot};

    #[test]
    fn default_snapshot_is_all_false() {
        let snapshot = ControlsSnapshot::default();

        assert!(!snapshot.any_held());
        for &control in Control::ALL {
            assert!(!snapshot.is_held(control));
        }
    }

    #[test]
    fn holding_sets_only_named_controls() {
        let snapshot = ControlsSnapshot::holding(&[Control::ZoomIn, Control::PanLeft]);

        assert!(snapshot.any_held());
        for &control in Control::ALL {
            let expected = matches!(control, Control::ZoomIn | Control::PanLeft);
            assert_eq!(snapshot.is_held(control), expected, "{:?}", control);
        }
    }

    #[test]
    fn set_toggles_individual_flags() {
        let mut snapshot = ControlsSnapshot::default();

        snapshot.set(Control::IterationsDown, true);
        assert!(snapshot.iterations_down);

        snapshot.set(Control::IterationsDown, false);
        assert!(!snapshot.any_held());
    }
}
