/// Environment signals read once at startup and handed to each component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub prefers_dark: bool,
    pub intersection_observer: bool,
}

impl Capabilities {
    /// Full motion, light scheme, observation available.
    pub fn full_motion() -> Self {
        Self {
            reduced_motion: false,
            prefers_dark: false,
            intersection_observer: true,
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.prefers_dark = dark;
        self
    }

    pub fn with_intersection_observer(mut self, available: bool) -> Self {
        self.intersection_observer = available;
        self
    }

    pub fn allows_reveal(&self) -> bool {
        !self.reduced_motion && self.intersection_observer
    }

    pub fn allows_parallax(&self) -> bool {
        !self.reduced_motion
    }
}
