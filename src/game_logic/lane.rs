/// Discrete lateral position of a car on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub fn index(self) -> i8 {
        match self {
            Lane::Left => -1,
            Lane::Center => 0,
            Lane::Right => 1,
        }
    }

    /// Clamps anything outside -1..=1 to the nearest edge lane.
    pub fn from_index(index: i8) -> Self {
        match index {
            i8::MIN..=-1 => Lane::Left,
            0 => Lane::Center,
            1..=i8::MAX => Lane::Right,
        }
    }

    pub fn shift_left(self) -> Self {
        Self::from_index(self.index() - 1)
    }

    pub fn shift_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// World-space x of the lane centre.
    pub fn center_x(self, lane_width: f32) -> f32 {
        self.index() as f32 * lane_width
    }
}
