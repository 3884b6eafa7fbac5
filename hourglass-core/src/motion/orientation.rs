//! Gravity and orientation types

/// Corrected gravity reading in sensor units (x, y, z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GravityVector(pub [i16; 3]);

impl GravityVector {
    pub const fn x(&self) -> i16 {
        self.0[0]
    }

    pub const fn y(&self) -> i16 {
        self.0[1]
    }

    pub const fn z(&self) -> i16 {
        self.0[2]
    }

    /// Gravity projected on the display plane, rotated by 45°
    ///
    /// The hourglass stands on a matrix corner, so the plane axes are the
    /// diagonals of the x/z sensor plane.
    pub fn tilt45(&self) -> Tilt {
        let (x, z) = (self.x() as i32, self.z() as i32);
        Tilt { x: -z - x, y: -x + z }
    }
}

/// Gravity in matrix coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tilt {
    pub x: i32,
    pub y: i32,
}

/// One classified accelerometer sample as broadcast to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    pub gravity: GravityVector,
    pub tilt: Tilt,
    pub orientation: Orientation,
}

/// Axis dominating gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// x axis: lying on a side
    Side,
    /// y axis: display facing up or down
    Face,
    /// z axis: standing on an edge, sand flows
    Edge,
}

impl Category {
    /// Categories in axis order
    pub const ALL: [Category; 3] = [Category::Side, Category::Face, Category::Edge];

    /// Sensor axis index of this category
    pub const fn axis(self) -> usize {
        match self {
            Category::Side => 0,
            Category::Face => 1,
            Category::Edge => 2,
        }
    }
}

/// Sign of the dominant axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    /// Sign of a reading, zero counting as positive
    pub fn of(value: impl Into<i32>) -> Self {
        if value.into() < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }
}

/// Hysteretic orientation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    pub category: Category,
    pub sign: Sign,
}

impl Orientation {
    /// Device lying with the display up
    pub const FACE_UP: Orientation = Orientation::new(Category::Face, Sign::Positive);

    pub const fn new(category: Category, sign: Sign) -> Self {
        Self { category, sign }
    }

    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::FACE_UP
    }
}
