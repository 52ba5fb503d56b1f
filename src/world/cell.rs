use crate::world::direction::Direction;
use glam::{IVec3, Vec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// One cell of the voxel grid, addressed by integer world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos(pub IVec3);

impl Serialize for CellPos {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.0.x, self.0.y, self.0.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellPos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = <(i32, i32, i32)>::deserialize(deserializer)?;
        Ok(CellPos(IVec3::new(x, y, z)))
    }
}

impl PartialOrd for CellPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellPos {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.x.cmp(&other.0.x) {
            Ordering::Equal => match self.0.y.cmp(&other.0.y) {
                Ordering::Equal => self.0.z.cmp(&other.0.z),
                ord => ord,
            },
            ord => ord,
        }
    }
}

impl CellPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }

    /// The cell one step away along `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        Self(self.0 + direction.offset())
    }

    /// Continuous position of the cell's minimum corner.
    pub fn to_world(self) -> Vec3 {
        self.0.as_vec3()
    }

    /// Continuous position of the cell's midpoint.
    pub fn center(self) -> Vec3 {
        self.to_world() + Vec3::splat(0.5)
    }
}

impl Display for CellPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<IVec3> for CellPos {
    fn from(vec: IVec3) -> Self {
        Self(vec)
    }
}

impl From<CellPos> for IVec3 {
    fn from(pos: CellPos) -> Self {
        pos.0
    }
}
