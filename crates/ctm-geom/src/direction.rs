use crate::Vec3;

/// One of the six axis-aligned directions of a voxel grid.
///
/// Declaration order is the stable iteration order used everywhere a set of
/// directions is walked.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

/// Axis a direction runs along.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

const OFFSETS: [(i32, i32, i32); 6] = [
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
    (-1, 0, 0),
    (1, 0, 0),
];

const UNITS: [Vec3; 6] = [
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
];

const OPPOSITES: [Direction; 6] = [
    Direction::Up,
    Direction::Down,
    Direction::South,
    Direction::North,
    Direction::East,
    Direction::West,
];

// Cyclic: consecutive entries (wrapping) share a face corner, and each cycle runs
// clockwise seen from the positive end of the face axis.
const EDGES: [[Direction; 4]; 6] = [
    [Direction::North, Direction::East, Direction::South, Direction::West],
    [Direction::North, Direction::East, Direction::South, Direction::West],
    [Direction::Up, Direction::East, Direction::Down, Direction::West],
    [Direction::Up, Direction::East, Direction::Down, Direction::West],
    [Direction::Down, Direction::South, Direction::Up, Direction::North],
    [Direction::Down, Direction::South, Direction::Up, Direction::North],
];

const NAMES: [&str; 6] = ["down", "up", "north", "south", "west", "east"];

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into a direction.
    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Self::ALL.get(i).copied()
    }

    /// Integer grid step `(dx,dy,dz)` taken when moving in this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32, i32) {
        OFFSETS[self.index()]
    }

    /// Unit vector pointing in this direction.
    #[inline]
    pub fn unit(self) -> Vec3 {
        UNITS[self.index()]
    }

    #[inline]
    pub fn scaled(self, s: f32) -> Vec3 {
        self.unit() * s
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        OPPOSITES[self.index()]
    }

    /// True for `Up`, `South` and `East`.
    #[inline]
    pub fn is_positive(self) -> bool {
        let (dx, dy, dz) = self.offset();
        dx > 0 || dy > 0 || dz > 0
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// The four in-plane edge directions of a face, in cyclic order.
    #[inline]
    pub fn edges(self) -> [Direction; 4] {
        EDGES[self.index()]
    }

    /// True when `self` lies in the plane of `face` (dot product with its normal is zero).
    #[inline]
    pub fn is_edge_of(self, face: Direction) -> bool {
        self.axis() != face.axis()
    }

    /// Lower-case name used in config files.
    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    pub fn from_name(s: &str) -> Option<Direction> {
        NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(s))
            .and_then(Direction::from_index)
    }
}

/// Compact set of directions, iterated in declaration order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirSet(u8);

impl DirSet {
    pub const EMPTY: DirSet = DirSet(0);
    pub const ALL: DirSet = DirSet(0b11_1111);

    /// The four edge directions of `face`.
    #[inline]
    pub fn edges_of(face: Direction) -> DirSet {
        face.edges().into_iter().collect()
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        (self.0 >> dir.index()) & 1 == 1
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= 1 << dir.index();
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !(1 << dir.index());
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut s = DirSet::EMPTY;
        for d in iter {
            s.insert(d);
        }
        s
    }
}

impl core::fmt::Debug for DirSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter().map(Direction::name)).finish()
    }
}

impl Vec3 {
    /// Component of `self` along the axis of `dir`.
    #[inline]
    pub fn along(self, dir: Direction) -> f32 {
        match dir.axis() {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert_eq!(d.unit() + d.opposite().unit(), Vec3::ZERO);
        }
    }

    #[test]
    fn edges_are_orthogonal_to_face() {
        for face in Direction::ALL {
            let edges = face.edges();
            for e in edges {
                assert_eq!(e.unit().dot(face.unit()), 0.0, "{face:?} {e:?}");
                assert!(e.is_edge_of(face));
            }
            // All four distinct and closed under opposite.
            for e in edges {
                assert!(edges.contains(&e.opposite()));
                assert_eq!(edges.iter().filter(|x| **x == e).count(), 1);
            }
        }
    }

    #[test]
    fn consecutive_edges_share_a_corner() {
        for face in Direction::ALL {
            let edges = face.edges();
            for i in 0..4 {
                let a = edges[i];
                let b = edges[(i + 1) % 4];
                assert_ne!(a.axis(), b.axis(), "{face:?}: {a:?} then {b:?}");
            }
        }
    }

    #[test]
    fn edge_cycles_share_one_orientation() {
        for face in Direction::ALL {
            let axis_pos = if face.is_positive() { face } else { face.opposite() };
            let edges = face.edges();
            for i in 0..4 {
                let n = edges[i].unit().cross(edges[(i + 1) % 4].unit());
                assert_eq!(n, -axis_pos.unit(), "{face:?}");
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_name(d.name()), Some(d));
        }
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("sideways"), None);
    }

    #[test]
    fn positive_directions() {
        let pos: Vec<_> = Direction::ALL.into_iter().filter(|d| d.is_positive()).collect();
        assert_eq!(pos, vec![Direction::Up, Direction::South, Direction::East]);
    }

    #[test]
    fn dirset_basics() {
        let mut s = DirSet::edges_of(Direction::Up);
        assert_eq!(s.len(), 4);
        assert!(!s.contains(Direction::Up) && !s.contains(Direction::Down));
        s.remove(Direction::North);
        assert!(!s.contains(Direction::North));
        let order: Vec<_> = s.iter().collect();
        assert_eq!(order, vec![Direction::South, Direction::West, Direction::East]);
        assert_eq!(DirSet::ALL.len(), 6);
        assert!(DirSet::EMPTY.is_empty());
        assert_eq!(format!("{:?}", DirSet::EMPTY), "{}");
    }
}
