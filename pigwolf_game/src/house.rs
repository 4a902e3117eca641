use lazy_static::lazy_static;
use log::debug;

use crate::error::GameError;
use crate::mask::TileMask;
use crate::point::Point;
use crate::projection::{project, to_board};
use crate::Result;

/// Footprint size used by the shape catalog. Odd so that every quarter turn
/// about the center cell stays inside the mask.
pub const MASK_DIM: usize = 7;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Orientation {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Orientation {
    pub const COUNT: u8 = 4;

    fn from_index(val: u8) -> Orientation {
        match val % Self::COUNT {
            0 => Orientation::Right,
            1 => Orientation::Down,
            2 => Orientation::Left,
            _ => Orientation::Up,
        }
    }

    /// The next orientation clockwise.
    pub fn next(&self) -> Orientation {
        Self::from_index(*self as u8 + 1)
    }

    /// Clockwise quarter turns away from `Right`.
    pub fn quarter_turns(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum HouseKind {
    Stick = 0,
    Gun = 1,
    Corner = 2,
}

const STICK_OFFSETS: [Point; 4] = [
    Point::new(0, 0),
    Point::new(0, 1),
    Point::new(0, 2),
    Point::new(0, 3),
];
const GUN_OFFSETS: [Point; 4] = [
    Point::new(0, 0),
    Point::new(0, 1),
    Point::new(0, 2),
    Point::new(1, 0),
];
const CORNER_OFFSETS: [Point; 3] = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 0)];

lazy_static! {
    // Built once, in catalog order, anchored at the board origin.
    static ref CATALOG: Result<Vec<House>> = HouseKind::ALL
        .iter()
        .map(|kind| House::construct(kind.offsets(), Point::default()))
        .collect();
}

impl HouseKind {
    pub const ALL: [HouseKind; 3] = [HouseKind::Stick, HouseKind::Gun, HouseKind::Corner];

    /// Occupied cells relative to the mask center, facing `Right`.
    pub fn offsets(&self) -> &'static [Point] {
        match self {
            HouseKind::Stick => &STICK_OFFSETS,
            HouseKind::Gun => &GUN_OFFSETS,
            HouseKind::Corner => &CORNER_OFFSETS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HouseKind::Stick => "stick",
            HouseKind::Gun => "gun",
            HouseKind::Corner => "corner",
        }
    }

    /// A fresh house of this shape. The footprint is an owned copy of the
    /// catalog template, so no two houses ever share a mask.
    pub fn build(&self, anchor: Point) -> Result<House> {
        let mut house = catalog()?[*self as usize].clone();
        house.set_anchor(anchor);
        Ok(house)
    }
}

fn catalog() -> Result<&'static [House]> {
    match &*CATALOG {
        Ok(houses) => Ok(houses.as_slice()),
        Err(e) => Err(e.clone()),
    }
}

/// Checks every catalog shape against the mask bounds.
pub fn validate_catalog() -> Result<()> {
    let houses = catalog()?;
    for (kind, house) in HouseKind::ALL.iter().zip(houses) {
        debug!(
            "Catalog shape '{}' holds {} cell(s)",
            kind.name(),
            house.footprint().count_set()
        );
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    shape: Vec<Point>,
    footprint: TileMask,
    orientation: Orientation,
    anchor: Point,
}

impl House {
    /// Builds a house on a catalog-sized mask.
    pub fn construct(offsets: &[Point], anchor: Point) -> Result<Self> {
        Self::with_mask_dim(offsets, MASK_DIM, anchor)
    }

    pub fn with_mask_dim(offsets: &[Point], dim: usize, anchor: Point) -> Result<Self> {
        let mut shape: Vec<Point> = Vec::with_capacity(offsets.len());
        for offset in offsets {
            if !shape.contains(offset) {
                shape.push(*offset);
            }
        }

        let orientation = Orientation::Right;
        let footprint = build_footprint(&shape, dim, orientation)?;
        Ok(Self {
            shape,
            footprint,
            orientation,
            anchor,
        })
    }

    pub fn footprint(&self) -> &TileMask {
        &self.footprint
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Rotates the house one quarter turn clockwise, footprint included.
    pub fn flip(&mut self) -> Result<()> {
        let next = self.orientation.next();
        self.footprint = build_footprint(&self.shape, self.footprint.dim(), next)?;
        self.orientation = next;
        Ok(())
    }

    /// Board cells covered by the footprint at its current anchor.
    pub fn cells(&self) -> Vec<Point> {
        let center = self.footprint.center();
        self.footprint
            .iter_set()
            .map(|cell| self.anchor + cell - center)
            .collect()
    }

    /// Board cells covered by both houses.
    pub fn overlapping_cells(&self, other: &House) -> Result<Vec<Point>> {
        let mine = project(&self.footprint, self.anchor)?;
        let theirs = project(&other.footprint, other.anchor)?;
        Ok(mine.shared_cells(&theirs).map(to_board).collect())
    }

    pub fn overlaps(&self, other: &House) -> Result<bool> {
        let mine = project(&self.footprint, self.anchor)?;
        let theirs = project(&other.footprint, other.anchor)?;
        Ok(mine.intersects(&theirs))
    }
}

fn build_footprint(shape: &[Point], dim: usize, orientation: Orientation) -> Result<TileMask> {
    let mut mask = TileMask::new(dim);
    let center = mask.center();
    for offset in shape {
        let malformed = GameError::MalformedShape {
            offset: *offset,
            dim,
        };
        let rotated = (0..orientation.quarter_turns())
            .try_fold(*offset, |p, _| p.checked_rotate_cw())
            .ok_or_else(|| malformed.clone())?;
        let cell = center.checked_add(rotated).ok_or_else(|| malformed.clone())?;
        if !mask.set(cell) {
            return Err(GameError::MalformedShape {
                offset: rotated,
                dim,
            });
        }
    }
    Ok(mask)
}
