use log::trace;
use std::fmt;

use crate::error::GameError;
use crate::house::House;
use crate::point::Point;
use crate::Result;

pub const WOLF_NAME: &str = "wolf";

/// Anything that occupies a single board cell.
pub trait Actor: fmt::Display {
    fn position(&self) -> Point;
    fn name(&self) -> &str;
    fn move_to(&mut self, position: Point);

    fn as_pig(&self) -> Option<&Pig> {
        None
    }

    /// Pure and re-evaluated on every call.
    fn collides_with(&self, other: &dyn Actor) -> Result<bool> {
        Ok(cell_collision(self, other))
    }
}

/// Same-cell occupancy.
fn cell_collision<A: Actor + ?Sized>(me: &A, other: &dyn Actor) -> bool {
    me.position() == other.position()
}

macro_rules! impl_actor_display {
    ($actor:ty) => {
        impl fmt::Display for $actor {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "name={}, position={}", self.name(), self.position())
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pig {
    position: Point,
    name: String,
    house: Option<House>,
}

impl Pig {
    pub fn new(position: Point, house: Option<House>, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            house,
        }
    }

    pub fn house(&self) -> Option<&House> {
        self.house.as_ref()
    }

    pub fn house_mut(&mut self) -> Option<&mut House> {
        self.house.as_mut()
    }
}

impl Actor for Pig {
    fn position(&self) -> Point {
        self.position
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// The house travels with its pig.
    fn move_to(&mut self, position: Point) {
        let delta = position - self.position;
        if let Some(house) = self.house.as_mut() {
            house.set_anchor(house.anchor() + delta);
        }
        self.position = position;
    }

    fn as_pig(&self) -> Option<&Pig> {
        Some(self)
    }

    fn collides_with(&self, other: &dyn Actor) -> Result<bool> {
        if cell_collision(self, other) {
            trace!("{} shares a cell with {}", self.name, other.name());
            return Ok(true);
        }

        let other = match other.as_pig() {
            Some(pig) => pig,
            None => return Ok(false),
        };

        match (&self.house, &other.house) {
            (Some(mine), Some(theirs)) => mine.overlaps(theirs),
            (None, None) => Ok(false),
            _ => Err(GameError::AsymmetricHouses {
                left: self.name.clone(),
                right: other.name.clone(),
            }),
        }
    }
}

impl_actor_display!(Pig);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wolf {
    position: Point,
}

impl Wolf {
    pub fn new(position: Point) -> Self {
        Self { position }
    }
}

impl Actor for Wolf {
    fn position(&self) -> Point {
        self.position
    }

    fn name(&self) -> &str {
        WOLF_NAME
    }

    fn move_to(&mut self, position: Point) {
        self.position = position;
    }
}

impl_actor_display!(Wolf);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::house::HouseKind;
    use crate::test_util::{bare_pig, housed_pig};

    #[test]
    fn every_actor_collides_with_itself() {
        let actors: Vec<Box<dyn Actor>> = vec![
            Box::new(housed_pig("red_pig", HouseKind::Stick, 0, 1)),
            Box::new(bare_pig("plain_pig", 3, 3)),
            Box::new(Wolf::new(Point::new(2, 3))),
        ];
        for actor in actors.iter() {
            assert!(actor.collides_with(&**actor).unwrap(), "{}", actor);
        }
    }

    #[test]
    fn same_cell_wins_regardless_of_houses() {
        let housed = housed_pig("red_pig", HouseKind::Stick, 2, 2);
        let bare = bare_pig("plain_pig", 2, 2);
        assert!(housed.collides_with(&bare).unwrap());
        assert!(bare.collides_with(&housed).unwrap());
    }

    #[test]
    fn houses_decide_when_cells_differ() {
        let red = housed_pig("red_pig", HouseKind::Stick, 0, 1);
        let blue = housed_pig("blue_pig", HouseKind::Gun, 1, 2);
        assert!(!red.collides_with(&blue).unwrap());

        let pink = housed_pig("pink_pig", HouseKind::Corner, 0, 3);
        assert!(red.collides_with(&pink).unwrap());
        assert!(pink.collides_with(&red).unwrap());
    }

    #[test]
    fn flipped_house_changes_the_result() {
        let red = housed_pig("red_pig", HouseKind::Stick, 0, 1);
        let mut blue = housed_pig("blue_pig", HouseKind::Gun, 1, 2);
        for _ in 0..3 {
            blue.house_mut().unwrap().flip().unwrap();
        }
        assert!(red.collides_with(&blue).unwrap());
    }

    #[test]
    fn far_houses_do_not_collide() {
        let red = housed_pig("red_pig", HouseKind::Stick, 0, 0);
        let blue = housed_pig("blue_pig", HouseKind::Gun, 12, 12);
        assert!(!red.collides_with(&blue).unwrap());
    }

    #[test]
    fn houseless_pigs_only_collide_on_cells() {
        let a = bare_pig("a", 1, 1);
        let b = bare_pig("b", 1, 2);
        assert!(!a.collides_with(&b).unwrap());
    }

    #[test]
    fn asymmetric_houses_are_an_error() {
        let housed = housed_pig("red_pig", HouseKind::Stick, 0, 1);
        let bare = bare_pig("plain_pig", 4, 4);
        assert_eq!(
            housed.collides_with(&bare),
            Err(GameError::AsymmetricHouses {
                left: "red_pig".to_owned(),
                right: "plain_pig".to_owned(),
            })
        );
        assert!(bare.collides_with(&housed).is_err());
    }

    #[test]
    fn wolf_ignores_houses() {
        let wolf = Wolf::new(Point::new(0, 2));
        // The stick covers (0, 2) but the pig itself sits on (0, 1).
        let red = housed_pig("red_pig", HouseKind::Stick, 0, 1);
        assert!(!wolf.collides_with(&red).unwrap());
        assert!(!red.collides_with(&wolf).unwrap());

        let wolf = Wolf::new(Point::new(0, 1));
        assert!(wolf.collides_with(&red).unwrap());
        assert!(red.collides_with(&wolf).unwrap());
    }

    #[test]
    fn moving_a_pig_drags_its_house() {
        let mut red = housed_pig("red_pig", HouseKind::Stick, 0, 1);
        red.move_to(Point::new(2, 1));
        assert_eq!(red.position(), Point::new(2, 1));
        assert_eq!(red.house().unwrap().anchor(), Point::new(2, 1));
    }

    #[test]
    fn moving_to_the_edge_of_i32_reports_overflow() {
        let mut red = housed_pig("red_pig", HouseKind::Stick, 0, 1);
        red.move_to(Point::new(i32::MAX, 1));
        assert_eq!(red.house().unwrap().anchor(), Point::new(i32::MAX, 1));

        let blue = housed_pig("blue_pig", HouseKind::Gun, 1, 2);
        assert_eq!(
            red.collides_with(&blue),
            Err(GameError::ProjectionOverflow {
                anchor: Point::new(i32::MAX, 1)
            })
        );

        red.move_to(Point::new(i32::MIN, 1));
        assert_eq!(red.house().unwrap().anchor(), Point::new(i32::MIN, 1));
    }

    #[test]
    fn display_shows_name_and_position() {
        let red = bare_pig("red_pig", 0, 1);
        assert_eq!(red.to_string(), "name=red_pig, position=(0, 1)");
        let wolf = Wolf::new(Point::new(2, 3));
        assert_eq!(wolf.to_string(), "name=wolf, position=(2, 3)");
    }
}
