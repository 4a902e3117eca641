use pigwolf_game::{Actor, GameError, HouseKind, Pig, Point, Wolf};

/// Everything the driver needs to play: the pigs and the single wolf.
#[derive(Debug, Clone)]
pub struct Roster {
    pub pigs: Vec<Pig>,
    pub wolf: Wolf,
}

impl Roster {
    /// Pigs first, then the wolf.
    pub fn actors(&self) -> Vec<&dyn Actor> {
        self.pigs
            .iter()
            .map(|pig| pig as &dyn Actor)
            .chain(std::iter::once(&self.wolf as &dyn Actor))
            .collect()
    }

    pub fn pig_mut(&mut self, name: &str) -> Option<&mut Pig> {
        self.pigs.iter_mut().find(|pig| pig.name() == name)
    }
}

fn pig_with_house(name: &str, kind: HouseKind, x: i32, y: i32) -> Result<Pig, GameError> {
    let at = Point::new(x, y);
    Ok(Pig::new(at, Some(kind.build(at)?), name))
}

/// The starting roster: three pigs, each with its own house, and the wolf.
pub fn get_config() -> Result<Roster, GameError> {
    let red_pig = pig_with_house("red_pig", HouseKind::Stick, 0, 1)?;
    let blue_pig = pig_with_house("blue_pig", HouseKind::Gun, 1, 2)?;
    let pink_pig = pig_with_house("pink_pig", HouseKind::Corner, 3, 4)?;

    Ok(Roster {
        pigs: vec![red_pig, blue_pig, pink_pig],
        wolf: Wolf::new(Point::new(2, 3)),
    })
}
