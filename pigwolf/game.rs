use log::{debug, info, warn};

use pigwolf_cli::CliConfig;
use pigwolf_game::{Actor, Board, GameError};

use crate::error::PigwolfError;
use crate::roster::Roster;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub tick: u32,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub ticks: u32,
    pub collisions: Vec<Collision>,
}

/// Every unordered pig pair, then the wolf against each pig.
pub fn detect_collisions(roster: &Roster) -> Result<Vec<(String, String)>, GameError> {
    let mut found = Vec::new();
    for (i, pig) in roster.pigs.iter().enumerate() {
        for other in roster.pigs[i + 1..].iter() {
            if pig.collides_with(other)? {
                found.push((pig.name().to_owned(), other.name().to_owned()));
            }
        }
    }

    let wolf = &roster.wolf;
    for pig in roster.pigs.iter() {
        if wolf.collides_with(pig)? {
            found.push((wolf.name().to_owned(), pig.name().to_owned()));
        }
    }
    Ok(found)
}

fn flip_houses(config: &CliConfig, roster: &mut Roster) -> Result<(), PigwolfError> {
    for name in config.flip.iter() {
        let pig = roster
            .pig_mut(name)
            .ok_or_else(|| PigwolfError::UnknownPig(name.clone()))?;
        match pig.house_mut() {
            Some(house) => {
                house.flip()?;
                debug!("{}'s house now faces {:?}", name, house.orientation());
            }
            None => warn!("{} has no house to flip", name),
        }
    }
    Ok(())
}

/// Drives the roster for `config.ticks` ticks. Any error stops the run.
pub fn run(config: &CliConfig, mut roster: Roster) -> Result<RunReport, PigwolfError> {
    let mut board = Board::new();
    let mut report = RunReport::default();

    for tick in 1..=config.ticks {
        flip_houses(config, &mut roster)?;
        board.rebuild(&roster.actors())?;
        if config.print_board {
            if let Some(rendered) = board.render() {
                print!("{}", rendered);
            }
        }

        for (first, second) in detect_collisions(&roster)? {
            info!("Tick {}: {} collides with {}", tick, first, second);
            report.collisions.push(Collision {
                tick,
                first,
                second,
            });
        }
        report.ticks = tick;
    }

    Ok(report)
}
