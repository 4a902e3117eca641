use crate::board::Board;
use crate::house::HouseKind;
use crate::point::Point;
use crate::Pig;

/// A pig whose house is anchored on its own cell.
pub fn housed_pig(name: &str, kind: HouseKind, x: i32, y: i32) -> Pig {
    let at = Point::new(x, y);
    Pig::new(at, Some(kind.build(at).unwrap()), name)
}

pub fn bare_pig(name: &str, x: i32, y: i32) -> Pig {
    Pig::new(Point::new(x, y), None, name)
}

pub fn print_board(board: &Board) {
    println!("---------------");
    match board.render() {
        Some(rendered) => print!("{}", rendered),
        None => println!("(no valid grid)"),
    }
}
