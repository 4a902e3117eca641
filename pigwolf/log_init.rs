use simplelog::*;

pub fn init(level: LevelFilter) {
    let result = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Always,
    )]);
    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}
