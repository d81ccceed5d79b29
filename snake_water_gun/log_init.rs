use simplelog::*;

pub fn init(level: LevelFilter) {
    if let Err(e) = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Logger already set: {}", e);
    }
}
