use std::fmt::Display;

/// User-facing output. Progress lines honour `--quiet`; reports and
/// failures are always shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn progress(&self, message: impl Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    pub fn report(&self, message: impl Display) {
        println!("{}", message);
    }

    pub fn failure(&self, message: impl Display) {
        eprintln!("{}", message);
    }
}
