use log::{debug, LevelFilter};

/// Installs the stderr logger used by the binaries, at a fixed level.
///
/// The level is not read from the environment. Calling this twice is harmless.
pub fn init(level: LevelFilter) {
    if let Err(err) = env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init()
    {
        debug!("Keeping the installed logger: {}", err);
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
