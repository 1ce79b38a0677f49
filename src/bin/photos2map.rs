use photos2map::{load_env_file, App, RunOutcome, CONFIG, NO_GPS_DATA};

use log::{error, info, LevelFilter};
use std::path::Path;

fn init_logging(debug: bool) {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), String> {
    // Settings in ./.env are applied as environment variables, below the
    // ones already set in the process environment. Logging is not set up
    // yet, so a broken file is only reported through the exit status.
    load_env_file(Path::new(".env")).map_err(|e| e.to_string())?;

    init_logging(CONFIG.debug);

    match App::new(&CONFIG).run() {
        Ok(RunOutcome::Written { path, points, skipped }) => {
            info!("Wrote {} locations to {} ({} images skipped)", points,
                  path.display(), skipped);
        },
        Ok(RunOutcome::NoGpsData) => {
            println!("{}", NO_GPS_DATA);
        },
        Err(e) => {
            error!("{}", e);
            return Err(e.to_string());
        },
    }

    Ok(())
}
