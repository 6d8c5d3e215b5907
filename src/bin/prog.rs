use std::io;
use std::process::ExitCode;

use dirconf::logging::init_logging;
use dirconf::report::{run_with_collaborator, Noop};
use dirconf::AppContext;

const CONFIG_FILE: &str = "dirconf.toml";

fn run() -> Result<i32, dirconf::Error> {
    let ctx = AppContext::load(CONFIG_FILE)?;
    Ok(run_with_collaborator(ctx.dirs(), &Noop, &mut io::stdout().lock())?)
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        // Exit codes are truncated to a byte, as on every Unix shell.
        Ok(status) => ExitCode::from(status as u8),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
