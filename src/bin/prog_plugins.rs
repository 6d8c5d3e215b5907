use std::io;
use std::process::ExitCode;

use dirconf::logging::init_logging;
use dirconf::report::{write_dirs, write_plugins_or_report};
use dirconf::AppContext;

const CONFIG_FILE: &str = "dirconf.toml";

fn run() -> Result<(), dirconf::Error> {
    let ctx = AppContext::load(CONFIG_FILE)?;
    let mut out = io::stdout().lock();
    write_dirs(ctx.dirs(), &mut out)?;
    write_plugins_or_report(ctx.dirs(), &mut out, &mut io::stderr().lock())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
