// src/main.rs

use std::io::IsTerminal;

use pollwatch::cli::{self, CliArgs};
use pollwatch::config::{load_from_path, Settings};
use pollwatch::{logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version print to stdout and succeed; every real
            // usage error exits with 1.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run_main(args).await {
        eprintln!("pollwatch: {err}");
        std::process::exit(1);
    }
}

async fn run_main(args: CliArgs) -> pollwatch::errors::Result<()> {
    let file = args.config.as_deref().map(|path| load_from_path(path)).transpose()?;
    let settings = Settings::resolve(&args, file.as_ref(), std::io::stdin().is_terminal())?;
    logging::init_logging(settings.log_level, settings.verbose)?;
    run(settings).await?;
    Ok(())
}
