mod cli;
mod run;

use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = cli::Cli::parse();
    if let Err(e) = run::run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
