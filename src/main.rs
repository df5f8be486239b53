mod cli;
mod layout;
mod logging;
mod prompt;
mod readme;
mod runner;
mod scaffold;
mod templates;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
