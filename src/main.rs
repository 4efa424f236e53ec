//=========================================================================
// Gridmark Binary
//=========================================================================

use env_logger::Env;
use log::error;

use gridmark::GameBuilder;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = GameBuilder::new().build().run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
