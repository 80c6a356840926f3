mod app;
mod color;
mod data;
mod net;
mod plot;
mod stats;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    app::run()
}
