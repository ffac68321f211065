//! Electron-orbit atom animation.
//!
//! Run with: `cargo run --release --bin electron-orbits`
//!
//! Set `RUST_LOG=debug` to log every orbital jump.

use orbitals::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(AtomDemo::new(AtomConfig::default())) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
