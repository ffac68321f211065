//! Logo glow animation.
//!
//! Run with: `cargo run --release --bin logo-glow [LOGO_PATH]`
//!
//! The logo defaults to `nitt_logo.png` in the working directory.

use orbitals::prelude::*;

const DEFAULT_LOGO: &str = "nitt_logo.png";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LOGO.to_string());

    let demo = match LogoDemo::load(LogoConfig::default(), &path) {
        Ok(demo) => demo,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(demo) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
