#![forbid(unsafe_code)]

use sim_launcher::{apple::cli::Input, util::cli, NAME};

fn main() {
    cli::exec::<Input>(NAME)
}
