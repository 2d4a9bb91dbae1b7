//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin pathfind -- --width 30 --height 15 --seed 7

use clap::Parser;
use gridstar_demos::{Config, Scenario};

fn main() {
    let config = Config::parse();

    match Scenario::run(&config) {
        Ok(scenario) => {
            print!("{}", scenario.render());
            println!("{}", scenario.summary());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
