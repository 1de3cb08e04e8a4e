//! rFuelLogger main entrypoint.

use rfuellogger::run;
use rfuellogger::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
