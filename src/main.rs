//! shiftboard main entrypoint.

use shiftboard::run;
use shiftboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
