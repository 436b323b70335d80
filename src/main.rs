//! rTaskWeek main entrypoint.

use rtaskweek::run;
use rtaskweek::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
