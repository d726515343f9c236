// Mon Oct 19 2026 - Alex

use colored::Colorize;

fn main() {
    if let Err(e) = smu_checker::ui::cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
