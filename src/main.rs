// Fri Oct 16 2026 - Alex

fn main() {
    std::process::exit(modcheck::ui::cli::run());
}
