fn main() {
    dmno_action::app::cli::run();
}
