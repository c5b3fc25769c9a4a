pub mod banner;
pub mod cli;
pub mod console;
pub mod tui;

/// Prints the welcome banner. Call once at startup, after logging is up.
pub fn init_ui() {
    banner::print_welcome();
}
