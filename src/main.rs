use RPAL::Utils::logger::init_logger;
use RPAL::cli::cli_main::run_interactive_menu;

pub fn main() {
    // RPAL_VERBOSE=1 prints every generated and repaired reaction
    let verbose = std::env::var("RPAL_VERBOSE").is_ok();
    init_logger(verbose);
    run_interactive_menu();
}
