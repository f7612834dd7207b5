use bitsplitter::cli;
use bitsplitter::logging::init_logging;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging not initialised: {e}");
    }
    log::info!("#Start main()");

    let code = cli::run(
        std::env::args_os(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
