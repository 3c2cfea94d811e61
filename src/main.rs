fn main() {
    init_tracing();

    if let Err(err) = bank_ledger::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with the menu on stdout.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::from_default_env().add_directive("bank_ledger=warn".parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
