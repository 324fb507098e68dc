fn main() {
    if let Err(e) = hostctl::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
