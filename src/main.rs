use std::process;

fn main() {
    if let Err(e) = md_toc::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
