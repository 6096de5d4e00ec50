use std::process;

fn main() {
    match manuscript_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("manuscript error: {err:#}");
            process::exit(1);
        }
    }
}
