//! Binary entrypoint for fontcopy-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    match fontcopy_cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(fontcopy_cli::EXIT_FAILURE);
        }
    }
}
