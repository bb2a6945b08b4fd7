use featmatrix::cli::{exit_with, run};

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        exit_with(&e);
    }
}
