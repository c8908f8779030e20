use std::process::ExitCode;

fn main() -> ExitCode {
    agroadvisor_cli::run()
}
