use std::process::ExitCode;

fn main() -> ExitCode {
    jackc_drv::run()
}
