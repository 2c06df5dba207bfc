use gauss_invert::bench::{self, BenchConfig};
use gauss_invert::logging;
use log::{error, LevelFilter};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init(LevelFilter::Info);

    match bench::run(&BenchConfig::default()) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
