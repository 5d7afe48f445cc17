use std::process::ExitCode;

use log::error;
use resp_tool::commands;
use resp_tool::config::Cli;
use resp_tool::config::Parser;

fn main() -> ExitCode {
	let args = Cli::parse();

	if let Err(e) = telemetry::init(&args.log_level) {
		eprintln!("resp-tool: {}", e);
		return ExitCode::FAILURE;
	}
	log::debug!("Running {:?}", args.command);

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	match commands::run(&args.command, &mut out) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{}", e);
			eprintln!("resp-tool: {}", e);
			ExitCode::FAILURE
		}
	}
}
