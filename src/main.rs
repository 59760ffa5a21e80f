use clap::Parser;
use std::process;

use todolist::cli;
use todolist::cli::commands::{Cli, Commands};
use todolist::logging;
use todolist::storage::paths;

fn main() {
    let cli_args = Cli::parse();
    logging::init_logging();

    let json_output = cli_args.json;
    let data_file = paths::data_file(cli_args.file.as_deref());

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(&data_file, json_output),
        Commands::List => cli::list::run(&data_file, json_output),
        Commands::Task(cmd) => cli::task::run(cmd, &data_file, json_output),
    };

    process::exit(exit_code);
}
