//! Rowreduce - row-reduce a matrix one elementary row operation at a time

mod command_mode;
mod config;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use command_mode::Step;
use rowreduce_engine::engine::OPERATION_USAGE;
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: rowreduce [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Matrix file: one row per line, numbers separated by spaces");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <OP>        Apply a row operation non-interactively (can be repeated)");
    eprintln!("  -u, --undo                Undo the previous operation (command mode)");
    eprintln!("  -o, --output <FILE>       Write the result as Markdown (command mode)");
    eprintln!("  --config <FILE>           Read settings from this config file");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("{}", OPERATION_USAGE);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut steps: Vec<Step> = Vec::new();
    let mut output_file: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires an operation");
                    std::process::exit(1);
                }
                steps.push(Step::Apply(args[i].to_string()));
            }
            "-u" | "--undo" => steps.push(Step::Undo),
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let (config, warnings) = config::load_config(config_file.as_ref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    // Command mode: any operation, undo or output flag
    if !steps.is_empty() || output_file.is_some() {
        logging::init_stderr(config.log_filter.as_deref());
        let Some(matrix_file) = file_path else {
            eprintln!("Error: command mode requires a matrix file");
            std::process::exit(1);
        };
        if let Err(e) = command_mode::run(&matrix_file, &steps, output_file.as_ref()) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    run_tui(file_path, &config);
}

#[cfg(feature = "tui")]
fn run_tui(file_path: Option<PathBuf>, config: &config::Config) {
    let log_path = config.log_file.clone().or_else(config::default_log_path);
    if let Some(path) = log_path
        && let Err(e) = logging::init_file(config.log_filter.as_deref(), &path)
    {
        eprintln!("Warning: could not open log file {}: {:#}", path.display(), e);
    }

    let mut app = match file_path {
        Some(path) => match tui::App::with_matrix_file(&path, config) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => tui::App::new(config),
    };

    if let Err(e) = tui::run(&mut app) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_tui(_file_path: Option<PathBuf>, _config: &config::Config) {
    eprintln!("Error: built without the `tui` feature; use -c to run operations");
    std::process::exit(1);
}
