use clap::Parser;
use prop_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Propulsion Analyzer - APC Propeller + BLDC Motor Matcher");
    println!("========================================================");
    println!();
    println!("Parse APC propeller performance reports (.dat or PDF) and derive motor");
    println!("current, terminal voltage, efficiency, and feasibility per operating point.");
    println!();
    println!("USAGE:");
    println!("    prop-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Derive motor electrical operating points for one RPM block");
    println!("    inspect     Parse a report and describe its structure without analysis");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze the bundled APC 17x8 sample with the default motor:");
    println!("    prop-analyzer analyze");
    println!();
    println!("    # Analyze a downloaded report against a 6S 900 Kv motor:");
    println!("    prop-analyzer analyze PER3_17x8.dat --kv 900 --voltage 22.2 \\");
    println!("                          --resistance 0.04 --max-current 70");
    println!();
    println!("    # Pick a specific RPM block and emit JSON:");
    println!("    prop-analyzer analyze report.pdf --rpm 6000 --output-format json");
    println!();
    println!("    # Inspect what a report contains:");
    println!("    prop-analyzer inspect report.pdf");
    println!();
    println!("For detailed help on any command, use:");
    println!("    prop-analyzer <COMMAND> --help");
}
