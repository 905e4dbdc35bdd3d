use aff_parser::AffParser;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-aff-file>", args[0]);
        std::process::exit(1);
    }

    let aff_path = &args[1];

    println!("Reading .aff file: {}", aff_path);
    println!("{}", "=".repeat(60));

    let mut parser = AffParser::new();
    if let Err(e) = parser.parse_file(aff_path) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    println!("\nCommands found: {}", parser.num_commands());
    println!("{}", "=".repeat(60));

    // Sort for stable output; the index itself is unordered across commands.
    let mut commands: Vec<&str> = parser.commands().collect();
    commands.sort_unstable();

    for command in commands {
        let params = parser.get_command_parameters(command);
        if params.is_empty() {
            println!("{}: (no parameters)", command);
            continue;
        }
        println!("{}:", command);
        for param in params {
            println!("  {}", param);
        }
    }
}
