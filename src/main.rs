use puzzle_cli::api_client::{ApiResponse, PuzzleApiClient};
use puzzle_cli::config::config::Config;

fn print_help() {
    println!("Puzzle CLI - smoke-test client for the puzzle service");
    println!();
    println!("Usage:");
    println!("  puzzle-cli fetch <username>    Fetch the next puzzle for a user");
    println!("  puzzle-cli generate [count]    Ask the service to generate a puzzle batch");
    println!();
    println!("Options:");
    println!("  --generate-config  - Generate config file with defaults");
    println!("  --help             - Show this help");
    println!();
    println!("Environment:");
    println!("  PUZZLE_API_URL     - Override the configured base URL");
    println!("  RUST_LOG           - Log filter (e.g. RUST_LOG=debug for request traces)");
}

fn main() -> anyhow::Result<()> {
    puzzle_cli::utils::logging::init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_help();
        return Ok(());
    }

    // Check for config file generation
    if args.contains(&"--generate-config".to_string()) {
        match Config::get_config_path() {
            Ok(path) => {
                let config_content = Config::create_default_with_comments();
                if let Some(parent) = path.parent() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        eprintln!("Error creating config directory: {}", e);
                        std::process::exit(1);
                    }
                }
                if let Err(e) = std::fs::write(&path, config_content) {
                    eprintln!("Error writing config file: {}", e);
                    std::process::exit(1);
                }
                println!("Configuration file created at: {:?}", path);
                println!("Edit this file to point the client at your puzzle service.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error determining config path: {}", e);
                std::process::exit(1);
            }
        }
    }

    let config = Config::load()?;

    // Env var wins over the config file
    let base_url =
        std::env::var("PUZZLE_API_URL").unwrap_or_else(|_| config.api.base_url.clone());

    let client = PuzzleApiClient::new(&base_url);

    let response = match args[1].as_str() {
        "fetch" => {
            let username = match args.get(2) {
                Some(username) => username,
                None => {
                    eprintln!("Usage: puzzle-cli fetch <username>");
                    std::process::exit(1);
                }
            };
            client.fetch_puzzle_for_user(username)?
        }
        "generate" => {
            let count = match args.get(2) {
                Some(raw) => match raw.parse::<u32>() {
                    Ok(count) => count,
                    Err(_) => {
                        eprintln!("Invalid count: {}", raw);
                        std::process::exit(1);
                    }
                },
                None => 10,
            };
            client.generate_puzzles(count)?
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    match &response {
        ApiResponse::Json(value) if config.output.pretty => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        _ => println!("{}", response),
    }

    Ok(())
}
