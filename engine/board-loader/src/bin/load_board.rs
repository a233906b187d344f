use anyhow::Result;
use board_loader::{BoardLoader, BoardSchema};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "load_board")]
#[command(about = "Load a draft big board from a CSV file or URL")]
#[command(version = "0.1.0")]
struct Args {
    /// Path or http(s) URL of the board CSV
    source: String,

    /// Print the parsed board as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let loader = BoardLoader::new()?;
    let board = loader.try_load(&args.source).await?;
    let schema = BoardSchema::default();

    info!("Loaded {} prospects from {}", board.len(), board.source);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("\nFirst 10 prospects:");
    println!("{:<4} {:<24} {:<8} {:<20}", "Row", "Name", "Role", "Pre-Draft Team");
    println!("{}", "-".repeat(60));

    for (i, record) in board.top_records(10).into_iter().enumerate() {
        println!(
            "{:<4} {:<24} {:<8} {:<20}",
            i + 1,
            schema.name_of(record),
            record.value_or_na(&schema.role),
            record.value_or_na(&schema.pre_draft_team)
        );
    }

    println!("\nColumns: {}", board.headers.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accept_source_and_json_flag() {
        let args = Args::try_parse_from(["load_board", "--json", "data/2025.csv"]).unwrap();
        assert_eq!(args.source, "data/2025.csv");
        assert!(args.json);

        let args = Args::try_parse_from(["load_board", "https://example.com/board.csv"]).unwrap();
        assert_eq!(args.source, "https://example.com/board.csv");
        assert!(!args.json);
    }

    #[test]
    fn test_args_require_source() {
        assert!(Args::try_parse_from(["load_board", "--json"]).is_err());
        assert!(Args::try_parse_from(["load_board", "a.csv", "--jsn"]).is_err());
    }
}
