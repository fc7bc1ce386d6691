use std::path::PathBuf;

use clap::Parser;
use mockdb::db::CrudClient;
use mockdb::models::config::MockConfig;
use mockdb::models::query::QueryContext;
use mockdb::MockSession;

/// Print one page of mock rows for a table, or export it to CSV.
#[derive(Parser, Debug)]
#[command(name = "mockdb", version)]
struct Cli {
    /// Table whose `<table>.dataSchema.json` drives generation
    table: String,

    /// Page number (defaults to 1)
    #[arg(long)]
    page: Option<u64>,

    /// Rows per page (defaults to 50)
    #[arg(long)]
    page_size: Option<u64>,

    /// Write the page to this CSV file instead of printing the envelope
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

impl Cli {
    fn query(&self) -> QueryContext {
        QueryContext {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let query = cli.query();

    let config = MockConfig::from_env()?;
    let session = MockSession::from_config(config)?;
    let client = session.crud(&cli.table).await;

    if let Some(csv_path) = &cli.csv {
        let written = client.export_csv(&query, csv_path)?;
        println!("wrote {} rows to {}", written, csv_path.display());
        return Ok(());
    }

    let envelope = client.select(query).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_page_flags() {
        let cli = Cli::try_parse_from([
            "mockdb",
            "users",
            "--page",
            "3",
            "--page-size",
            "10",
            "--csv",
            "/tmp/users.csv",
        ])
        .unwrap();

        assert_eq!(cli.table, "users");
        assert_eq!(cli.query(), QueryContext::new(3, 10));
        assert_eq!(cli.csv, Some(PathBuf::from("/tmp/users.csv")));
    }

    #[test]
    fn test_table_only_leaves_defaults() {
        let cli = Cli::try_parse_from(["mockdb", "orders"]).unwrap();

        assert_eq!(cli.query(), QueryContext::default());
        assert!(cli.csv.is_none());
    }

    #[test]
    fn test_missing_table_is_rejected() {
        assert!(Cli::try_parse_from(["mockdb"]).is_err());
    }
}
