//! Salesboard CLI
//!
//! Command-line client for a running Salesboard API:
//! - Browse yearly sales and filter months by a sales threshold
//! - Print summary statistics and chart series
//! - Check server status
//! - Generate a default config file

use clap::{Parser, Subcommand};
use salesboard::api::dto::SummaryResponse;
use salesboard::query::NO_DATA_MESSAGE;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "salesboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query yearly e-commerce sales from a Salesboard server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dataset, one year, or a year filtered by threshold
    Sales {
        /// Year to show
        #[arg(short, long)]
        year: Option<i32>,
        /// Minimum monthly sales (only applied together with --year)
        #[arg(short, long)]
        threshold: Option<i64>,
    },

    /// List known years
    Years,

    /// Summary statistics for a year
    Summary {
        /// Year to summarize
        #[arg(short, long)]
        year: i32,
        /// Minimum monthly sales
        #[arg(short, long)]
        threshold: Option<i64>,
    },

    /// Chart series for a year
    Chart {
        /// Year to chart
        #[arg(short, long)]
        year: i32,
        /// Minimum monthly sales
        #[arg(short, long)]
        threshold: Option<i64>,
        /// Chart type (bar, line, pie)
        #[arg(long = "type", default_value = "bar")]
        chart_type: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Sales { year, threshold } => {
            let mut query = Vec::new();
            if let Some(year) = year {
                query.push(("year", year.to_string()));
            }
            if let Some(threshold) = threshold {
                query.push(("threshold", threshold.to_string()));
            }

            let data = fetch(&client, &format!("{}/api/sales", cli.api_url), &query).await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&data)?),
                _ if data.get("years").is_some() => print_dataset(&data),
                _ => print_year(&data),
            }
        }

        Commands::Years => {
            let data = fetch(&client, &format!("{}/api/sales/years", cli.api_url), &[]).await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&data)?),
                _ => {
                    for year in data["years"].as_array().into_iter().flatten() {
                        println!("{}", year);
                    }
                }
            }
        }

        Commands::Summary { year, threshold } => {
            let query = year_and_threshold(year, threshold);
            let data = fetch(
                &client,
                &format!("{}/api/sales/summary", cli.api_url),
                &query,
            )
            .await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&data)?),
                _ => print_summary(&data),
            }
        }

        Commands::Chart {
            year,
            threshold,
            chart_type,
        } => {
            let mut query = year_and_threshold(year, threshold);
            query.push(("type", chart_type));

            let data = fetch(&client, &format!("{}/api/sales/chart", cli.api_url), &query).await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&data)?),
                _ => print_chart(&data),
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: Value = resp.json().await?;

                    println!(
                        "Salesboard v{}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Dataset: {}", health["dataset"].as_str().unwrap_or("-"));
                    println!("Years: {}", join_values(&health["years"]));

                    if let Some(uptime) = health["uptimeSeconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Salesboard API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Salesboard server is running:");
                    eprintln!("  cargo run --bin salesboard");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = salesboard::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn year_and_threshold(year: i32, threshold: Option<i64>) -> Vec<(&'static str, String)> {
    let mut query = vec![("year", year.to_string())];
    if let Some(threshold) = threshold {
        query.push(("threshold", threshold.to_string()));
    }
    query
}

/// GET a JSON endpoint, exiting with the server's message on a non-2xx status
async fn fetch(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Value, Box<dyn std::error::Error>> {
    let response = client.get(url).query(query).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body["error"]["message"].as_str().map(str::to_string))
            .unwrap_or(text);
        eprintln!("Request failed ({}): {}", status, message);
        std::process::exit(1);
    }

    Ok(response.json().await?)
}

fn print_dataset(data: &Value) {
    println!(
        "{:<6} {:>8} {:>14} {:>14} {:>8}",
        "Year", "Months", "Sales", "Revenue", "Units"
    );
    println!("{}", "-".repeat(54));

    for record in data["data"].as_array().into_iter().flatten() {
        let months = record["data"].as_array().map(Vec::len).unwrap_or(0);
        let sales: u64 = record["data"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|m| m["sales"].as_u64())
            .sum();

        println!(
            "{:<6} {:>8} {:>14} {:>14} {:>8}",
            record["year"],
            months,
            sales,
            record["totalRevenue"].as_u64().unwrap_or(0),
            record["totalUnits"].as_u64().unwrap_or(0)
        );
    }
}

fn print_year(data: &Value) {
    let months = data["data"].as_array().cloned().unwrap_or_default();

    println!("Year {}", data["year"]);
    println!();

    if months.is_empty() {
        println!("{}", NO_DATA_MESSAGE);
    } else {
        println!("{:<6} {:>14} {:>14} {:>8}", "Month", "Sales", "Revenue", "Units");
        println!("{}", "-".repeat(45));

        for month in &months {
            println!(
                "{:<6} {:>14} {:>14} {:>8}",
                month["month"].as_str().unwrap_or("-"),
                month["sales"].as_u64().unwrap_or(0),
                month["revenue"].as_u64().unwrap_or(0),
                month["units"].as_u64().unwrap_or(0)
            );
        }
    }

    println!();
    println!(
        "Year totals: revenue {}, units {}",
        data["totalRevenue"].as_u64().unwrap_or(0),
        data["totalUnits"].as_u64().unwrap_or(0)
    );
}

fn print_summary(data: &Value) {
    let response: SummaryResponse = match serde_json::from_value(data.clone()) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Unexpected summary response: {}", e);
            std::process::exit(1);
        }
    };

    println!("Year {} (threshold {})", response.year, response.threshold);
    println!();

    let Some(stats) = response.summary.stats() else {
        println!("{}", NO_DATA_MESSAGE);
        return;
    };

    println!("Total sales:       {}", stats.total_sales);
    println!("Average sales:     {}", stats.rounded_avg_sales());
    println!("Total units:       {}", stats.total_units);
    println!("Months displayed:  {}", stats.months_displayed);
}

fn print_chart(data: &Value) {
    println!(
        "{} ({})",
        data["title"].as_str().unwrap_or("-"),
        data["chartType"].as_str().unwrap_or("-")
    );
    println!();

    if data["empty"].as_bool().unwrap_or(false) {
        println!(
            "{}",
            data["message"].as_str().unwrap_or(NO_DATA_MESSAGE)
        );
        return;
    }

    let labels = data["labels"].as_array().cloned().unwrap_or_default();
    let values = data["values"].as_array().cloned().unwrap_or_default();
    let shares = data["shares"].as_array().cloned();

    for (i, (label, value)) in labels.iter().zip(values.iter()).enumerate() {
        let label = label.as_str().unwrap_or("-");
        let value = value.as_u64().unwrap_or(0);

        match shares.as_ref().and_then(|s| s.get(i)).and_then(Value::as_f64) {
            Some(share) => println!("{:<6} {:>14} {:>6.1}%", label, value, share),
            None => println!("{:<6} {:>14}", label, value),
        }
    }
}

fn join_values(values: &Value) -> String {
    values
        .as_array()
        .map(|v| {
            v.iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "-".to_string())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
