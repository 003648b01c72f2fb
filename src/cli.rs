use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::Text;

use interviewScheduler::models::schedule::ScheduleDate;
use interviewScheduler::models::weight_config::UpdateWeightConfigRequest;
use interviewScheduler::service::schedule_aggregator::ScheduleAggregator;
use interviewScheduler::service::weight_config_service::WeightConfigService;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the interview slots for one day.
    Schedules {
        #[arg(long)]
        date: Option<String>,
    },
    Weights {
        #[command(subcommand)]
        command: WeightCommands,
    },
}

#[derive(Subcommand)]
enum WeightCommands {
    List,
    Active,
    Update {
        id: i64,
        verbal: f64,
        domain: f64,
        nonverbal: f64,
    },
}

pub async fn cli(
    aggregator: ScheduleAggregator,
    weights: WeightConfigService,
) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Schedules { date } => {
            let date = match date {
                Some(date) => date,
                None => specify_date()?,
            };
            let result = aggregator.schedules_for_date(&date).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Weights { command } => match command {
            WeightCommands::List => {
                let configs = weights.get_all().await?;
                println!("{}", serde_json::to_string_pretty(&configs)?);
            }
            WeightCommands::Active => {
                let active = weights.get_active().await?;
                println!("{}", serde_json::to_string_pretty(&active)?);
            }
            WeightCommands::Update { id, verbal, domain, nonverbal } => {
                let request = UpdateWeightConfigRequest::new(verbal, domain, nonverbal);
                if !request.valid_weight_sum {
                    println!(
                        "Warning: weights add up to {}, the backend may reject them",
                        verbal + domain + nonverbal
                    );
                }
                let updated = weights.update(id, &request).await?;
                println!("{}", serde_json::to_string_pretty(&updated)?);
            }
        },
    }
    Ok(())
}

fn specify_date() -> Result<String, Box<dyn std::error::Error>> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let date = Text::new("Which day? (YYYY-MM-DD)")
        .with_default(&today)
        .with_validator(|input: &str| {
            if ScheduleDate::parse(input).is_some() {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid(
                    "Expected YYYY-MM-DD".into(),
                ))
            }
        })
        .prompt()?;
    Ok(date)
}
