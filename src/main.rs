use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use task_triage::api::HttpTaskApi;
use task_triage::config::ApiConfig;
use task_triage::controller::Dashboard;
use task_triage::error::Result;
use task_triage::model::{parse_task_input, validate_tasks};
use task_triage::pipeline::SortStrategy;
use task_triage::render;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "triage", about = "Task prioritization dashboard client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a JSON array of tasks (from file or stdin) and print the ranking
    Analyze {
        /// Path to a JSON file; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Sorting strategy: deadline | quickWins | importance | priority | score
        #[arg(short, long, default_value = "score")]
        strategy: String,
    },
    /// List tasks already persisted on the server
    List,
    /// Print today's top task suggestions
    Suggest,
    /// Delete a persisted task by id
    Delete { id: i64 },
    /// Append a task to a JSON file (or to an empty collection) and print the result
    Add {
        /// Existing JSON file to extend; starts empty when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        due_date: String,
        #[arg(long)]
        importance: Option<i64>,
        #[arg(long)]
        estimated_hours: Option<f64>,
        /// Comma-separated dependency ids
        #[arg(long, default_value = "")]
        dependencies: String,
    },
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ApiConfig::from_env()?;
    let api = Arc::new(HttpTaskApi::new(&config)?);
    let mut dashboard = Dashboard::new(api);
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Command::Analyze { file, strategy } => {
            let input = read_input(file.as_ref())?;
            let tasks = parse_task_input(&input)?;
            for warning in validate_tasks(&tasks) {
                eprintln!("warning: {}", warning);
            }

            dashboard.set_strategy(SortStrategy::parse(&strategy));
            dashboard.analyze(&tasks).await?;
            print!("{}", render::results(dashboard.tasks(), today));
        }
        Command::List => {
            dashboard.load().await?;
            print!("{}", render::results(dashboard.tasks(), today));
        }
        Command::Suggest => {
            let response = dashboard.suggest().await?;
            print!("{}", render::suggestions(&response));
        }
        Command::Delete { id } => {
            let remaining = dashboard.delete(id).await?;
            println!("Task {} deleted ({} remaining)", id, remaining);
        }
        Command::Add {
            file,
            title,
            due_date,
            importance,
            estimated_hours,
            dependencies,
        } => {
            if let Some(path) = &file {
                let existing = parse_task_input(&std::fs::read_to_string(path)?)?;
                dashboard = dashboard.with_tasks(existing);
            }
            dashboard.add_task(&title, &due_date, importance, estimated_hours, &dependencies);
            println!("{}", dashboard.tasks_json());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprint!("{}", render::error_banner(&e.to_string()));
        std::process::exit(1);
    }
}
