use std::env;
use std::error::Error;

use healthassist_db::{roster::UserRecordStore, source::RecordFiles};
use healthassist_loader::{assistant::HealthAssistant, config::Config, stats::PopulationStats};
use healthassist_model::{metrics::BfpMethod, user::Gender};
use log::{error, info};

const USAGE: &str = "usage: healthassist <command>

commands:
    healthy [bmi|USArmy|all] [male|female]   names in the normal body fat category
    unfit [bmi|USArmy|all] [male|female]     names outside the normal body fat category
    stats [--json]                           population summary over both rosters
    show <bmi|USArmy> [name|all]             computed profile of one or all users";

fn parse_method(arg: Option<&String>) -> Result<Option<BfpMethod>, Box<dyn Error>> {
    match arg.map(String::as_str) {
        None | Some("all") => Ok(None),
        Some(method) => Ok(Some(method.parse()?)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = Config::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some(command @ ("healthy" | "unfit")) => {
            let stats = PopulationStats::from_config(&config);
            let method = parse_method(args.get(1))?;
            let gender = args.get(2).map(|g| Gender::from_input(g));
            let names = if command == "healthy" {
                stats.healthy_users(method, gender.as_ref())?
            } else {
                stats.unfit_users(method, gender.as_ref())?
            };
            names.iter().for_each(|name| println!("{}", name));
        }
        Some("stats") => {
            let report = PopulationStats::from_config(&config).full_stats()?;
            if args.get(1).map(String::as_str) == Some("--json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Some("show") => {
            let Some(method) = parse_method(args.get(1))? else {
                return Err("show needs a method, bmi or USArmy".into());
            };
            let username = args.get(2).map_or("all", String::as_str);

            let files = RecordFiles::new(&config.data_dir);
            let mut store = UserRecordStore::new();
            let mut assistant = HealthAssistant::new(method, &mut store);
            let count = assistant.mass_load_and_compute(&files, config.source_name(method))?;
            info!("Loaded {} users", count);

            match assistant.display(username) {
                Ok(profile) => print!("{}", profile),
                Err(e) => error!("Cannot display {}: {}", username, e),
            }
        }
        _ => println!("{}", USAGE),
    }

    Ok(())
}
