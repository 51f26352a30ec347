use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use gaffer::model::{Config, Model};
use gaffer::print;
use gaffer::radar::RadarConfig;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the tournament workbook from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// team whose radar metrics to print
    #[clap(short = 't', long)]
    team: Option<String>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if matches!(&self.team, Some(team) if team.trim().is_empty()) {
            bail!("the -t flag cannot be blank");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let model = Model::load(Config {
        source: args.file.clone(),
        radar: RadarConfig::default(),
    })?;
    let summaries = model.team_summaries();
    info!(
        "aggregated {} teams from {}",
        summaries.len(),
        args.file.display()
    );

    println!(
        "Team summary:\n{}",
        Console::default().render(&print::tabulate_summaries(&summaries))
    );
    println!(
        "Goal distribution:\n{}",
        Console::default().render(&print::tabulate_goal_distribution(&model.goal_distribution()))
    );

    if let Some(team) = &args.team {
        let rows = model.radar(&summaries)?;
        let row = rows
            .iter()
            .find(|row| &row.summary.team_name == team)
            .ok_or_else(|| anyhow!("no team named {team} in the workbook"))?;
        println!(
            "{team} radar:\n{}",
            Console::default().render(&print::tabulate_radar(row, &model.radar_config().metrics))
        );
    }
    Ok(())
}
