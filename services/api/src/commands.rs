use chrono::Local;
use clap::{Args, Subcommand};
use ospa_scorer::config::AppConfig;
use ospa_scorer::error::AppError;
use ospa_scorer::scoring::rubric::{
    LevelTable, RankedTable, RoleTable, ARTICLES, CONTESTS, EXTENSION, INNOVATIONS, LEADERSHIP,
    PUBLICATION, SPECIAL_AWARDS, TIERED_SERVICES,
};
use ospa_scorer::scoring::{score_labeled, CandidateId, Level, Rank, RubricCategory};
use ospa_scorer::telemetry;
use std::fmt::Display;
use std::path::PathBuf;

use crate::infra::build_registry;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Rubric category (individual, group, special, publication, leadership, extension,
    /// innovation, speakership, books, articles)
    #[arg(long)]
    pub(crate) category: String,
    /// Level at which the achievement took place
    #[arg(long)]
    pub(crate) level: Level,
    /// Contest placement (1st-7th); contest categories default to 1st
    #[arg(long)]
    pub(crate) rank: Option<Rank>,
    /// Role for leadership/extension entries; defaults to the first listed role
    #[arg(long = "type")]
    pub(crate) role: Option<String>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CandidatesCommand {
    /// List stored candidates with their totals
    List,
    /// Write the dated CSV export
    Export(ExportArgs),
    /// Send every stored candidate to the configured sheet endpoint
    Sync,
    /// Delete a stored candidate
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Directory receiving ospa_export_<date>.csv
    #[arg(long, default_value = ".")]
    pub(crate) out_dir: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DeleteArgs {
    /// Candidate identifier
    #[arg(long)]
    pub(crate) id: String,
}

pub(crate) fn run_score(args: ScoreArgs) {
    let points = score_labeled(&args.category, args.level, args.rank, args.role.as_deref());
    println!(
        "{} | {}{}{} -> {} pts",
        args.category,
        args.level,
        args.rank
            .map(|rank| format!(" | {rank}"))
            .unwrap_or_default(),
        args.role
            .as_deref()
            .map(|role| format!(" | {role}"))
            .unwrap_or_default(),
        points
    );
}

pub(crate) fn run_rubric() {
    println!("OSPA rubric point tables");
    for category in RubricCategory::ALL {
        println!("\n{} [{}]", category.label(), category.key());
        match category {
            RubricCategory::Individual | RubricCategory::Group => print_ranked(&CONTESTS),
            RubricCategory::SpecialAward => print_ranked(&SPECIAL_AWARDS),
            RubricCategory::Publication => print_ranked(&PUBLICATION),
            RubricCategory::Leadership => print_roles(&LEADERSHIP),
            RubricCategory::Extension => print_roles(&EXTENSION),
            RubricCategory::Innovation => print_levels("  ", &INNOVATIONS),
            RubricCategory::TieredServices => print_levels("  ", &TIERED_SERVICES),
            RubricCategory::Articles => print_levels("  ", &ARTICLES),
        }
    }
}

fn print_ranked(table: &RankedTable) {
    for (level, points) in table.rows() {
        let cells: Vec<String> = Rank::ALL
            .iter()
            .zip(points.iter())
            .map(|(rank, points)| format!("{rank} {points}"))
            .collect();
        println!("  - {level}: {}", cells.join(", "));
    }
}

fn print_roles<R: Copy + PartialEq + Display + 'static>(table: &RoleTable<R>) {
    for (role, levels) in table.rows() {
        println!("  {role}");
        print_levels("    ", levels);
    }
}

fn print_levels(indent: &str, table: &LevelTable) {
    for (level, points) in table.rows() {
        println!("{indent}- {level}: {points}");
    }
}

pub(crate) async fn run_candidates(command: CandidatesCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let registry = build_registry(&config)?;

    match command {
        CandidatesCommand::List => {
            let candidates = registry.list()?;
            if candidates.is_empty() {
                println!("No candidates stored in {}", config.storage.path.display());
                return Ok(());
            }
            for candidate in candidates {
                println!(
                    "{} | {} | {} | {} | {:.2} pts",
                    candidate.id,
                    candidate.name,
                    candidate.school,
                    candidate.division,
                    candidate.total_score()
                );
            }
        }
        CandidatesCommand::Export(args) => {
            match registry.export(&args.out_dir, Local::now().date_naive())? {
                Some(path) => println!("Export written to {}", path.display()),
                None => println!("No candidates to export"),
            }
        }
        CandidatesCommand::Sync => {
            if registry.sync_all().await? {
                println!("Sync completed");
            } else {
                println!("Sync failed; local records are unchanged");
            }
        }
        CandidatesCommand::Delete(args) => {
            let id = CandidateId(args.id);
            registry.delete(&id)?;
            println!("Deleted candidate {id}");
        }
    }

    Ok(())
}
