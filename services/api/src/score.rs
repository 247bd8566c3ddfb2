use clap::Args;
use loan_risk::config::AppConfig;
use loan_risk::error::AppError;
use loan_risk::scoring::{score_file, ArtifactBundle, RiskScoringService};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV file of applicant records with a header row
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the directory holding model.json, scaler.json, columns.json
    #[arg(long)]
    pub(crate) artifact_dir: Option<PathBuf>,
}

/// Batch-score a CSV export through the same pipeline the form uses.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = args.artifact_dir {
        config.artifacts.dir = dir;
    }

    let bundle = ArtifactBundle::load(&config.artifacts.dir)?;
    let service = RiskScoringService::new(bundle);

    let scored = score_file(&service, &args.input)?;

    println!("{:<6} {:<12} {:>8}  {:<9} verdict", "row", "label", "prob%", "band");
    for applicant in &scored {
        let band = applicant.result.band();
        println!(
            "{:<6} {:<12} {:>8.2}  {:<9} {}",
            applicant.line,
            applicant.result.label.label(),
            applicant.result.probability_of_default,
            band.label(),
            applicant.result.label.verdict(),
        );
    }
    println!("scored {} applicant(s)", scored.len());

    Ok(())
}
