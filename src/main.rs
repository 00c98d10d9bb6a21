//! Retirement Engine CLI
//!
//! Projects one person's benefit stream under a chosen claiming age, with an
//! optional policy-risk cut and survival milestone ages.

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use retirement_engine::{
    full_retirement_age, Assumptions, ClaimAge, CutScenario, Gender, Household, Life, Person,
    ProjectionConfig, ProjectionEngine, RiskProfile,
};
use std::fs::File;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "retirement_engine",
    about = "Project retirement benefits and survival milestones"
)]
struct Args {
    /// Monthly PIA at Full Retirement Age
    #[arg(long, default_value_t = 2000.0)]
    pia: f64,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, default_value = "1960-01-15")]
    date_of_birth: String,

    /// Gender for mortality lookup (Male or Female)
    #[arg(long, default_value = "Female")]
    gender: String,

    /// Claiming age, whole years
    #[arg(long, default_value_t = 67)]
    claim_years: u8,

    /// Claiming age, additional months
    #[arg(long, default_value_t = 0)]
    claim_months: u8,

    /// Annual COLA assumption (e.g. 0.025 for 2.5%)
    #[arg(long, default_value_t = 0.025)]
    inflation: f64,

    /// Apply a benefit cut starting in this calendar year
    #[arg(long)]
    cut_year: Option<i32>,

    /// Cut percentage (10-35 is the usual stress range)
    #[arg(long, default_value_t = 21.0)]
    cut_percentage: f64,

    /// Emit the projection as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dob = NaiveDate::parse_from_str(&args.date_of_birth, "%Y-%m-%d")
        .context("date of birth must be YYYY-MM-DD")?;
    let gender = match args.gender.as_str() {
        "Male" => Gender::Male,
        "Female" => Gender::Female,
        other => anyhow::bail!("unknown gender: {}", other),
    };

    let person = Person::new(
        dob,
        gender,
        args.pia,
        ClaimAge::new(args.claim_years, args.claim_months),
    );
    let household = Household::single(person.clone());

    let config = ProjectionConfig {
        inflation_rate: args.inflation,
        ..Default::default()
    };
    let engine = ProjectionEngine::new(Assumptions::default_planning(), config);
    let projection = engine.project_household(&household)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    let fra = full_retirement_age(dob.year());
    println!("Retirement Engine v0.1.0");
    println!("========================\n");
    println!("Person:");
    println!("  Date of Birth: {}", dob);
    println!("  Gender: {:?}", gender);
    println!("  PIA at FRA: ${:.2}", args.pia);
    println!("  FRA: {}y{}m", fra.years, fra.months);
    println!("  Claiming at: {}y{}m", args.claim_years, args.claim_months);
    println!("  COLA: {:.2}%", args.inflation * 100.0);
    println!();

    // Print first 25 projection years to console
    println!("{:>6} {:>12} {:>14}", "Year", "Monthly", "Cumulative");
    println!("{}", "-".repeat(36));
    for (year, entry) in projection.combined.iter().take(25) {
        println!("{:>6} {:>12.2} {:>14.2}", year, entry.monthly, entry.cumulative);
    }
    if projection.combined.len() > 25 {
        println!("... ({} more years)", projection.combined.len() - 25);
    }

    let summary = projection.summary();
    println!(
        "\nLifetime benefits to age {}: ${:.0}",
        engine.config().horizon_age,
        summary.combined_lifetime
    );

    // Optional cut scenario side by side
    if let Some(cut_year) = args.cut_year {
        let cut = CutScenario::new(cut_year, args.cut_percentage);
        let adjusted = cut.apply(&projection.combined);
        println!("\nCut scenario: {:.0}% from {}", args.cut_percentage, cut_year);
        println!("  Baseline lifetime: ${:.0}", summary.combined_lifetime);
        println!("  Adjusted lifetime: ${:.0}", adjusted.lifetime_total());
        println!("  Lifetime delta:    ${:.0}", cut.lifetime_delta(&projection.combined));
    }

    // Survival milestones from the person's current age
    if let Some(age) = person.age_on(engine.config().as_of) {
        let life = Life::new(age.floor() as u32, gender, RiskProfile::baseline());
        let curve = engine.survival_model().individual_curve(&life);
        let t = curve.thresholds();
        println!("\nSurvival milestones (from age {}):", life.current_age);
        println!("  75% chance of reaching age {:.1}", t.p75);
        println!("  50% chance of reaching age {:.1}", t.p50);
        println!("  25% chance of reaching age {:.1}", t.p25);
    }

    // Write full results to CSV
    let csv_path = "projection_output.csv";
    let mut file = File::create(csv_path).context("Unable to create CSV file")?;
    writeln!(file, "Year,Monthly,Cumulative")?;
    for (year, entry) in projection.combined.iter() {
        writeln!(file, "{},{:.2},{:.2}", year, entry.monthly, entry.cumulative)?;
    }
    println!("\nFull results written to: {}", csv_path);

    Ok(())
}
