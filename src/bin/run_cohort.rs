//! Run projections for the whole planning cohort from data/households.csv
//!
//! Outputs yearly aggregated household benefits for comparison with the
//! spreadsheet model.

use rayon::prelude::*;
use retirement_engine::person::load_default_households;
use retirement_engine::{Assumptions, BenefitStream, ProjectionConfig, ProjectionEngine};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Aggregated yearly results across all households
#[derive(Debug, Clone, Copy, Default)]
struct AggregatedRow {
    total_monthly: f64,
    total_cumulative: f64,
    households_in_pay: u32,
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    println!("Loading households from data/households.csv...");

    let records = load_default_households().expect("Failed to load households");
    println!("Loaded {} households in {:?}", records.len(), start.elapsed());

    let assumptions = Assumptions::default_planning();
    let config = ProjectionConfig::default();

    println!("Running projections...");
    let proj_start = Instant::now();

    // Run projections in parallel
    let results: Vec<BenefitStream> = records
        .par_iter()
        .map(|record| {
            let engine = ProjectionEngine::new(assumptions.clone(), config);
            let result = engine
                .project_household(&record.household)
                .unwrap_or_else(|e| {
                    panic!("household {} failed to project: {}", record.household_id, e)
                });
            result.combined
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Aggregate results by calendar year
    println!("Aggregating results...");
    let mut aggregated: BTreeMap<i32, AggregatedRow> = BTreeMap::new();

    for stream in &results {
        for (year, entry) in stream.iter() {
            let agg = aggregated.entry(year).or_default();
            agg.total_monthly += entry.monthly;
            agg.total_cumulative += entry.cumulative;
            if entry.monthly > 0.0 {
                agg.households_in_pay += 1;
            }
        }
    }

    // Write output
    let output_path = "cohort_projection_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Year,TotalMonthly,TotalCumulative,HouseholdsInPay").unwrap();
    for (year, row) in &aggregated {
        writeln!(
            file,
            "{},{:.2},{:.2},{}",
            year, row.total_monthly, row.total_cumulative, row.households_in_pay,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats at milestone years
    let first_year = *aggregated.keys().next().expect("empty projection");
    let last_year = *aggregated.keys().next_back().expect("empty projection");
    println!("\nCohort Summary ({} households):", records.len());
    for year in [first_year, 2030, 2040, 2050, last_year] {
        if let Some(row) = aggregated.get(&year) {
            println!(
                "  {}: InPay={}, Monthly=${:.0}, Cumulative=${:.0}",
                year, row.households_in_pay, row.total_monthly, row.total_cumulative
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
