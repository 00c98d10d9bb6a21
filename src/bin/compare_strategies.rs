//! Compare claiming strategies side by side for a sample household
//!
//! Usage: cargo run --bin compare_strategies

use chrono::{Datelike, NaiveDate};
use retirement_engine::person::FiledStatus;
use retirement_engine::projection::break_even_year;
use retirement_engine::{
    full_retirement_age, Assumptions, BenefitStream, ClaimAge, CoupleMode, Gender, Household,
    Person, ProjectionConfig, ProjectionEngine,
};

fn main() {
    env_logger::init();

    let primary = Person::new(
        NaiveDate::from_ymd_opt(1960, 1, 15).expect("valid date"),
        Gender::Female,
        2_400.0,
        ClaimAge::new(67, 0),
    );
    let spouse = Person::new(
        NaiveDate::from_ymd_opt(1962, 7, 4).expect("valid date"),
        Gender::Male,
        1_500.0,
        ClaimAge::new(67, 0),
    );

    let engine = ProjectionEngine::new(Assumptions::default_planning(), ProjectionConfig::default());

    println!("{}", "=".repeat(60));
    println!("Primary: born 1960, PIA ${:.0}", primary.pia_at_fra);
    println!("{}", "=".repeat(60));
    compare_claim_ages(&engine, &primary);

    println!("\n{}", "=".repeat(60));
    println!("Spouse: born 1962, PIA ${:.0}", spouse.pia_at_fra);
    println!("{}", "=".repeat(60));
    compare_claim_ages(&engine, &spouse);

    println!("\n{}", "=".repeat(60));
    println!("Couple strategies");
    println!("{}", "=".repeat(60));
    compare_couple(&engine, &primary, &spouse);
}

/// Project one person at 62, FRA, and 70 and tabulate the outcomes
fn compare_claim_ages(engine: &ProjectionEngine, person: &Person) {
    let birth_year = person.birth_year().expect("sample person has a birth date");
    let fra = full_retirement_age(birth_year);

    let strategies = [
        ("Claim at 62", ClaimAge::new(62, 0)),
        ("Claim at FRA", ClaimAge::new(fra.years, fra.months)),
        ("Claim at 70", ClaimAge::new(70, 0)),
    ];

    let streams: Vec<(&str, BenefitStream)> = strategies
        .iter()
        .map(|(label, claim_age)| {
            let candidate = with_claim_age(person, *claim_age);
            (*label, engine.project_person(&candidate))
        })
        .collect();

    println!(
        "  {:<14} {:>10} {:>12} {:>16}",
        "Strategy", "Claim Year", "Monthly", "Lifetime to 95"
    );
    println!("  {:-<54}", "");
    for (label, stream) in &streams {
        let claim_year = stream
            .iter()
            .find(|(_, entry)| entry.monthly > 0.0)
            .map(|(year, _)| year)
            .unwrap_or(0);
        println!(
            "  {:<14} {:>10} {:>12.2} {:>16.0}",
            label,
            claim_year,
            stream.monthly_in(claim_year),
            stream.lifetime_total()
        );
    }

    // Break-even of each later strategy against claiming at 62
    let early = &streams[0].1;
    for (label, stream) in streams.iter().skip(1) {
        match break_even_year(early, stream) {
            Some(year) => println!(
                "  {} overtakes Claim at 62 in {} (age {})",
                label,
                year,
                year - birth_year
            ),
            None => println!("  {} never overtakes Claim at 62 by the horizon", label),
        }
    }
}

/// Both-at-FRA versus the hybrid 62/70 split for a couple
fn compare_couple(engine: &ProjectionEngine, primary: &Person, spouse: &Person) {
    let plain = engine
        .project_household(&Household::couple(
            primary.clone(),
            spouse.clone(),
            CoupleMode::Plain,
        ))
        .expect("couple projection failed");
    let hybrid = engine
        .project_household(&Household::couple(
            primary.clone(),
            spouse.clone(),
            CoupleMode::Hybrid,
        ))
        .expect("hybrid projection failed");

    let plan = hybrid.hybrid.as_ref().expect("hybrid plan missing");
    println!("  Hybrid early filer: {:?} (files at 62, partner delays to 70)", plan.early_filer);
    println!(
        "  {:<20} {:>16}",
        "Strategy", "Lifetime to 95"
    );
    println!("  {:-<38}", "");
    println!("  {:<20} {:>16.0}", "Both at chosen age", plain.combined.lifetime_total());
    println!("  {:<20} {:>16.0}", "Hybrid 62/70", hybrid.combined.lifetime_total());

    match break_even_year(&plain.combined, &hybrid.combined) {
        Some(year) => {
            let age = year - primary.date_of_birth.map(|d| d.year()).unwrap_or(0);
            println!("  Hybrid overtakes in {} (primary age {})", year, age);
        }
        None => println!("  Hybrid never overtakes by the horizon"),
    }
}

/// Clone with an overridden claim age; already-filed persons are left alone
fn with_claim_age(person: &Person, claim_age: ClaimAge) -> Person {
    let mut adjusted = person.clone();
    if matches!(adjusted.filed, FiledStatus::NotFiled) {
        adjusted.claim_age = claim_age;
    }
    adjusted
}
