//! Load households from a planning-cohort CSV

use super::{ClaimAge, CoupleMode, FiledStatus, Gender, Household, Person};
use chrono::NaiveDate;
use csv::Reader;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

/// A loaded household with its cohort identifier
#[derive(Debug, Clone)]
pub struct HouseholdRecord {
    pub household_id: u32,
    pub household: Household,
}

/// Raw CSV row; one row per covered life
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "HouseholdID")]
    household_id: u32,
    #[serde(rename = "Role")]
    role: String,
    #[serde(rename = "DOB")]
    dob: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "PIA")]
    pia: f64,
    #[serde(rename = "ClaimAgeYears")]
    claim_age_years: u8,
    #[serde(rename = "ClaimAgeMonths")]
    claim_age_months: u8,
    #[serde(rename = "Filed")]
    filed: String,
    #[serde(rename = "CurrentBenefit")]
    current_benefit: Option<f64>,
    #[serde(rename = "FiledAgeYears")]
    filed_age_years: Option<u8>,
    #[serde(rename = "Mode")]
    mode: String,
    #[serde(rename = "DeathYear")]
    death_year: Option<i32>,
}

impl CsvRow {
    fn to_person(&self) -> Result<Person, Box<dyn Error>> {
        let date_of_birth = NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d")
            .map_err(|e| format!("bad DOB '{}': {}", self.dob, e))?;

        let gender = match self.gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            other => return Err(format!("Unknown Gender: {}", other).into()),
        };

        let claim_age = ClaimAge::new(self.claim_age_years, self.claim_age_months);

        let filed = match self.filed.as_str() {
            "N" => FiledStatus::NotFiled,
            "Y" => {
                let monthly_benefit = self
                    .current_benefit
                    .ok_or("Filed row is missing CurrentBenefit")?;
                let filed_age = ClaimAge::new(
                    self.filed_age_years.ok_or("Filed row is missing FiledAgeYears")?,
                    0,
                );
                FiledStatus::Filed { monthly_benefit, filed_age }
            }
            other => return Err(format!("Unknown Filed flag: {}", other).into()),
        };

        Ok(Person {
            date_of_birth: Some(date_of_birth),
            gender,
            pia_at_fra: self.pia,
            claim_age,
            filed,
        })
    }

    fn couple_mode(&self) -> Result<CoupleMode, Box<dyn Error>> {
        match self.mode.as_str() {
            "Plain" | "" => Ok(CoupleMode::Plain),
            "SurvivorSwitch" => {
                let death_year = self
                    .death_year
                    .ok_or("SurvivorSwitch row is missing DeathYear")?;
                Ok(CoupleMode::SurvivorSwitch { death_year })
            }
            "Hybrid" => Ok(CoupleMode::Hybrid),
            other => Err(format!("Unknown Mode: {}", other).into()),
        }
    }
}

fn assemble(rows: Vec<CsvRow>) -> Result<Vec<HouseholdRecord>, Box<dyn Error>> {
    let mut grouped: BTreeMap<u32, Vec<CsvRow>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.household_id).or_default().push(row);
    }

    let mut records = Vec::with_capacity(grouped.len());
    for (household_id, members) in grouped {
        let mut primary = None;
        let mut spouse = None;
        let mut mode = CoupleMode::Plain;

        for row in &members {
            match row.role.as_str() {
                "Primary" => {
                    if primary.is_some() {
                        return Err(format!("household {} has two Primary rows", household_id).into());
                    }
                    mode = row.couple_mode()?;
                    primary = Some(row.to_person()?);
                }
                "Spouse" => {
                    if spouse.is_some() {
                        return Err(format!("household {} has two Spouse rows", household_id).into());
                    }
                    spouse = Some(row.to_person()?);
                }
                other => return Err(format!("Unknown Role: {}", other).into()),
            }
        }

        let primary = primary
            .ok_or_else(|| format!("household {} has no Primary row", household_id))?;

        let household = match spouse {
            Some(spouse) => Household::couple(primary, spouse, mode),
            None => Household::single(primary),
        };

        records.push(HouseholdRecord { household_id, household });
    }

    log::info!("loaded {} households", records.len());
    Ok(records)
}

/// Load all households from a CSV file
pub fn load_households<P: AsRef<Path>>(path: P) -> Result<Vec<HouseholdRecord>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let rows: Result<Vec<CsvRow>, _> = reader.deserialize().collect();
    assemble(rows?)
}

/// Load households from any reader (e.g. string buffer, network stream)
pub fn load_households_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<HouseholdRecord>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let rows: Result<Vec<CsvRow>, _> = csv_reader.deserialize().collect();
    assemble(rows?)
}

/// Load households from the default data/households.csv location
pub fn load_default_households() -> Result<Vec<HouseholdRecord>, Box<dyn Error>> {
    load_households("data/households.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_households() {
        let records = load_default_households().expect("Failed to load households");
        assert_eq!(records.len(), 6);

        // Household 1 is a single not-yet-filed woman born 1960
        let h1 = &records[0];
        assert_eq!(h1.household_id, 1);
        assert!(h1.household.spouse().is_none());
        assert_eq!(h1.household.primary().birth_year(), Some(1960));

        // Household 3 carries a survivor switch
        let h3 = &records[2];
        match &h3.household {
            Household::Couple { mode: CoupleMode::SurvivorSwitch { death_year }, .. } => {
                assert_eq!(*death_year, 2042);
            }
            other => panic!("household 3 should be a survivor-switch couple, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "\
HouseholdID,Role,DOB,Gender,PIA,ClaimAgeYears,ClaimAgeMonths,Filed,CurrentBenefit,FiledAgeYears,Mode,DeathYear
7,Primary,1959-04-02,Male,2100.50,66,10,N,,,Plain,
7,Spouse,1963-11-20,Female,1500.00,62,0,N,,,,
";
        let records = load_households_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let household = &records[0].household;
        assert_eq!(household.primary().claim_age, ClaimAge::new(66, 10));
        assert_eq!(household.spouse().unwrap().gender, Gender::Female);
    }

    #[test]
    fn test_filed_row_requires_current_benefit() {
        let csv = "\
HouseholdID,Role,DOB,Gender,PIA,ClaimAgeYears,ClaimAgeMonths,Filed,CurrentBenefit,FiledAgeYears,Mode,DeathYear
1,Primary,1958-06-01,Male,1850.00,64,0,Y,,,Plain,
";
        assert!(load_households_from_reader(csv.as_bytes()).is_err());
    }
}
