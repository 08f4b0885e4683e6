//! The ACA load review checklist rules, in table order.
//!
//! Thresholds are literal domain data; nothing here checks them against a load.

use aca_model::{RuleDefinition, RuleRow};

/// Named columns of the star-catalog requirement tables.
pub const STAR_CATALOG_COLUMNS: [&str; 4] = ["#FL", "#AS", "#GS", "#MW"];

const BRIGHT_STAR_HOLD: &str = "Possible Bright Star Hold";
const REDUCED_ASPECT: &str = "Reduced aspect quality";
const REDUCED_SCIENCE: &str = "Reduced science quality";
const FAILURE_TO_TRACK: &str = "Failure to track";
const FAILURE_TO_TRACK_STAR: &str = "Failure to track star";
const NO_HEADER_3: &str = "No ACA Header 3 telemetry";
const GROUND_PROCESSING: &str = "Ground processing difficulty";

/// Implications shared by the OR and ER catalog composition tables.
const CATALOG_GROUP_IMPLICATIONS: [&str; 5] = [
    "AS:",
    BRIGHT_STAR_HOLD,
    "",
    "GS:",
    REDUCED_ASPECT,
];

/// Every rule of the checklist, in the order ids are assigned.
pub fn aca_load_review_rules() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::check(
            "Pointing",
            "Verify that the backstop pointing and OR pointing agree to within 1 arcsec",
            REDUCED_SCIENCE,
        ),
        RuleDefinition::check(
            "SIM TT Z-position",
            "Matching SIM Translation Table Z-positions in backstop and OR list",
            "Fiducial lights not tracked",
        ),
        RuleDefinition::check(
            "Dither",
            "Dither commanding in OR and backstop match",
            REDUCED_SCIENCE,
        ),
        RuleDefinition::check(
            "Dither",
            "Dither does not change state during an observation (after star acquisition)",
            REDUCED_SCIENCE,
        ),
        RuleDefinition::check(
            "Star catalog",
            "Star catalog exists unless observation is done in gyro hold",
            BRIGHT_STAR_HOLD,
        ),
        RuleDefinition::check(
            "Star catalog",
            "#AS = maximum possible <= 8",
            BRIGHT_STAR_HOLD,
        ),
        RuleDefinition::check(
            "Star catalog",
            "#FL + #GS + #MW = maximum possible <= 8",
            REDUCED_ASPECT,
        ),
        observation_request_catalog(),
        engineering_request_catalog(),
        RuleDefinition::check(
            "Magnitude limit",
            "AS: 5.8 - 10.3 (or fainter, if needed to find stars)",
            BRIGHT_STAR_HOLD,
        ),
        RuleDefinition::check(
            "Magnitude limit",
            "GS: 6.0 - 10.3 (or fainter, if needed to find stars)",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check("Magnitude limit", "FL: 6.8 - 7.2", REDUCED_ASPECT),
        RuleDefinition::check(
            "CCD quadrant inner boundary exclusion zones",
            "AS: n/a",
            BRIGHT_STAR_HOLD,
        ),
        RuleDefinition::check(
            "CCD quadrant inner boundary exclusion zones",
            "GS: (dither + 20) arcsec",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "CCD quadrant inner boundary exclusion zones",
            "FL: 25 arcsec",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check("Search box size", "AS: HW (arcsec) >= MU", BRIGHT_STAR_HOLD),
        RuleDefinition::check("Search box size", "GS: HW (arcsec) = 25", REDUCED_ASPECT),
        RuleDefinition::check("Search box size", "FL: HW (arcsec) = 25", REDUCED_ASPECT),
        RuleDefinition::check(
            "Search box size",
            "Search box has <= 200 arcsec half-width",
            "Failure to track correct star",
        ),
        RuleDefinition::check(
            "ACA field-of-view limits",
            "AS: Y,Z at least (HW + dither) inside field-of-view limits",
            BRIGHT_STAR_HOLD,
        ),
        RuleDefinition::check(
            "ACA field-of-view limits",
            "GS: Y,Z at least (HW + dither) inside field-of-view limits",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "ACA field-of-view limits",
            "FL: Z at least HW inside field-of-view limits",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Spoiler stars",
            "AS: spoiled by another object brighter than mag(AS) + 0.2, \
             that lies closer than MU arcsec to the AS search box",
            BRIGHT_STAR_HOLD,
        ),
        RuleDefinition::check(
            "Spoiler stars",
            "GS: spoiled by another object brighter than mag(GS) + 0.2, \
             that lies closer than MU arcsec to the GS search box",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Spoiler stars",
            "FL: spoiled by another object brighter than mag(FL) + 4.0, \
             that lies closer than (dither + 25) arcsec to the FL",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Bad pixels",
            "No guide star is within (dither + 25) arcsec (Y or Z) of a known bad pixel",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Common column",
            "Spoiler within 50 arcsec, spoiler is 4.5 mag brighter than star, \
             and spoiler is located between star and readout",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Readout sizes",
            "Acquisition star and guide star readout sizes are all 6x6 for ORs",
            REDUCED_ASPECT,
        )
        .with_implications([REDUCED_ASPECT, GROUND_PROCESSING]),
        RuleDefinition::check(
            "Readout sizes",
            "Acquisition star and guide star readout sizes are all 8x8 for ERs",
            NO_HEADER_3,
        ),
        RuleDefinition::check(
            "Readout sizes",
            "Fiducial light readout sizes are all 8x8",
            NO_HEADER_3,
        ),
        RuleDefinition::check(
            "Readout sizes",
            "Monitor window readout sizes are all 8x8",
            REDUCED_SCIENCE,
        ),
        RuleDefinition::check(
            "Bad AGASC IDs",
            "No selected acquisition star or guide star to be in the bad AGASC ID list",
            FAILURE_TO_TRACK_STAR,
        ),
        RuleDefinition::check(
            "AGASC requirements",
            "Stars have a measured AGASC magnitude and magnitude error",
            FAILURE_TO_TRACK_STAR,
        ),
        RuleDefinition::check(
            "Marginal stars",
            "Guide star has valid color information (B-V != 0.700)",
            FAILURE_TO_TRACK_STAR,
        ),
        RuleDefinition::check(
            "Fiducial lights",
            "Verify FLs turned on via FIDSEL statement match expected FLs in star catalog",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Fiducial lights",
            "Commanded fiducial light position matches expected position",
            FAILURE_TO_TRACK,
        ),
        RuleDefinition::check(
            "Monitor commanding",
            "Monitor window (if #MW = 1) is in image slot #7",
            GROUND_PROCESSING,
        ),
        RuleDefinition::check(
            "Monitor commanding",
            "Monitor window is within 2.5 arcsec of the OR specification",
            REDUCED_SCIENCE,
        ),
        RuleDefinition::check(
            "Monitor commanding",
            "Monitor window is not set to convert-to-track",
            REDUCED_ASPECT,
        ),
        RuleDefinition::check(
            "Monitor commanding",
            "Designated Tracked Star (DTS) image slot must contain a guide star",
            FAILURE_TO_TRACK,
        ),
        RuleDefinition::check(
            "Monitor commanding",
            "Dither is disabled and enabled with correct timing",
            FAILURE_TO_TRACK,
        ),
        RuleDefinition::check(
            "Magnitude",
            "Slot MAXMAG (faint limit) - star MAG >= 1.4",
            "AS: Possible Bright Star Hold, GS: Reduced aspect quality",
        ),
    ]
}

/// Catalog composition for Observation Requests.
fn observation_request_catalog() -> RuleDefinition {
    RuleDefinition::grouped(
        "Star catalog",
        vec![
            RuleRow::heading("Observation Request (OR)", STAR_CATALOG_COLUMNS),
            RuleRow::with_values("Requirements", ["<=3", ">=4", ">=4", "<=1"]),
            RuleRow::with_values("Standard configuration", ["3", "4-8", "5", "0"]),
            RuleRow::with_values(
                "Alternate configuration (monitor window)",
                ["3", "4-8", "4", "1"],
            ),
            RuleRow::with_values(
                "Alternate configuration (6 guide stars)",
                ["2", "4-8", "6", "0"],
            ),
        ],
    )
    .with_implications(CATALOG_GROUP_IMPLICATIONS)
}

/// Catalog composition for Engineering Requests.
fn engineering_request_catalog() -> RuleDefinition {
    RuleDefinition::grouped(
        "Star catalog",
        vec![
            RuleRow::heading("Engineering Request (ER)", STAR_CATALOG_COLUMNS),
            RuleRow::with_values("Requirements", ["0", ">=5", ">=6", "<=2"]),
            RuleRow::with_values("Standard configuration", ["0", "5-8", "6-8", "0"]),
            RuleRow::with_values(
                "Alternate configuration (1 monitor window)",
                ["0", "5-8", "6-7", "1"],
            ),
            RuleRow::with_values(
                "Alternate configuration (2 monitor windows)",
                ["0", "5-8", "6", "2"],
            ),
        ],
    )
    .with_implications(CATALOG_GROUP_IMPLICATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_groups_have_heading_and_four_value_rows() {
        for group in [observation_request_catalog(), engineering_request_catalog()] {
            assert_eq!(group.rows.len(), 5);
            assert!(group.rows[0].heading);
            assert_eq!(group.rows[0].values, STAR_CATALOG_COLUMNS);
            assert!(group.rows.iter().all(|row| row.values.len() == 4));
            assert_eq!(group.implications.len(), 5);
        }
    }

    #[test]
    fn only_catalog_tables_are_grouped() {
        let grouped: Vec<_> = aca_load_review_rules()
            .into_iter()
            .filter(RuleDefinition::is_grouped)
            .map(|rule| rule.rows[0].label.clone())
            .collect();
        assert_eq!(
            grouped,
            ["Observation Request (OR)", "Engineering Request (ER)"]
        );
    }
}
