pub mod error;
pub mod ids;
pub mod prose;
pub mod rule;

pub use error::{Result, ValidationError};
pub use ids::RuleId;
pub use prose::{BulletList, BulletStyle, GlossaryEntry, ListItem, StaticBlock};
pub use rule::{AssignedRule, NO_CARD_REFERENCE, RuleDefinition, RuleRow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_rule_defaults() {
        let rule = RuleDefinition::check(
            "Pointing",
            "Verify that the backstop pointing and OR pointing agree to within 1 arcsec",
            "Reduced science quality",
        );
        assert!(!rule.is_grouped());
        assert_eq!(rule.card_reference_or_default(), "n/a");
        assert_eq!(rule.implications, vec!["Reduced science quality"]);
    }

    #[test]
    fn grouped_rule_keeps_row_order() {
        let rule = RuleDefinition::grouped(
            "Star catalog",
            vec![
                RuleRow::heading("Observation Request (OR)", ["#FL", "#AS", "#GS", "#MW"]),
                RuleRow::with_values("Requirements", ["<=3", ">=4", ">=4", "<=1"]),
            ],
        )
        .with_card_reference("CARD-7");
        assert!(rule.is_grouped());
        assert!(rule.rows[0].heading);
        assert!(!rule.rows[1].heading);
        assert_eq!(rule.rows[1].label, "Requirements");
        assert_eq!(rule.card_reference_or_default(), "CARD-7");
    }

    #[test]
    fn validation_error_messages() {
        let err = ValidationError::MisalignedGroup {
            id: "ACA-007".to_string(),
            category: "Star catalog".to_string(),
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed rule group ACA-007 (Star catalog): row 2 has 3 values, expected 4"
        );
        assert_eq!(
            ValidationError::EmptyStore.to_string(),
            "rule store is empty"
        );
    }
}
