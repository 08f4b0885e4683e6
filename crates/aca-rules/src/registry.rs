//! Sequential id assignment for checklist rules.

use tracing::{debug, info};

use aca_model::{AssignedRule, RuleDefinition, RuleId, ValidationError};

/// Hands out `ACA-NNN` ids in store order, one per logical rule.
///
/// The counter lives in this value rather than in rendering state, so the
/// same store always numbers the same way.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    assigned: usize,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of definitions assigned so far.
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    /// The id the next definition will receive, if the format has room.
    pub fn next_id(&self) -> Option<RuleId> {
        RuleId::new(self.assigned).ok()
    }

    /// Assign the next id to `definition`.
    ///
    /// The counter only advances on success.
    pub fn assign(&mut self, definition: RuleDefinition) -> Result<AssignedRule, ValidationError> {
        let position = self.assigned;
        if definition.rows.is_empty() {
            return Err(ValidationError::NoRows {
                position,
                category: definition.category,
            });
        }
        let id = RuleId::new(position).map_err(|_| ValidationError::IdOverflow {
            position,
            counter: position,
            max: RuleId::MAX,
        })?;
        debug!(
            %id,
            category = %definition.category,
            rows = definition.rows.len(),
            "assigned rule id"
        );
        self.assigned += 1;
        Ok(AssignedRule { id, definition })
    }
}

/// Number every definition in order, starting at `ACA-000`.
///
/// Fails without partial output if the store is empty, a definition has no
/// rows, or the store holds more rules than three digits can number.
pub fn assign_ids<I>(definitions: I) -> Result<Vec<AssignedRule>, ValidationError>
where
    I: IntoIterator<Item = RuleDefinition>,
{
    let mut registry = RuleRegistry::new();
    let assigned = definitions
        .into_iter()
        .map(|definition| registry.assign(definition))
        .collect::<Result<Vec<_>, _>>()?;
    if assigned.is_empty() {
        return Err(ValidationError::EmptyStore);
    }
    info!(rules = assigned.len(), "assigned checklist rule ids");
    Ok(assigned)
}
