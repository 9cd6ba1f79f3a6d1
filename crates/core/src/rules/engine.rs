use super::types::{Decision, RuleConfig, RuleDecision};
use crate::entities::ExtractedEntities;

const NO_MATCH: &str = "Unable to match clause or detect procedure from query.";
const NOT_MENTIONED: &str = "Procedure not clearly mentioned in policy document.";

/// Decides a claim from the parsed procedure and a matched clause.
///
/// Pure and deterministic: only `entities.procedure` and `matched_clause`
/// influence the verdict.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn decide(&self, entities: &ExtractedEntities, matched_clause: &str) -> RuleDecision {
        let procedure = entities.procedure.as_str();

        if matched_clause.is_empty() || procedure.is_empty() {
            return self.rejected(NO_MATCH);
        }

        if matched_clause
            .to_lowercase()
            .contains(&procedure.to_lowercase())
        {
            return RuleDecision {
                decision: Decision::Approved,
                justification: format!(
                    "{} is covered under the policy. Clause matched.",
                    capitalize(procedure)
                ),
                amount: self.config.approved_amount.clone(),
            };
        }

        self.rejected(NOT_MENTIONED)
    }

    fn rejected(&self, justification: &str) -> RuleDecision {
        RuleDecision {
            decision: Decision::Rejected,
            justification: justification.to_string(),
            amount: self.config.rejected_amount.clone(),
        }
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(procedure: &str) -> ExtractedEntities {
        ExtractedEntities {
            procedure: procedure.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_approves_when_clause_mentions_procedure() {
        let decision =
            RuleEngine::default().decide(&entities("Knee Surgery"), "covered: knee surgery and bypass");
        assert_eq!(decision.decision, Decision::Approved);
        assert_eq!(decision.amount, "₹80,000");
        assert_eq!(
            decision.justification,
            "Knee surgery is covered under the policy. Clause matched."
        );
    }

    #[test]
    fn test_clause_match_is_case_insensitive() {
        let decision = RuleEngine::default().decide(&entities("bypass"), "CORONARY BYPASS is covered");
        assert_eq!(decision.decision, Decision::Approved);
        assert_eq!(
            decision.justification,
            "Bypass is covered under the policy. Clause matched."
        );
    }

    #[test]
    fn test_empty_inputs_reject() {
        let engine = RuleEngine::default();
        let expected = RuleDecision {
            decision: Decision::Rejected,
            justification: NO_MATCH.to_string(),
            amount: "₹0".to_string(),
        };

        assert_eq!(engine.decide(&entities(""), "knee surgery is covered"), expected);
        assert_eq!(engine.decide(&entities("knee surgery"), ""), expected);
        assert_eq!(engine.decide(&entities(""), ""), expected);
    }

    #[test]
    fn test_unmentioned_procedure_rejects() {
        let decision =
            RuleEngine::default().decide(&entities("heart surgery"), "knee surgery is covered");
        assert_eq!(decision.decision, Decision::Rejected);
        assert_eq!(decision.justification, NOT_MENTIONED);
        assert_eq!(decision.amount, "₹0");
    }

    #[test]
    fn test_other_fields_do_not_matter() {
        let engine = RuleEngine::default();
        let bare = entities("treatment");
        let full = ExtractedEntities {
            age: Some(70),
            procedure: "treatment".to_string(),
            location: "kochi".to_string(),
            policy_duration: "1 month".to_string(),
        };
        let clause = "treatment costs are reimbursed";
        assert_eq!(engine.decide(&bare, clause), engine.decide(&full, clause));
    }

    #[test]
    fn test_configured_amounts() {
        let engine = RuleEngine::new(RuleConfig {
            approved_amount: "₹1,50,000".to_string(),
            rejected_amount: "none".to_string(),
        });
        assert_eq!(
            engine.decide(&entities("bypass"), "bypass").amount,
            "₹1,50,000"
        );
        assert_eq!(engine.decide(&entities("bypass"), "").amount, "none");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("knee surgery"), "Knee surgery");
        assert_eq!(capitalize("HEART SURGERY"), "Heart surgery");
        assert_eq!(capitalize(""), "");
    }
}
