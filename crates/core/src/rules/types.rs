use serde::{Deserialize, Serialize};
use std::fmt;

/// Claim verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Rejected => "rejected",
        }
    }

    /// Parse a verdict leniently ("APPROVED", " Rejected ").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "approved" => Some(Decision::Approved),
            "rejected" => Some(Decision::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict produced by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDecision {
    pub decision: Decision,
    pub justification: String,
    pub amount: String,
}

/// Payout amounts reported by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Amount reported for an approved claim. Fixed; not derived from any
    /// query field.
    #[serde(default = "default_approved_amount")]
    pub approved_amount: String,
    /// Amount reported for a rejected claim.
    #[serde(default = "default_rejected_amount")]
    pub rejected_amount: String,
}

fn default_approved_amount() -> String {
    "₹80,000".to_string()
}

fn default_rejected_amount() -> String {
    "₹0".to_string()
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            approved_amount: default_approved_amount(),
            rejected_amount: default_rejected_amount(),
        }
    }
}

impl RuleConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.approved_amount.trim().is_empty() {
            return Err("rules.approved_amount cannot be empty".to_string());
        }
        if self.rejected_amount.trim().is_empty() {
            return Err("rules.rejected_amount cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_serde() {
        assert_eq!(serde_json::to_string(&Decision::Approved).unwrap(), "\"approved\"");
        let d: Decision = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(d, Decision::Rejected);
    }

    #[test]
    fn test_decision_parse_lenient() {
        assert_eq!(Decision::parse("APPROVED"), Some(Decision::Approved));
        assert_eq!(Decision::parse(" Rejected "), Some(Decision::Rejected));
        assert_eq!(Decision::parse("pending"), None);
    }

    #[test]
    fn test_rule_config_defaults_and_override() {
        let config: RuleConfig = toml::from_str("").unwrap();
        assert_eq!(config, RuleConfig::default());
        assert_eq!(config.approved_amount, "₹80,000");

        let config: RuleConfig = toml::from_str(r#"approved_amount = "$1,000""#).unwrap();
        assert_eq!(config.approved_amount, "$1,000");
        assert_eq!(config.rejected_amount, "₹0");
    }

    #[test]
    fn test_rule_config_validation() {
        assert!(RuleConfig::default().validate().is_ok());
        let config = RuleConfig {
            approved_amount: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
