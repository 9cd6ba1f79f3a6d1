//! Instruction template for the semantic adjudicator.

/// System instructions sent with every adjudication request.
pub const ADJUDICATOR_SYSTEM_PROMPT: &str = "You are an insurance claim evaluator. \
You read a policy document and a claim query and decide whether the claim is covered. \
Respond with a single JSON object and nothing else.";

/// Build the adjudication prompt. Both texts are embedded verbatim.
pub fn build_adjudication_prompt(policy_text: &str, query_text: &str) -> String {
    format!(
        r#"Based on the policy document and query, respond in JSON with exactly these fields:
1. decision: "approved" or "rejected"
2. justification: brief explanation
3. amount: estimated payout
4. matched_clause: snippet of the policy that supports the decision
5. similarity_score: float between 0 and 1

Policy:
"""
{policy_text}
"""

Query:
"""
{query_text}
"""
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_texts_verbatim() {
        let policy = "Clause 7: knee surgery is covered up to ₹80,000.";
        let query = "45 year old, knee surgery in Mumbai";
        let prompt = build_adjudication_prompt(policy, query);

        assert!(prompt.contains(policy));
        assert!(prompt.contains(query));
        assert!(prompt.find(policy) < prompt.find(query));
    }

    #[test]
    fn test_prompt_names_all_fields() {
        let prompt = build_adjudication_prompt("", "");
        for field in [
            "decision",
            "justification",
            "amount",
            "matched_clause",
            "similarity_score",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
    }
}
