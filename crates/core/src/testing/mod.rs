//! Testing utilities and mock implementations.
//!
//! Mocks for every external seam of the pipeline, so evaluations can be
//! exercised end to end without a model endpoint or real policy files.
//!
//! # Example
//!
//! ```rust,ignore
//! use claimwise_core::testing::{fixtures, MockLlmClient};
//!
//! let client = Arc::new(MockLlmClient::new());
//! client.push_reply(fixtures::adjudication_reply("approved", "knee surgery covered")).await;
//!
//! let adjudicator = LlmAdjudicator::new(client.clone());
//! let result = adjudicator.adjudicate("policy", "query").await;
//! assert_eq!(client.recorded_requests().await.len(), 1);
//! ```

mod mock_adjudicator;
mod mock_extractor;
mod mock_llm;

pub use mock_adjudicator::{MockAdjudicator, RecordedAdjudication};
pub use mock_extractor::MockTextExtractor;
pub use mock_llm::MockLlmClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a minimal PDF with one page per entry, each page showing its
    /// text in a single line of Courier.
    pub fn policy_pdf(pages: &[&str]) -> Vec<u8> {
        build_pdf(pages, None)
    }

    /// Like [`policy_pdf`], but page `unreadable` (zero-based) names a font
    /// resource that is not a font dictionary, which lopdf cannot decode.
    pub fn policy_pdf_with_unreadable_page(pages: &[&str], unreadable: usize) -> Vec<u8> {
        build_pdf(pages, Some(unreadable))
    }

    fn build_pdf(pages: &[&str], unreadable: Option<usize>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let bogus_font_id = doc.add_object(dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
        });
        let broken_resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => bogus_font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for (index, text) in pages.iter().enumerate() {
            let resources = if unreadable == Some(index) {
                broken_resources_id
            } else {
                resources_id
            };
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let encoded = content.encode().expect("encode page content");
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize fixture pdf");
        bytes
    }

    /// A well-formed adjudicator reply with all five fields.
    pub fn adjudication_reply(decision: &str, matched_clause: &str) -> String {
        let amount = if decision == "approved" { "₹80,000" } else { "₹0" };
        serde_json::json!({
            "decision": decision,
            "justification": format!("The claim is {} under the policy.", decision),
            "amount": amount,
            "matched_clause": matched_clause,
            "similarity_score": 0.92,
        })
        .to_string()
    }
}
