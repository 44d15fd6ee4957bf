//! The fixed survey dataset

use super::fact::{KnowledgeFact, KnowledgeTable};

/// One line of the respondent profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyField {
    pub label: &'static str,
    pub value: &'static str,
}

const RESPONDENT_FIELDS: &[SurveyField] = &[
    SurveyField {
        label: "Household yearly income",
        value: "$100,000 to $200,000",
    },
    SurveyField {
        label: "Annual income before tax",
        value: "Range from $150,000 to $200,000",
    },
    SurveyField {
        label: "Company types",
        value: "Manufacturing, IT, Construction, Transportation",
    },
    SurveyField {
        label: "Job sectors",
        value: "IT, Information technology, Human resource",
    },
    SurveyField {
        label: "Housing",
        value: "Homeowner",
    },
    SurveyField {
        label: "Entertainment",
        value: "Netflix, Hulu, Amazon Prime, Apple TV+, Disney+",
    },
    SurveyField {
        label: "Health conditions",
        value: "Type 2 diabetes, COPD, migraine",
    },
    SurveyField {
        label: "Credit score",
        value: "600 to 799",
    },
];

/// Direct answers for the facts a model must never get wrong.
/// Order is priority.
const DIRECT_ANSWERS: &[(&str, &[&str], &str)] = &[
    (
        "household-income",
        &["household income", "household yearly income"],
        "Based on the survey data, the household yearly income is between $100,000 to $200,000.",
    ),
    (
        "income-before-tax",
        &["income before tax", "annual income", "pretax income"],
        "Based on the survey data, the annual income before tax ranges from $150,000 to $200,000.",
    ),
    (
        "credit-score",
        &["credit score"],
        "Based on the survey data, the credit score is between 600 and 799.",
    ),
];

/// The respondent profile every answer is grounded on
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    assistant_name: &'static str,
    fields: &'static [SurveyField],
}

impl SurveyDataset {
    /// The survey respondent this chatbot answers about
    pub fn respondent() -> Self {
        Self {
            assistant_name: "1mDC",
            fields: RESPONDENT_FIELDS,
        }
    }

    pub fn assistant_name(&self) -> &str {
        self.assistant_name
    }

    pub fn fields(&self) -> &[SurveyField] {
        self.fields
    }

    /// Text sent as the first turn of every model session.
    pub fn seed_context(&self) -> String {
        let mut context = format!(
            "You are {}, a survey-focused chatbot. Based on the survey data:\n",
            self.assistant_name
        );
        for field in self.fields {
            context.push_str(&format!("- {}: {}\n", field.label, field.value));
        }
        context.push_str("\nProvide concise, accurate responses based on this data.");
        context
    }

    /// Built-in direct-answer table
    pub fn knowledge_table(&self) -> KnowledgeTable {
        KnowledgeTable::new(
            DIRECT_ANSWERS
                .iter()
                .map(|(id, triggers, answer)| KnowledgeFact::new(*id, triggers.iter(), *answer))
                .collect(),
        )
    }
}

impl Default for SurveyDataset {
    fn default() -> Self {
        Self::respondent()
    }
}
