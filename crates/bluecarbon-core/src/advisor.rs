//! Canned sustainability assistant.
//!
//! Questions are matched against a fixed keyword list and answered from fixed
//! templates. There is no inference here.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quick questions offered to the user.
pub const QUICK_QUESTIONS: &[&str] = &[
    "How can our manufacturing plant reduce emissions by 30%?",
    "What's the best strategy for carbon neutrality in 2025?",
    "How many carbon credits should we purchase?",
    "Which renewable energy options suit our industry?",
];

/// Greeting shown before the first question.
pub const GREETING: &str = "Hello! I'm your AI sustainability assistant. I can help industries reduce their carbon emissions and determine optimal carbon credit strategies. What would you like to know?";

/// Recognised question topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Manufacturing,
    CarbonNeutral,
    Credits,
    General,
}

/// Keywords in match order. The first hit wins.
const INTENT_KEYWORDS: &[(&str, Intent)] = &[
    ("manufacturing", Intent::Manufacturing),
    ("carbon neutral", Intent::CarbonNeutral),
    ("credits", Intent::Credits),
];

/// Keywords that attach the sample recommendations to a reply.
const RECOMMENDATION_KEYWORDS: &[&str] = &["reduce", "emissions"];

impl Intent {
    pub fn detect(question: &str) -> Intent {
        let lower = question.to_lowercase();
        INTENT_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::General)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Manufacturing => write!(f, "manufacturing"),
            Intent::CarbonNeutral => write!(f, "carbon neutral"),
            Intent::Credits => write!(f, "credits"),
            Intent::General => write!(f, "general"),
        }
    }
}

/// Reply template for an intent.
pub fn reply_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Manufacturing => "For manufacturing plants, I recommend a multi-pronged approach: 1) Energy efficiency upgrades, 2) Renewable energy transition, 3) Process optimization, and 4) Supply chain improvements. Based on typical manufacturing emissions, you could achieve 30-50% reduction through these strategies.",
        Intent::CarbonNeutral => "Achieving carbon neutrality requires: 1) Measuring your current baseline emissions, 2) Setting science-based reduction targets, 3) Implementing emission reduction strategies, and 4) Offsetting remaining emissions with verified carbon credits. I can help you create a detailed roadmap.",
        Intent::Credits => "The number of carbon credits depends on your annual emissions and reduction goals. As a rule of thumb, purchase 120% of your net emissions (after reductions) to account for potential variations. I recommend focusing on blue carbon credits for maximum environmental impact.",
        Intent::General => "Great question! Based on current industry best practices and your sector, I can provide tailored recommendations. Let me analyze the most effective strategies for your specific situation and emission profile.",
    }
}

pub fn wants_recommendations(question: &str) -> bool {
    let lower = question.to_lowercase();
    RECOMMENDATION_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub cost: String,
    pub timeframe: String,
    pub priority: Priority,
}

pub fn sample_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            title: "Switch to Renewable Energy".into(),
            description: "Install solar panels or purchase renewable energy certificates to reduce energy-related emissions by 40-60%.".into(),
            impact: "45% emission reduction".into(),
            cost: "$50,000 - $200,000".into(),
            timeframe: "6-12 months".into(),
            priority: Priority::High,
        },
        Recommendation {
            title: "Optimize Transportation Logistics".into(),
            description: "Implement route optimization and transition to electric/hybrid vehicles for deliveries.".into(),
            impact: "25% transport emission reduction".into(),
            cost: "$30,000 - $100,000".into(),
            timeframe: "3-6 months".into(),
            priority: Priority::Medium,
        },
        Recommendation {
            title: "Implement Circular Economy Practices".into(),
            description: "Set up waste recycling programs and material reuse systems to minimize waste generation.".into(),
            impact: "15% overall emission reduction".into(),
            cost: "$10,000 - $50,000".into(),
            timeframe: "2-4 months".into(),
            priority: Priority::Medium,
        },
    ]
}

/// A general emission reduction measure and its typical range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionStrategy {
    pub name: &'static str,
    pub reduction: &'static str,
}

pub fn reduction_strategies() -> &'static [ReductionStrategy] {
    const STRATEGIES: &[ReductionStrategy] = &[
        ReductionStrategy {
            name: "Switch to renewable energy sources",
            reduction: "30-50%",
        },
        ReductionStrategy {
            name: "Optimize transportation and logistics",
            reduction: "15-25%",
        },
        ReductionStrategy {
            name: "Implement waste reduction programs",
            reduction: "10-20%",
        },
        ReductionStrategy {
            name: "Invest in energy-efficient equipment",
            reduction: "20-35%",
        },
    ];
    STRATEGIES
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub question: String,
    pub intent: Intent,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
}

/// Answer a question from the canned templates.
pub fn answer(question: &str) -> Result<AdvisorReply, CalcError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyQuestion);
    }

    let intent = Intent::detect(trimmed);
    let recommendations = if wants_recommendations(trimmed) {
        sample_recommendations()
    } else {
        Vec::new()
    };

    tracing::debug!(%intent, recommendations = recommendations.len(), "answered question");

    Ok(AdvisorReply {
        question: trimmed.to_string(),
        intent,
        content: reply_for(intent).to_string(),
        recommendations,
    })
}
