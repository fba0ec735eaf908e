//! Published client results.

use serde::{Deserialize, Serialize};

/// One headline number, keyed in camelCase (`patientEngagement`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyMetric {
    pub key: String,
    pub value: String,
}

impl CaseStudyMetric {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Display label: `patientEngagement` becomes `Patient Engagement`.
    pub fn label(&self) -> String {
        let mut label = String::with_capacity(self.key.len() + 4);
        for (i, c) in self.key.chars().enumerate() {
            if i == 0 {
                label.extend(c.to_uppercase());
            } else if c.is_uppercase() {
                label.push(' ');
                label.push(c);
            } else {
                label.push(c);
            }
        }
        label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: u32,
    pub practice_name: String,
    pub practice_type: String,
    pub metrics: Vec<CaseStudyMetric>,
    pub testimonial: String,
}
