//! Prompt templates for the three generators.
//!
//! Each form type is built from the submitted [`FormFields`]. Every field
//! defaults to the empty string, so a missing field never fails the request;
//! it just shows up blank in the prompt.

use crate::form::FormFields;
use serde::Deserialize;

/// A form that can be rendered into exactly one prompt.
pub trait PromptTemplate {
    /// Short name used in logs.
    const KIND: &'static str;

    fn from_fields(fields: &FormFields) -> Self;

    fn render(&self) -> String;
}

/// Fields for `POST /generate_campaign`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CampaignForm {
    pub product: String,
    pub audience: String,
    pub platform: String,
}

impl PromptTemplate for CampaignForm {
    const KIND: &'static str = "campaign";

    fn from_fields(fields: &FormFields) -> Self {
        Self {
            product: fields.get("product"),
            audience: fields.get("audience"),
            platform: fields.get("platform"),
        }
    }

    fn render(&self) -> String {
        format!(
            "
Generate a detailed marketing campaign.

Product: {product}
Target Audience: {audience}
Platform: {platform}

Include:
- Campaign objective
- Content ideas
- Ad copies
- Call to action
",
            product = self.product,
            audience = self.audience,
            platform = self.platform,
        )
    }
}

/// Fields for `POST /generate_pitch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PitchForm {
    pub product: String,
    pub customer: String,
}

impl PromptTemplate for PitchForm {
    const KIND: &'static str = "pitch";

    fn from_fields(fields: &FormFields) -> Self {
        Self {
            product: fields.get("product"),
            customer: fields.get("customer"),
        }
    }

    fn render(&self) -> String {
        format!(
            "
Create a compelling AI sales pitch.

Product: {product}
Customer Persona: {customer}

Include:
- 30-second pitch
- Value proposition
- Key benefits
- Call to action
",
            product = self.product,
            customer = self.customer,
        )
    }
}

/// Fields for `POST /score`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub name: String,
    pub budget: String,
    pub need: String,
    pub urgency: String,
}

impl PromptTemplate for LeadForm {
    const KIND: &'static str = "lead_score";

    fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.get("name"),
            budget: fields.get("budget"),
            need: fields.get("need"),
            urgency: fields.get("urgency"),
        }
    }

    fn render(&self) -> String {
        format!(
            "
Score this lead from 0 to 100 based on Budget, Need, and Urgency.

Lead Name: {name}
Budget: {budget}
Need: {need}
Urgency: {urgency}

Also explain reasoning.
",
            name = self.name,
            budget = self.budget,
            need = self.need,
            urgency = self.urgency,
        )
    }
}
