use crate::domain::model::{CharValue, LifePath, NumerologyReport, NumerologySystem};
use crate::utils::error::Result;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub expression_total: u64,
    pub expression_reduction_steps: Vec<u64>,
    pub expression_final: u64,
    pub soul_urge_total: u64,
    pub soul_urge_reduction_steps: Vec<u64>,
    pub soul_urge_final: u64,
    pub personality_total: u64,
    pub personality_reduction_steps: Vec<u64>,
    pub personality_final: u64,
}

/// JSON 報告內容，欄位順序即輸出順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub input_name: Option<String>,
    pub system: NumerologySystem,
    pub keep_master: bool,
    pub digits_as_numbers: bool,
    pub y_as_vowel: bool,
    pub birth_date: Option<String>,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cleaned_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub breakdown: Option<Vec<CharValue>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub totals: Option<Totals>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub life_path: Option<LifePath>,
}

impl ReportPayload {
    pub fn from_report(report: &NumerologyReport) -> Self {
        let settings = &report.settings;
        let name = report.name.as_ref();

        Self {
            input_name: report.subject.input_name().map(str::to_string),
            system: settings.system,
            keep_master: settings.keep_master,
            digits_as_numbers: settings.digits_as_numbers,
            y_as_vowel: settings.y_as_vowel,
            birth_date: report
                .subject
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            generated_at: report
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            cleaned_name: name.map(|n| n.cleaned_name.clone()),
            breakdown: name.map(|n| n.breakdown.clone()),
            totals: name.map(|n| Totals {
                expression_total: n.expression.total,
                expression_reduction_steps: n.expression.steps.clone(),
                expression_final: n.expression.value,
                soul_urge_total: n.soul_urge.total,
                soul_urge_reduction_steps: n.soul_urge.steps.clone(),
                soul_urge_final: n.soul_urge.value,
                personality_total: n.personality.total,
                personality_reduction_steps: n.personality.steps.clone(),
                personality_final: n.personality.value,
            }),
            life_path: report.life_path.clone(),
        }
    }
}

pub fn report_json(report: &NumerologyReport) -> Result<Vec<u8>> {
    let payload = ReportPayload::from_report(report);
    Ok(serde_json::to_vec_pretty(&payload)?)
}
