use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::DashboardFrame;

pub const DASHBOARD_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: DashboardFrame,
}

impl DashboardFrame {
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::InvalidData(format!("failed to serialize frame: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardFrameJsonContractV1 {
            schema_version: DASHBOARD_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(frame) = serde_json::from_str::<DashboardFrame>(input) {
            return Ok(frame);
        }
        let payload: DashboardFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_FRAME_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
