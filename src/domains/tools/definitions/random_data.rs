//! Random data tool definition.
//!
//! The probe's main payload generator: returns one or more randomized
//! technical-data records, optionally after a simulated-latency delay. The
//! delay is a cooperative sleep so the transport can keep reading frames
//! while a call is suspended.

use std::time::Duration;

use rand::Rng;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::parse_params;
use crate::domains::tools::{
    ToolError,
    generator::{self, TechnicalData},
};

/// Parameters for the random data tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RandomDataParams {
    /// Number of data records to generate (1-10, default: 1).
    #[serde(default = "default_count")]
    #[schemars(range(min = 1, max = 10))]
    pub count: u32,

    /// Add a small random delay (50-500ms) to simulate real API latency.
    #[serde(default)]
    pub include_delay: bool,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Serialize)]
struct RecordBatch {
    records: Vec<TechnicalData>,
    count: u32,
}

/// Random data tool - returns randomized structured technical data.
pub struct RandomDataTool;

impl RandomDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-random-data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns random structured technical data for \
        exercising stdio pipelines. Each record carries 10-15 fields of synthetic metrics.";

    /// Execute the tool logic, producing the canonical payload text.
    ///
    /// Out-of-range `count` values are clamped to [1, 10] rather than
    /// rejected. A single record is returned bare; multiple records are
    /// wrapped in a `{records, count}` envelope.
    pub async fn run(arguments: JsonObject) -> Result<String, ToolError> {
        let params: RandomDataParams = parse_params(arguments)?;
        let count = params.count.clamp(1, 10);

        if params.include_delay {
            let delay_ms = rand::thread_rng().gen_range(50..=500);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let payload = if count == 1 {
            serde_json::to_string_pretty(&generator::technical_data())
        } else {
            let records: Vec<TechnicalData> =
                (0..count).map(|_| generator::technical_data()).collect();
            serde_json::to_string_pretty(&RecordBatch { records, count })
        };

        payload.map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RandomDataParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: serde_json::Value) -> JsonObject {
        json.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_single_record_returned_bare() {
        let payload = RandomDataTool::run(JsonObject::new()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert!(value.get("records").is_none());
        assert!(value["request_id"].is_string());
        assert!(value["metrics"].is_object());
    }

    #[tokio::test]
    async fn test_multiple_records_are_wrapped() {
        let payload = RandomDataTool::run(args(serde_json::json!({"count": 5})))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["count"], 5);
        let records = value["records"].as_array().unwrap();
        assert_eq!(records.len(), 5);
        for record in records {
            let status = record["status"].as_str().unwrap();
            assert!(["healthy", "degraded", "warning", "critical"].contains(&status));
            assert!(record.as_object().unwrap().len() >= 8);
        }
    }

    #[tokio::test]
    async fn test_count_clamped_to_upper_bound() {
        let payload = RandomDataTool::run(args(serde_json::json!({"count": 15})))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["count"], 10);
        assert_eq!(value["records"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_count_zero_clamped_to_one() {
        let payload = RandomDataTool::run(args(serde_json::json!({"count": 0})))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        // Clamped to a single record, which is returned bare.
        assert!(value.get("records").is_none());
        assert!(value["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_delay_suspends_at_least_the_minimum() {
        let started = std::time::Instant::now();
        RandomDataTool::run(args(serde_json::json!({"include_delay": true})))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_schema_advertises_count_bounds_and_default() {
        let tool = RandomDataTool::to_tool();
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        let count = &schema["properties"]["count"];
        assert_eq!(count["minimum"], 1);
        assert_eq!(count["maximum"], 10);
        assert_eq!(count["default"], 1);
    }
}
