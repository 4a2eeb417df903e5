//! The `get_time_and_date` tool.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use tempo_protocol::mcp::ToolContent;
use tempo_types::{TempoError, ToolDescriptor, ToolName};

use crate::clock::Clock;
use crate::handler::{ToolError, ToolHandler};

/// Name under which the tool is exposed.
pub const TIME_AND_DATE: &str = "get_time_and_date";

const DESCRIPTION: &str = "Returns the current time and date in ISO format";

/// Reports the current instant as `{"time": "<ISO-8601>"}`.
///
/// Takes no arguments; anything supplied is ignored.
pub struct TimeAndDateTool {
    descriptor: ToolDescriptor,
    clock: Arc<dyn Clock>,
}

impl TimeAndDateTool {
    /// Creates the tool reading time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool name fails validation.
    pub fn new(clock: Arc<dyn Clock>) -> Result<Self, TempoError> {
        Ok(Self {
            descriptor: ToolDescriptor::new(ToolName::new(TIME_AND_DATE)?, DESCRIPTION),
            clock,
        })
    }
}

/// Formats an instant as ISO-8601 in UTC with millisecond precision,
/// e.g. `2024-05-01T12:34:56.789Z`.
pub fn iso8601(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl ToolHandler for TimeAndDateTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn call(&self, _arguments: &Map<String, Value>) -> Result<Vec<ToolContent>, ToolError> {
        let payload = json!({ "time": iso8601(self.clock.now()) });
        let text = serde_json::to_string_pretty(&payload)?;
        Ok(vec![ToolContent::text(text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56)
            .single()
            .expect("valid")
            + chrono::Duration::milliseconds(789)
    }

    #[test]
    fn iso8601_has_millis_and_zulu() {
        assert_eq!(iso8601(fixed()), "2024-05-01T12:34:56.789Z");
    }

    #[test]
    fn iso8601_pads_zero_millis() {
        let t = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).single().expect("valid");
        assert_eq!(iso8601(t), "2030-01-02T03:04:05.000Z");
    }

    #[test]
    fn descriptor_takes_no_input() {
        let tool = TimeAndDateTool::new(Arc::new(FixedClock(fixed()))).expect("tool");
        let d = tool.descriptor();
        assert_eq!(d.name.as_str(), TIME_AND_DATE);
        assert_eq!(d.description, DESCRIPTION);
        assert_eq!(d.input_schema()["type"], "object");
    }

    #[tokio::test]
    async fn call_returns_pretty_json_text() {
        let tool = TimeAndDateTool::new(Arc::new(FixedClock(fixed()))).expect("tool");
        let content = tool.call(&Map::new()).await.expect("call");
        assert_eq!(
            content,
            vec![ToolContent::text(
                "{\n  \"time\": \"2024-05-01T12:34:56.789Z\"\n}"
            )]
        );
    }

    #[tokio::test]
    async fn call_ignores_arguments() {
        let tool = TimeAndDateTool::new(Arc::new(FixedClock(fixed()))).expect("tool");
        let mut args = Map::new();
        args.insert("zone".into(), json!("Europe/Zurich"));
        let with = tool.call(&args).await.expect("call");
        let without = tool.call(&Map::new()).await.expect("call");
        assert_eq!(with, without);
    }
}
