use serde::Serialize;

use crate::{encoding, log::AccessLog};

/// Immutable artifact of one traced execution.
///
/// Produced exactly once per tracer, after the interpreter has stopped. A
/// faulted execution still yields a valid result containing whatever was
/// recorded before the fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceResult {
    /// Storage accesses in execution order.
    #[serde(rename = "sloads")]
    pub accesses: AccessLog,
    /// Raw return data of the execution; empty if none was produced.
    #[serde(serialize_with = "encoding::serialize_output")]
    pub output: Vec<u8>,
}

impl TraceResult {
    /// Renders the result as the JSON document consumed by downstream
    /// classifiers: `{"sloads": [...], "output": "0x..."}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trace_wire_shape() {
        let result = TraceResult {
            accesses: AccessLog::default(),
            output: vec![],
        };
        assert_eq!(result.to_json().unwrap(), r#"{"sloads":[],"output":"0x"}"#);
    }

    #[test]
    fn output_is_hex_encoded() {
        let result = TraceResult {
            accesses: AccessLog::default(),
            output: vec![0xde, 0xad, 0xbe, 0xef],
        };
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"sloads":[],"output":"0xdeadbeef"}"#
        );
    }
}
