use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution status of a task, as reflected on its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not yet started. Used when a node has no execution record.
    #[default]
    Init,
    Waiting,
    Running,
    Skipped,
    Failed,
    Succeeded,
    Suspended,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Init => "INIT",
            TaskStatus::Waiting => "WAITING",
            TaskStatus::Running => "RUNNING",
            TaskStatus::Skipped => "SKIPPED",
            TaskStatus::Failed => "FAILED",
            TaskStatus::Succeeded => "SUCCEEDED",
            TaskStatus::Suspended => "SUSPENDED",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecutionRecord {
    #[serde(default)]
    pub business_id: Option<String>,
    /// The node id (task `ref`) this record belongs to.
    pub node_name: String,
    pub status: TaskStatus,
    /// Start time in epoch milliseconds.
    #[serde(default)]
    pub start_time: Option<u64>,
}

/// Read-only source of execution records.
pub trait ExecutionRecordSource {
    /// The most relevant (latest) record for a node, if any.
    fn latest_for(&self, node_id: &str) -> Option<&TaskExecutionRecord>;
}

/// Newest is the greatest `start_time`; records with no start time rank oldest.
/// On a tie the record appearing later in the slice wins.
impl ExecutionRecordSource for [TaskExecutionRecord] {
    fn latest_for(&self, node_id: &str) -> Option<&TaskExecutionRecord> {
        self.iter()
            .filter(|r| r.node_name == node_id)
            .max_by_key(|r| r.start_time)
    }
}

impl ExecutionRecordSource for Vec<TaskExecutionRecord> {
    fn latest_for(&self, node_id: &str) -> Option<&TaskExecutionRecord> {
        self.as_slice().latest_for(node_id)
    }
}
