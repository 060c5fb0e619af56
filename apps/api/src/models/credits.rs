use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Billable operations and their fixed costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Upload,
    Generate,
    Regenerate,
}

impl Operation {
    pub fn cost(&self) -> i64 {
        match self {
            Operation::Upload => 1,
            Operation::Generate => 5,
            Operation::Regenerate => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Upload => "upload",
            Operation::Generate => "generate",
            Operation::Regenerate => "regenerate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Operation::Upload),
            "generate" => Ok(Operation::Generate),
            "regenerate" => Ok(Operation::Regenerate),
            other => Err(format!("Unknown operation '{other}'")),
        }
    }
}

/// Per-owner credit balance. `remaining_credits` is maintained by the store
/// as `total_credits - used_credits`; read paths do not recompute it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserCreditsRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_credits: i64,
    pub used_credits: i64,
    pub remaining_credits: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Append-only usage ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CreditUsageRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub operation_type: String,
    pub credits_used: i64,
    pub description: Option<String>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_costs() {
        assert_eq!(Operation::Upload.cost(), 1);
        assert_eq!(Operation::Generate.cost(), 5);
        assert_eq!(Operation::Regenerate.cost(), 3);
    }

    #[test]
    fn test_operation_round_trip() {
        for op in [Operation::Upload, Operation::Generate, Operation::Regenerate] {
            assert_eq!(Operation::from_str(op.as_str()), Ok(op));
        }
        assert!(Operation::from_str("export").is_err());
    }
}
