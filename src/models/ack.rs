use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};

// Acknowledgements mirror the driver's native result shapes on the wire,
// camelCase keys included.

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        InsertAck {
            acknowledged: true,
            inserted_id: id_string(result.inserted_id),
        }
    }
}

// Driver-assigned ids render as hex, client-supplied strings pass through
// unquoted.
fn id_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn object_id_renders_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_string(Bson::ObjectId(oid)), oid.to_hex());
    }

    #[test]
    fn client_supplied_string_id_is_not_requoted() {
        assert_eq!(id_string(Bson::String("custom".to_string())), "custom");
    }

    #[test]
    fn other_id_types_fall_back_to_display() {
        assert_eq!(id_string(Bson::Int32(7)), "7");
    }

    #[test]
    fn insert_ack_uses_driver_key_names() {
        let ack = InsertAck {
            acknowledged: true,
            inserted_id: "64b0c8a19f1d4c3a2b1e0f99".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "acknowledged": true, "insertedId": "64b0c8a19f1d4c3a2b1e0f99" })
        );
    }

    #[test]
    fn update_ack_reports_both_counts() {
        let ack = UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 0 })
        );
    }

    #[test]
    fn delete_ack_allows_zero_deletions() {
        let ack = DeleteAck {
            acknowledged: true,
            deleted_count: 0,
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "acknowledged": true, "deletedCount": 0 })
        );
    }
}
