use mongodb::bson::Document;

/// Rewrites a driver-assigned `_id` into its 24-char hex form so responses
/// carry `{"_id": "..."}` instead of extended JSON `{"$oid": ...}`.
pub fn with_string_id(mut doc: Document) -> Document {
    if let Ok(oid) = doc.get_object_id("_id") {
        doc.insert("_id", oid.to_hex());
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId, Bson};

    #[test]
    fn object_id_becomes_hex_string() {
        let oid = ObjectId::new();
        let normalized = with_string_id(doc! { "_id": oid, "name": "Robot" });
        assert_eq!(normalized.get_str("_id").unwrap(), oid.to_hex());
        assert_eq!(normalized.get_str("name").unwrap(), "Robot");
    }

    #[test]
    fn non_object_ids_are_left_alone() {
        let normalized = with_string_id(doc! { "_id": "custom-key", "price": 20 });
        assert_eq!(normalized.get_str("_id").unwrap(), "custom-key");
    }

    #[test]
    fn documents_without_an_id_pass_through() {
        let normalized = with_string_id(doc! { "quantity": 5 });
        assert_eq!(normalized.get("_id"), None);
        assert_eq!(normalized.get("quantity"), Some(&Bson::Int32(5)));
    }
}
