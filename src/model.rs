//! Supplier entity and request body shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `supplier` table. The wire format keeps the camelCase
/// names existing clients depend on (`supplierId`, `createDate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Generated by the database on insert; stable for the row's lifetime.
    pub supplier_id: i64,
    /// Set once on create, never touched by updates.
    pub create_date: Option<NaiveDate>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

/// Request-scoped supplier body: everything a client may set. The generated
/// id and the create date are never taken from a request, so a client-sent
/// `supplierId` or `createDate` is silently dropped here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn supplier_serializes_wire_names() {
        let supplier = Supplier {
            supplier_id: 7,
            create_date: NaiveDate::from_ymd_opt(2024, 3, 9),
            name: Some("Acme Co".into()),
            phone: Some("555-1000".into()),
            email: None,
            address: None,
            address2: None,
            city: None,
            state: None,
            zip: None,
            country: None,
        };
        let v = serde_json::to_value(&supplier).expect("serialize");
        assert_eq!(v["supplierId"], json!(7));
        assert_eq!(v["createDate"], json!("2024-03-09"));
        assert_eq!(v["name"], json!("Acme Co"));
        assert_eq!(v["phone"], json!("555-1000"));
        assert_eq!(v["email"], json!(null));
    }

    #[test]
    fn draft_ignores_id_and_create_date() {
        let draft: SupplierDraft = serde_json::from_value(json!({
            "supplierId": 12345,
            "createDate": "1999-01-01",
            "name": "Acme Co"
        }))
        .expect("deserialize");
        assert_eq!(draft.name.as_deref(), Some("Acme Co"));
        assert!(draft.phone.is_none());
    }

    #[test]
    fn draft_omitted_fields_are_absent() {
        let draft: SupplierDraft = serde_json::from_value(json!({"name": "Acme Co"})).expect("deserialize");
        assert!(draft.email.is_none());
        assert!(draft.country.is_none());
    }
}
