//! Response DTOs
//!
//! Flattened read views returned across the service boundary. Serialized
//! camelCase for JSON clients.

use crate::models::OrderTable;
use serde::{Deserialize, Serialize};

/// Flattened read view of an order table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl TableResponse {
    pub fn of(table: &OrderTable) -> Self {
        Self {
            id: table.id,
            table_group_id: table.table_group_id,
            number_of_guests: table.number_of_guests,
            empty: table.empty,
        }
    }
}

impl From<&OrderTable> for TableResponse {
    fn from(table: &OrderTable) -> Self {
        Self::of(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_response_serializes_camel_case() {
        let table = OrderTable {
            id: 7,
            table_group_id: None,
            number_of_guests: 4,
            empty: false,
        };

        let json = serde_json::to_value(TableResponse::of(&table)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "tableGroupId": null,
                "numberOfGuests": 4,
                "empty": false,
            })
        );
    }

    #[test]
    fn table_response_keeps_group_reference() {
        let table = OrderTable {
            id: 1,
            table_group_id: Some(42),
            number_of_guests: 0,
            empty: true,
        };

        let response = TableResponse::from(&table);
        assert_eq!(response.table_group_id, Some(42));
        assert!(response.empty);
    }
}
