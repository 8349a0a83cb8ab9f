//! Status board: businesses grouped into pipeline columns.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Business, BusinessStatus};

/// One column of the status board.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    /// Pipeline stage this column represents.
    pub status: BusinessStatus,
    /// Businesses currently in this stage.
    pub businesses: Vec<Business>,
}

/// Businesses grouped by pipeline stage, in fixed column order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessBoard {
    /// Columns in [`BusinessStatus::ALL`] order, one per stage.
    pub columns: Vec<BoardColumn>,
}

impl BusinessBoard {
    /// Group businesses into the five status columns.
    ///
    /// Every stage produces a column even when empty so the board renders a
    /// stable layout. Input order is preserved within each column.
    #[must_use]
    pub fn group(businesses: Vec<Business>) -> Self {
        let mut columns: Vec<BoardColumn> = BusinessStatus::ALL
            .into_iter()
            .map(|status| BoardColumn {
                status,
                businesses: Vec::new(),
            })
            .collect();

        for business in businesses {
            if let Some(column) = columns.iter_mut().find(|c| c.status == business.status) {
                column.businesses.push(business);
            }
        }

        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{BusinessId, NewBusiness};
    use chrono::Utc;
    use rstest::rstest;

    fn business(name: &str, status: BusinessStatus) -> Business {
        let seed = NewBusiness::named(name, None).expect("valid name");
        Business {
            id: BusinessId::random(),
            name: seed.name,
            industry: None,
            status,
            revenue: None,
            employees: None,
            logo_url: None,
            website: None,
            email: None,
            phone: None,
            address: None,
            description: None,
            founded_year: None,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn empty_input_still_produces_every_column() {
        let board = BusinessBoard::group(Vec::new());
        assert_eq!(board.columns.len(), BusinessStatus::ALL.len());
        assert!(board.columns.iter().all(|c| c.businesses.is_empty()));
    }

    #[rstest]
    fn businesses_land_in_their_stage_column_in_order() {
        let board = BusinessBoard::group(vec![
            business("Acme Corporation", BusinessStatus::Partner),
            business("Globex", BusinessStatus::Researching),
            business("Wayne Industries", BusinessStatus::Partner),
        ]);

        let partner = board
            .columns
            .iter()
            .find(|c| c.status == BusinessStatus::Partner)
            .expect("partner column exists");
        let names: Vec<&str> = partner.businesses.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Corporation", "Wayne Industries"]);

        let statuses: Vec<BusinessStatus> = board.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, BusinessStatus::ALL.to_vec());
    }
}
