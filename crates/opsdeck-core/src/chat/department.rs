//! The fixed set of organizational departments.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One of the organization's departments.
///
/// Departments key the chat sessions and the per-department usage
/// dimension of the metrics snapshot. Display strings match the
/// product's seed data, so `"Recursos Humanos".parse::<Department>()`
/// round-trips with [`Department::to_string`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Department {
    Legal,
    #[serde(rename = "Recursos Humanos")]
    #[strum(to_string = "Recursos Humanos")]
    RecursosHumanos,
    Finanzas,
    #[serde(rename = "IT")]
    #[strum(to_string = "IT")]
    It,
    Ventas,
    Marketing,
    Operaciones,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_product_names() {
        assert_eq!(Department::Legal.to_string(), "Legal");
        assert_eq!(Department::RecursosHumanos.to_string(), "Recursos Humanos");
        assert_eq!(Department::It.to_string(), "IT");
    }

    #[test]
    fn test_parse_round_trips_for_all_departments() {
        for department in Department::iter() {
            let parsed: Department = department.to_string().parse().unwrap();
            assert_eq!(parsed, department);
        }
    }

    #[test]
    fn test_unknown_name_fails_to_parse() {
        assert!("Compras".parse::<Department>().is_err());
    }
}
