use serde::{Deserialize, Serialize};

/// Point-in-time availability summary of a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total_cars: usize,
    pub available_cars: usize,
    pub rented_cars: usize,
    /// Percentage of the fleet available, one decimal (`"66.7%"`), or `"0%"` for an empty fleet.
    pub availability_rate: String,
}

impl FleetStats {
    pub fn from_counts(total_cars: usize, available_cars: usize) -> Self {
        let rented_cars = total_cars.saturating_sub(available_cars);
        let availability_rate = if total_cars == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", available_cars as f64 / total_cars as f64 * 100.0)
        };

        Self {
            total_cars,
            available_cars,
            rented_cars,
            availability_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fleet_reports_zero_percent() {
        let stats = FleetStats::from_counts(0, 0);
        assert_eq!(stats.rented_cars, 0);
        assert_eq!(stats.availability_rate, "0%");
    }

    #[test]
    fn rate_is_formatted_to_one_decimal() {
        assert_eq!(FleetStats::from_counts(3, 2).availability_rate, "66.7%");
        assert_eq!(FleetStats::from_counts(1, 1).availability_rate, "100.0%");
        assert_eq!(FleetStats::from_counts(4, 0).availability_rate, "0.0%");
    }
}
