use crate::features::users::types::BLOOD_TYPES;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Counts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub available: u64,
}

/// `GET /count-by-blood-type` answers `{ data: { "A+": { total, available } } }`.
#[derive(Deserialize)]
pub(crate) struct StatsEnvelope {
    #[serde(default)]
    pub data: BTreeMap<String, Counts>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloodStat {
    pub blood_type: String,
    pub total: u64,
    pub available: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvailabilityBand {
    High,
    Medium,
    Low,
}

impl AvailabilityBand {
    pub fn label(self) -> &'static str {
        match self {
            AvailabilityBand::High => "High",
            AvailabilityBand::Medium => "Medium",
            AvailabilityBand::Low => "Low",
        }
    }
}

impl BloodStat {
    /// Available donors as a whole percentage of the total, 0 when empty.
    pub fn availability_percent(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            (self.available.min(self.total) * 100) / self.total
        }
    }

    /// High from 70 %, medium from 40 %, low below.
    pub fn band(&self) -> AvailabilityBand {
        match self.availability_percent() {
            70.. => AvailabilityBand::High,
            40.. => AvailabilityBand::Medium,
            _ => AvailabilityBand::Low,
        }
    }
}

/// Flattens the API map, standard blood types first in their usual order.
pub fn into_stats(data: BTreeMap<String, Counts>) -> Vec<BloodStat> {
    let mut stats: Vec<BloodStat> = data
        .into_iter()
        .map(|(blood_type, counts)| BloodStat {
            blood_type,
            total: counts.total,
            available: counts.available,
        })
        .collect();
    stats.sort_by_key(|stat| {
        let rank = BLOOD_TYPES
            .iter()
            .position(|known| *known == stat.blood_type)
            .unwrap_or(BLOOD_TYPES.len());
        (rank, stat.blood_type.clone())
    });
    stats
}

pub fn total_donors(stats: &[BloodStat]) -> u64 {
    stats.iter().map(|stat| stat.total).sum()
}

#[cfg(test)]
mod tests {
    use super::{AvailabilityBand, BloodStat, StatsEnvelope, into_stats, total_donors};

    fn stat(total: u64, available: u64) -> BloodStat {
        BloodStat {
            blood_type: "A+".to_string(),
            total,
            available,
        }
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(stat(10, 7).band(), AvailabilityBand::High);
        assert_eq!(stat(10, 6).band(), AvailabilityBand::Medium);
        assert_eq!(stat(10, 4).band(), AvailabilityBand::Medium);
        assert_eq!(stat(10, 3).band(), AvailabilityBand::Low);
        assert_eq!(stat(0, 0).band(), AvailabilityBand::Low);
        assert_eq!(stat(3, 9).availability_percent(), 100);
    }

    #[test]
    fn stats_are_ordered_by_blood_type() {
        let envelope: StatsEnvelope = serde_json::from_str(
            r#"{"data":{"O-":{"total":2,"available":1},"A+":{"total":5,"available":5},"AB+":{"total":1}}}"#,
        )
        .expect("stats");

        let stats = into_stats(envelope.data);

        let order: Vec<_> = stats.iter().map(|stat| stat.blood_type.as_str()).collect();
        assert_eq!(order, ["A+", "AB+", "O-"]);
        assert_eq!(stats[1].available, 0);
        assert_eq!(total_donors(&stats), 8);
    }
}
