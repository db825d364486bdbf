//! Overall and grouped tournament statistics.

use super::record::TournamentRecord;
use super::stake_tier::StakeTier;
use serde::Serialize;
use std::collections::HashMap;

/// Summary over a whole record collection.
///
/// Field order is the key order of `summary_overall.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_tournaments: usize,
    pub total_buyin: f64,
    pub total_prize: f64,
    pub total_profit: f64,
    pub roi_percent: f64,
    pub itm_percent: f64,
    pub abi: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupAggregate {
    pub count: usize,
    pub buyin: f64,
    pub prize: f64,
    pub profit: f64,
    pub roi_percent: f64,
    pub abi: f64,
}

impl GroupAggregate {
    fn add(&mut self, record: &TournamentRecord) {
        self.count += 1;
        self.buyin += record.buyin_total;
        self.prize += record.prize;
        self.profit += record.profit;
    }

    fn finish(&mut self) {
        self.roi_percent = roi_percent(self.profit, self.buyin);
        self.abi = ratio(self.buyin, self.count);
    }
}

/// Group-by result that iterates in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedStats {
    groups: Vec<(String, GroupAggregate)>,
    index: HashMap<String, usize>,
}

impl GroupedStats {
    fn entry(&mut self, key: &str) -> &mut GroupAggregate {
        let slot = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.groups.push((key.to_string(), GroupAggregate::default()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[slot].1
    }

    pub fn get(&self, key: &str) -> Option<&GroupAggregate> {
        self.index.get(key).map(|&i| &self.groups[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupAggregate)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn roi_percent(profit: f64, buyin: f64) -> f64 {
    if buyin > 0.0 {
        profit / buyin * 100.0
    } else {
        0.0
    }
}

fn ratio(sum: f64, count: usize) -> f64 {
    if count > 0 { sum / count as f64 } else { 0.0 }
}

pub fn aggregate_overall(records: &[TournamentRecord]) -> AggregateStats {
    let total = records.len();
    let total_buyin: f64 = records.iter().map(|r| r.buyin_total).sum();
    let total_prize: f64 = records.iter().map(|r| r.prize).sum();
    let total_profit = total_prize - total_buyin;
    let itm_count = records.iter().filter(|r| r.is_itm()).count();

    AggregateStats {
        total_tournaments: total,
        total_buyin,
        total_prize,
        total_profit,
        roi_percent: roi_percent(total_profit, total_buyin),
        itm_percent: ratio(itm_count as f64, total) * 100.0,
        abi: ratio(total_buyin, total),
    }
}

/// Sum records into groups keyed by `key_fn`, then derive ROI and ABI.
pub fn aggregate_by_key<'a, K, F>(records: &'a [TournamentRecord], key_fn: F) -> GroupedStats
where
    F: Fn(&'a TournamentRecord) -> K,
    K: AsRef<str>,
{
    let mut grouped = GroupedStats::default();
    for record in records {
        grouped.entry(key_fn(record).as_ref()).add(record);
    }
    for (_, group) in grouped.groups.iter_mut() {
        group.finish();
    }
    grouped
}

pub fn aggregate_by_stake_tier(records: &[TournamentRecord]) -> GroupedStats {
    aggregate_by_key(records, |r| StakeTier::from_buyin(r.buyin_total).label())
}

pub fn aggregate_by_type(records: &[TournamentRecord]) -> GroupedStats {
    aggregate_by_key(records, |r| r.tournament_type.as_str())
}
