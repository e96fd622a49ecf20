use serde::Serialize;

/// Per-name accumulator for one generation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BotStats {
    pub name: String,
    pub total_score: f64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub cooperation_rates: Vec<f64>,
    /// Mean of `cooperation_rates`, filled once the generation is over.
    pub cooperation_rate: f64,
}

impl BotStats {
    pub fn new(name: &str) -> Self {
        BotStats {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn close(&mut self) {
        self.cooperation_rate = if self.cooperation_rates.is_empty() {
            0.0
        } else {
            self.cooperation_rates.iter().sum::<f64>() / self.cooperation_rates.len() as f64
        };
    }
}

/// Stats keyed by strategy name, in first-seen order.
///
/// Several bots of the same kind in one population share a single entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsTable {
    entries: Vec<BotStats>,
}

impl StatsTable {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = StatsTable::default();
        for name in names {
            table.entry(name);
        }
        table
    }

    pub fn entry(&mut self, name: &str) -> &mut BotStats {
        let index = match self.entries.iter().position(|stats| stats.name == name) {
            Some(index) => index,
            None => {
                self.entries.push(BotStats::new(name));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }

    pub fn get(&self, name: &str) -> Option<&BotStats> {
        self.entries.iter().find(|stats| stats.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BotStats> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn close(&mut self) {
        self.entries.iter_mut().for_each(BotStats::close);
    }
}
