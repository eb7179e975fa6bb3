//! Configuration surface exposed to UI/persistence collaborators.
//!
//! The option set round-trips through serde; persisting the ordered source
//! references themselves stays with the host.

use serde::{Deserialize, Serialize};

use crate::engine::BlendList;

/// Snapshot of a list's recognized options.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    /// Per-slot weights, in list order.
    pub weights: Vec<f32>,
    pub average: bool,
    pub index_mode: bool,
    /// Index-mode cursor.
    pub index: usize,
    /// Chain composition; transform lists only.
    pub sequential: bool,
    /// Weight against the accumulated basis; transform lists only.
    pub weight_against_mode: bool,
    pub tag: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            weights: Vec::new(),
            average: false,
            index_mode: false,
            index: 0,
            sequential: false,
            weight_against_mode: false,
            tag: String::new(),
        }
    }
}

impl BlendList {
    pub fn config(&self) -> ListConfig {
        ListConfig {
            weights: (0..self.len()).map(|i| self.list().weight(i)).collect(),
            average: self.average(),
            index_mode: self.index_mode(),
            index: self.list().index_mode_index(),
            sequential: self.sequential(),
            weight_against_mode: self.against_basis(),
            tag: self.tag().to_string(),
        }
    }

    /// Apply an option snapshot. Weights beyond the current slot count are
    /// ignored; the index clamps like any other cursor move.
    pub fn apply_config(&mut self, config: &ListConfig) {
        for (slot, weight) in config.weights.iter().enumerate() {
            self.list_mut().set_weight(slot, *weight);
        }
        self.set_average(config.average);
        self.set_index_mode(config.index_mode);
        self.list_mut().set_index_mode_index(config.index as isize);
        self.set_sequential(config.sequential);
        self.set_against_basis(config.weight_against_mode);
        self.set_tag(config.tag.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weightlist_api_core::ValueKind;

    #[test]
    fn config_round_trips_through_json() {
        let config = ListConfig {
            weights: vec![1.0, 0.25, -0.5],
            average: true,
            index_mode: false,
            index: 2,
            sequential: true,
            weight_against_mode: true,
            tag: "arm.fk".to_string(),
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: ListConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn apply_clamps_index_into_range() {
        let mut list = BlendList::new(ValueKind::Float);
        let config = ListConfig {
            index: 42,
            ..ListConfig::default()
        };
        list.apply_config(&config);
        assert_eq!(list.list().index_mode_index(), 0);
    }
}
