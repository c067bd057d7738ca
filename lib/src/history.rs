//! Per-iteration loss record.

use serde::Serialize;

/// Training and validation loss, one entry per completed iteration.
///
/// Entries are only ever appended, by the trainer; consumers get read-only slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LossHistory {
    train: Vec<f64>,
    validation: Vec<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            train: Vec::with_capacity(capacity),
            validation: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, train_loss: f64, validation_loss: f64) {
        self.train.push(train_loss);
        self.validation.push(validation_loss);
    }

    pub fn train(&self) -> &[f64] {
        &self.train
    }

    pub fn validation(&self) -> &[f64] {
        &self.validation
    }

    /// Number of completed iterations.
    pub fn len(&self) -> usize {
        self.train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty()
    }

    /// `(train, validation)` loss of the last completed iteration.
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.train.last()?, *self.validation.last()?))
    }

    /// Absolute change in training loss between the last two iterations.
    pub fn last_train_delta(&self) -> Option<f64> {
        match self.train.as_slice() {
            [.., prev, cur] => Some((cur - prev).abs()),
            _ => None,
        }
    }

    /// `train[i] - validation[i]` for every iteration.
    pub fn generalization_gap(&self) -> Vec<f64> {
        self.train
            .iter()
            .zip(&self.validation)
            .map(|(t, v)| t - v)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_empty() {
        let history = LossHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.last(), None);
        assert_eq!(history.last_train_delta(), None);
    }

    #[test]
    fn test_history_record_in_order() {
        let mut history = LossHistory::with_capacity(3);
        history.record(4.0, 5.0);
        history.record(2.0, 3.5);
        history.record(1.5, 3.0);

        assert_eq!(history.train(), &[4.0, 2.0, 1.5]);
        assert_eq!(history.validation(), &[5.0, 3.5, 3.0]);
        assert_eq!(history.last(), Some((1.5, 3.0)));
        assert_eq!(history.last_train_delta(), Some(0.5));
    }

    #[test]
    fn test_history_single_entry_has_no_delta() {
        let mut history = LossHistory::new();
        history.record(1.0, 1.0);
        assert_eq!(history.last_train_delta(), None);
    }

    #[test]
    fn test_generalization_gap() {
        let mut history = LossHistory::new();
        history.record(4.0, 5.0);
        history.record(2.0, 1.5);

        assert_eq!(history.generalization_gap(), vec![-1.0, 0.5]);
    }

    #[test]
    fn test_history_serializes_both_sequences() {
        let mut history = LossHistory::new();
        history.record(1.0, 2.0);

        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"train":[1.0],"validation":[2.0]}"#);
    }
}
