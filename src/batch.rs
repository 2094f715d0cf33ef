//! Parallel rendering of many matrices
//!
//! Items are pulled from a shared cursor by scoped worker threads. The cancel
//! flag is checked before each item starts; an item that has started always
//! finishes.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crate::error::RenderError;
use crate::matrix::ModuleMatrix;
use crate::renderer::RenderConfig;

/// One render request
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub label: String,
    pub matrix: ModuleMatrix,
}

impl BatchItem {
    pub fn new(label: impl Into<String>, matrix: ModuleMatrix) -> Self {
        Self {
            label: label.into(),
            matrix,
        }
    }
}

/// What happened to one item
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Rendered(String),
    Failed(RenderError),
    /// Cancelled before the item started
    Skipped,
}

/// Result for one item, tagged with its label
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    pub label: String,
    pub outcome: BatchOutcome,
}

/// Render every item, returning outputs in input order
pub fn render_batch(
    items: &[BatchItem],
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Vec<BatchOutput> {
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(items.len())
        .max(1);
    let next = AtomicUsize::new(0);
    let next = &next;

    let mut outcomes: Vec<BatchOutcome> = vec![BatchOutcome::Skipped; items.len()];

    let finished: Vec<Vec<(usize, BatchOutcome)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        if cancel.load(Ordering::Relaxed) {
                            break;
                        }
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(item) = items.get(index) else {
                            break;
                        };
                        let outcome = match crate::render(&item.matrix, &item.label, config) {
                            Ok(svg) => BatchOutcome::Rendered(svg),
                            Err(e) => BatchOutcome::Failed(e),
                        };
                        done.push((index, outcome));
                    }
                    done
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    for (index, outcome) in finished.into_iter().flatten() {
        outcomes[index] = outcome;
    }

    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, BatchOutcome::Skipped))
        .count();
    if skipped > 0 {
        log::warn!("batch cancelled: {} of {} items skipped", skipped, items.len());
    }

    items
        .iter()
        .zip(outcomes)
        .map(|(item, outcome)| BatchOutput {
            label: item.label.clone(),
            outcome,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder_like(size: usize) -> ModuleMatrix {
        ModuleMatrix::from_fn(size, |r, c| (r + c) % 3 != 1).unwrap()
    }

    #[test]
    fn test_outputs_follow_input_order() {
        let items: Vec<_> = (0..8)
            .map(|i| BatchItem::new(format!("item-{}", i), finder_like(5 + i)))
            .collect();
        let config = RenderConfig::default();
        let cancel = AtomicBool::new(false);

        let outputs = render_batch(&items, &config, &cancel);
        assert_eq!(outputs.len(), 8);
        for (i, (item, output)) in items.iter().zip(&outputs).enumerate() {
            assert_eq!(output.label, format!("item-{}", i));
            let expected = crate::render(&item.matrix, &item.label, &config).unwrap();
            assert_eq!(output.outcome, BatchOutcome::Rendered(expected));
        }
    }

    #[test]
    fn test_failures_are_per_item() {
        let items = vec![
            BatchItem::new("ok", finder_like(5)),
            BatchItem::new("blank", ModuleMatrix::from_fn(5, |_, _| false).unwrap()),
        ];
        let cancel = AtomicBool::new(false);
        let outputs = render_batch(&items, &RenderConfig::default(), &cancel);
        assert!(matches!(outputs[0].outcome, BatchOutcome::Rendered(_)));
        assert!(matches!(
            outputs[1].outcome,
            BatchOutcome::Failed(RenderError::InvalidMatrix { .. })
        ));
    }

    #[test]
    fn test_cancelled_before_start_skips_everything() {
        let items: Vec<_> = (0..4)
            .map(|i| BatchItem::new(i.to_string(), finder_like(7)))
            .collect();
        let cancel = AtomicBool::new(true);
        let outputs = render_batch(&items, &RenderConfig::default(), &cancel);
        assert_eq!(outputs.len(), 4);
        assert!(outputs.iter().all(|o| o.outcome == BatchOutcome::Skipped));
    }

    #[test]
    fn test_empty_batch() {
        let cancel = AtomicBool::new(false);
        assert!(render_batch(&[], &RenderConfig::default(), &cancel).is_empty());
    }
}
