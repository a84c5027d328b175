//! Generates unique textual labels for control-flow targets.

/// The counter is shared across all prefixes, so no two labels from
/// one allocator are ever equal even if prefixes collide.
pub struct LabelAllocator {
    counter: usize,
}

impl LabelAllocator {
    pub fn new() -> Self {
        LabelAllocator { counter: 0 }
    }

    pub fn fresh(&mut self, prefix: &str) -> String {
        let label = format!("{}{}", prefix, self.counter);
        self.counter += 1;
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_labels_are_unique() {
        let mut labels = LabelAllocator::new();
        assert_eq!(labels.fresh("L_then_"), "L_then_0");
        assert_eq!(labels.fresh("L_end_"), "L_end_1");
        assert_eq!(labels.fresh("L_then_"), "L_then_2");
    }

    #[test]
    fn test_prefix_collisions_still_unique() {
        let mut labels = LabelAllocator::new();
        let a = labels.fresh("L");
        let b = labels.fresh("L");
        let c = labels.fresh("L");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
