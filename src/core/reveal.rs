use fnv::FnvHashSet;

/// Where items revealed after a root are looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemScope {
    WithinRoot,
    Document,
}

/// Element marked when the root reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkTarget {
    Root,
    Selector(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMark {
    pub target: MarkTarget,
    pub delay_ms: u32,
}

/// Item `i` is revealed at `base_ms + i * step_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    #[inline]
    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_ms + index as u32 * self.step_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealItems {
    pub selector: &'static str,
    pub scope: ItemScope,
    pub stagger: Stagger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub name: &'static str,
    /// Every element matching this selector is observed as a root.
    pub root: &'static str,
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub root_mark: Option<RootMark>,
    pub items: Option<RevealItems>,
    /// When set, `will-change` is reset this long after each mark.
    pub will_change_reset_ms: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepTarget {
    Mark(MarkTarget),
    Item(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    MarkVisible,
    ResetWillChange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub target: StepTarget,
    pub at_ms: u32,
    pub action: StepAction,
}

impl RevealConfig {
    /// Timeline for a root that just crossed the threshold, ordered by start time.
    pub fn schedule(&self, item_count: usize) -> Vec<RevealStep> {
        let mut steps = Vec::new();
        if let Some(mark) = self.root_mark {
            self.push_mark(&mut steps, StepTarget::Mark(mark.target), mark.delay_ms);
        }
        if let Some(items) = self.items {
            for i in 0..item_count {
                self.push_mark(&mut steps, StepTarget::Item(i), items.stagger.delay_for(i));
            }
        }
        steps.sort_by_key(|s| s.at_ms);
        steps
    }

    fn push_mark(&self, steps: &mut Vec<RevealStep>, target: StepTarget, at_ms: u32) {
        steps.push(RevealStep {
            target,
            at_ms,
            action: StepAction::MarkVisible,
        });
        if let Some(reset) = self.will_change_reset_ms {
            steps.push(RevealStep {
                target,
                at_ms: at_ms + reset,
                action: StepAction::ResetWillChange,
            });
        }
    }

    /// Attribute used to key roots of this config in the registry.
    pub fn key_attribute(&self) -> String {
        format!("data-reveal-{}", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

/// One-way `Unrevealed -> Revealed` flags for the roots of one config.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    revealed: FnvHashSet<u32>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: u32) -> RevealState {
        if self.revealed.contains(&key) {
            RevealState::Revealed
        } else {
            RevealState::Unrevealed
        }
    }

    /// Flip the root to revealed. Only the first call for a key returns true;
    /// the observer's own threshold decides when a call is made.
    pub fn claim(&mut self, key: u32) -> bool {
        match self.state(key) {
            RevealState::Revealed => false,
            RevealState::Unrevealed => self.revealed.insert(key),
        }
    }
}
