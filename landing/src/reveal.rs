//! Reveal capability backed by signals.

use leptos::prelude::*;
use vis_core::{Reveal, RevealBoard, RevealMotion};

/// A section's visibility flag. The board flips it; [`Appear`] blocks read it.
#[derive(Clone, Copy)]
pub struct RevealSignal(RwSignal<bool>);

impl RevealSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl Default for RevealSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Reveal for RevealSignal {
    fn set_revealed(&mut self, revealed: bool) {
        self.0.set(revealed);
    }

    fn is_revealed(&self) -> bool {
        self.0.get_untracked()
    }
}

/// One reveal flag per section, kept in step with `active`.
pub fn use_reveal_board(count: usize, active: ReadSignal<usize>) -> Vec<RevealSignal> {
    let signals: Vec<RevealSignal> = (0..count).map(|_| RevealSignal::new()).collect();
    let mut board = RevealBoard::new();
    for signal in &signals {
        board.register(Box::new(*signal));
    }
    let board = StoredValue::new_local(board);

    Effect::new(move || {
        let index = active.get();
        board.try_update_value(|b| b.sync(index));
    });

    signals
}

/// Wrapper that animates its children in when the section is revealed.
#[component]
pub fn Appear(
    revealed: RevealSignal,
    motion: RevealMotion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class style=move || motion.style(revealed.get())>
            {children()}
        </div>
    }
}
