//! textrescue extract: heuristic treasure extraction.
//!
//! Two independent scans over the source text: dialogue cues
//! ("John said") and plot transitions (sentences opening with
//! "Suddenly,", "Then,", ...). Each hit becomes an unanalyzed
//! [`Fragment`] with a fresh `char-` or `plot-` prefixed UUID.

pub mod characters;
pub mod plot;

use textrescue_core::{Fragment, FragmentKind};
use tracing::debug;
use uuid::Uuid;

/// Extracts treasures from raw text. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Character fragments followed by plot fragments, each in scan order.
    pub fn extract_all(&self, text: &str) -> Vec<Fragment> {
        let mut fragments = self.extract_characters(text);
        fragments.extend(self.extract_plot_elements(text));
        fragments
    }

    /// One fragment per dialogue cue; `text` is the matched "Name verb" span.
    pub fn extract_characters(&self, text: &str) -> Vec<Fragment> {
        let fragments: Vec<Fragment> = characters::find_dialogue_cues(text)
            .into_iter()
            .map(|span| new_fragment(FragmentKind::Character, span))
            .collect();
        debug!("Extracted {} character fragments", fragments.len());
        fragments
    }

    /// One fragment per sentence that opens with a plot marker.
    pub fn extract_plot_elements(&self, text: &str) -> Vec<Fragment> {
        let fragments: Vec<Fragment> = plot::find_plot_sentences(text)
            .into_iter()
            .map(|sentence| new_fragment(FragmentKind::Plot, sentence))
            .collect();
        debug!("Extracted {} plot fragments", fragments.len());
        fragments
    }
}

fn new_fragment(kind: FragmentKind, text: &str) -> Fragment {
    let id = format!("{}-{}", kind.id_prefix(), Uuid::new_v4());
    Fragment::new(id, kind, text)
}
