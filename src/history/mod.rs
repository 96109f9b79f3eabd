use crate::palette::{GeneratorMode, Palette};
use rand::Rng;

/// Linear palette history with a cursor.
///
/// Appending while the cursor is behind the newest entry drops everything
/// after the cursor first, so there is only ever one forward branch.
#[derive(Debug, Clone, Default)]
pub struct PaletteHistory {
    entries: Vec<Palette>,
    cursor: usize,
}

impl PaletteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop entries after the cursor, push `palette` and move the cursor onto it.
    /// Returns the new cursor.
    pub fn append(&mut self, palette: Palette) -> usize {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(palette);
        self.cursor = self.entries.len() - 1;
        tracing::debug!(cursor = self.cursor, len = self.entries.len(), "history append");
        self.cursor
    }

    /// Move the cursor to `index`. Out-of-range requests are ignored.
    /// Returns whether the cursor moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || index == self.cursor {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Step back one entry; no-op at the oldest entry
    pub fn previous(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Step forward one entry; no-op at the newest entry
    pub fn next(&mut self) -> bool {
        self.go_to(self.cursor + 1)
    }

    /// Seed an empty history with one generated palette.
    /// Returns the cursor either way.
    pub fn ensure_seeded<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mode: GeneratorMode,
        count: usize,
    ) -> usize {
        if self.entries.is_empty() {
            self.append(mode.generate(rng, count));
        }
        self.cursor
    }

    /// Get the current cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the palette at the cursor
    pub fn current(&self) -> Option<&Palette> {
        self.entries.get(self.cursor)
    }

    /// Get all palettes, oldest first
    #[allow(dead_code)]
    pub fn entries(&self) -> &[Palette] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Query fragment that addresses the current entry, e.g. `?palette=3`
    pub fn share_query(&self) -> String {
        format!("?palette={}", self.cursor)
    }
}
