use std::cell::Cell;
use std::rc::Rc;

/// Hands out icon glyphs and counts the icons that are still alive
#[derive(Debug, Clone, Default)]
pub struct IconAtlas {
    live: Rc<Cell<usize>>,
}

impl IconAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, name: &'static str, glyph: &str) -> Icon {
        self.live.set(self.live.get() + 1);

        #[cfg(debug_assertions)]
        log::debug!("Icon '{}' acquired ({} live)", name, self.live.get());

        Icon {
            name,
            glyph: glyph.to_string(),
            live: Rc::clone(&self.live),
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.get()
    }
}

/// An icon owned by a widget; released when dropped
#[derive(Debug)]
pub struct Icon {
    name: &'static str,
    glyph: String,
    live: Rc<Cell<usize>>,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl Drop for Icon {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));

        #[cfg(debug_assertions)]
        log::debug!("Icon '{}' released ({} live)", self.name, self.live.get());
    }
}
