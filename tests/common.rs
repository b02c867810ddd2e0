use std::cell::RefCell;
use std::rc::Rc;

use devfolio::frontend::theme::{Theme, ThemePersistence};

/// In-memory stand-in for the browser's durable key-value store.
#[derive(Clone, Default)]
pub struct MemoryThemeStore {
    value: Rc<RefCell<Option<Theme>>>,
    writes: Rc<RefCell<u32>>,
}

impl MemoryThemeStore {
    pub fn seeded(theme: Theme) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(theme);
        store
    }

    pub fn persisted(&self) -> Option<Theme> {
        *self.value.borrow()
    }

    pub fn write_count(&self) -> u32 {
        *self.writes.borrow()
    }
}

impl ThemePersistence for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        *self.value.borrow()
    }

    fn store(&self, theme: Theme) {
        *self.value.borrow_mut() = Some(theme);
        *self.writes.borrow_mut() += 1;
    }
}
