use bingo_core::ElementHandle;
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use web_sys::Element;

/// Owner of the DOM elements drawn for cells.
///
/// Boards only keep the [`ElementHandle`]s handed out here. Once an element is released its handle
/// resolves to `None`, whatever board still mentions it.
#[derive(Debug)]
pub struct ElementRegistry {
    next: NonZeroU32,
    elements: BTreeMap<ElementHandle, Element>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            next: NonZeroU32::MIN,
            elements: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, element: Element) -> ElementHandle {
        let handle = ElementHandle::from_raw(self.next);
        self.next = self.next.checked_add(1).unwrap_or(NonZeroU32::MIN);
        self.elements.insert(handle, element);
        handle
    }

    pub fn get(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(&handle)
    }

    pub fn release(&mut self, handle: ElementHandle) -> Option<Element> {
        self.elements.remove(&handle)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
