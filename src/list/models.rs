#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub is_selected: bool,
}

impl Item {
    pub fn new(title: String) -> Self {
        Self {
            title,
            is_selected: false,
        }
    }
}

/// An immutable view of the list at one instant. Mutating operations build a
/// new snapshot instead of editing in place, so the renderer never observes a
/// half-updated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    items: Vec<Item>,
}

impl Snapshot {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Builds the session list: `count` unselected items titled "item 1"
    /// through "item {count}".
    pub fn generate(count: usize) -> Self {
        let items = (1..=count)
            .map(|n| Item::new(format!("item {}", n)))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a new snapshot with the item at `index` inverted and every
    /// other item unchanged. An out-of-range index is a caller bug; the host
    /// layer only ever presents valid indices, so this panics rather than
    /// clamping silently.
    pub fn toggled(&self, index: usize) -> Self {
        assert!(
            index < self.items.len(),
            "toggle index {} out of range for list of {}",
            index,
            self.items.len()
        );
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == index {
                    Item {
                        title: item.title.clone(),
                        is_selected: !item.is_selected,
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Returns a new snapshot with every selection cleared.
    pub fn cleared(&self) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| Item {
                title: item.title.clone(),
                is_selected: false,
            })
            .collect();
        Self { items }
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selected).count()
    }

    pub fn any_selected(&self) -> bool {
        self.selected_count() > 0
    }
}
