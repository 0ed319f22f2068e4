use std::collections::HashMap;

/// Case-insensitive lookup from a display label back to its enum code.
///
/// Keys are stored lowercased (full Unicode lowering, labels are Cyrillic).
#[derive(Debug, Clone, Default)]
pub struct ReverseLabelMap {
    map: HashMap<String, String>,
}

impl ReverseLabelMap {
    /// Build from `(code, label)` pairs. A label shared by two codes keeps the
    /// code inserted last.
    pub fn new<I, C, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: AsRef<str>,
        L: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (code, label) in entries {
            map.insert(label.as_ref().to_lowercase(), code.as_ref().to_string());
        }
        Self { map }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.map.get(&label.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
