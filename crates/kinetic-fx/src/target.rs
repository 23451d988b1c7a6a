use std::collections::HashMap;

// ── StyleTarget ───────────────────────────────────────────────────────────

/// Something whose style an animation writes to, such as a DOM node or a
/// retained widget.
pub trait StyleTarget {
    /// Current value of a style property, used when a descriptor has no start.
    fn style(&self, name: &str) -> Option<String>;

    /// Applies one frame's value for a property.
    fn set_style(&mut self, name: &str, value: &str);
}

// ── StyleMap ──────────────────────────────────────────────────────────────

/// In-memory style sheet for a single element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    styles: HashMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles sorted by property name, for stable output.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .styles
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        out.sort_unstable_by_key(|(k, _)| *k);
        out
    }
}

impl StyleTarget for StyleMap {
    fn style(&self, name: &str) -> Option<String> {
        self.styles.get(name).cloned()
    }

    fn set_style(&mut self, name: &str, value: &str) {
        match self.styles.get_mut(name) {
            Some(existing) => {
                existing.clear();
                existing.push_str(value);
            }
            None => {
                self.styles.insert(name.to_string(), value.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_style_inserts_and_overwrites() {
        let mut map = StyleMap::new();
        map.set_style("width", "10px");
        map.set_style("width", "20px");
        assert_eq!(map.get("width"), Some("20px"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn sorted_is_by_name() {
        let map = StyleMap::new().with("z", "1").with("a", "2");
        assert_eq!(map.sorted(), vec![("a", "2"), ("z", "1")]);
    }
}
