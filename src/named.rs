//! Named colors. A [`NamedColorRegistry`] maps a name to per-space channel values; the process
//! keeps an ordered *stack* of registries, searched in registration order with the first match
//! winning, so an application can extend the built-in names without touching them. The built-in
//! registry is loaded from a CSV asset of the CSS named colors, embedded at compile time the same
//! way the conversion matrices are.
//!
//! When an identifier is simultaneously a named color and a registered space name, the named
//! color wins and a warning is logged. That precedence is deliberate: names come from data that
//! users see and type, space names are API-level identifiers, and silently resolving "hsl" to a
//! space when a palette defines a color called "hsl" would be the more surprising of the two
//! readings.

use std::collections::HashMap;
use std::sync::{Once, RwLock};

use crate::error::{ColorError, ColorResult};
use crate::hex;
use crate::space::{self, Channels};
use crate::spaces::channel_map;

// One row of the embedded CSS color table.
#[derive(Debug, Deserialize)]
struct NamedColorRecord {
    name: String,
    hex: String,
}

/// A name-to-channels lookup table, scoped by space: the same name may carry different channel
/// values in different spaces.
#[derive(Debug, Clone, Default)]
pub struct NamedColorRegistry {
    entries: HashMap<String, HashMap<String, Channels>>,
}

impl NamedColorRegistry {
    /// Creates an empty registry.
    pub fn new() -> NamedColorRegistry {
        NamedColorRegistry::default()
    }

    /// Registers channel values for a name in a space, overwriting any previous entry for the
    /// same pair.
    pub fn register(&mut self, name: &str, space_name: &str, values: Channels) {
        self.entries
            .entry(name.to_lowercase())
            .or_insert_with(HashMap::new)
            .insert(space_name.to_string(), values);
    }

    /// Whether the registry has an entry for the name in the given space.
    pub fn has(&self, name: &str, space_name: &str) -> bool {
        self.get(name, space_name).is_some()
    }

    /// The channel values for a name in a space, if registered.
    pub fn get(&self, name: &str, space_name: &str) -> Option<&Channels> {
        self.entries
            .get(&name.to_lowercase())
            .and_then(|spaces| spaces.get(space_name))
    }

    /// Every registered name, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

lazy_static! {
    static ref STACK: RwLock<Vec<NamedColorRegistry>> = RwLock::new(Vec::new());
}

static BOOTSTRAP: Once = Once::new();

/// Pushes a registry onto the end of the process-wide stack. Lookups scan in registration order
/// and return the first match, so earlier registries take precedence for a shared name/space
/// pair.
pub fn push_registry(registry: NamedColorRegistry) {
    STACK
        .write()
        .expect("named color stack lock poisoned")
        .push(registry);
}

/// Resolves a name in a space against the stack, in registration order, first match wins.
pub fn lookup(name: &str, space_name: &str) -> ColorResult<Channels> {
    let stack = STACK.read().expect("named color stack lock poisoned");
    for registry in stack.iter() {
        if let Some(values) = registry.get(name, space_name) {
            return Ok(values.clone());
        }
    }
    Err(ColorError::NamedColorNotFound {
        name: name.to_string(),
        space: space_name.to_string(),
    })
}

/// Whether any registry on the stack has an entry for the name in the given space.
pub fn is_registered(name: &str, space_name: &str) -> bool {
    let stack = STACK.read().expect("named color stack lock poisoned");
    stack.iter().any(|registry| registry.has(name, space_name))
}

/// Logs a warning when an identifier is about to resolve as a named color even though it is also
/// a registered space name.
pub fn warn_on_space_conflict(name: &str, space_name: &str) {
    if space::is_registered(name) && is_registered(name, space_name) {
        tracing::warn!(
            identifier = %name,
            "identifier names both a color and a color space; the named color takes precedence"
        );
    }
}

/// Loads the embedded CSS color table into the bottom registry of the stack. Idempotent: the CSV
/// is parsed and pushed exactly once per process, no matter how often this runs.
pub fn register_built_in() {
    BOOTSTRAP.call_once(|| {
        let mut registry = NamedColorRegistry::new();
        let mut reader = csv::Reader::from_reader(include_str!("../data/css-colors.csv").as_bytes());
        for row in reader.deserialize() {
            let record: NamedColorRecord = match row {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed named color row");
                    continue;
                }
            };
            match hex::parse_hex(&record.hex) {
                Ok((r, g, b, _)) => {
                    registry.register(
                        &record.name,
                        "rgb",
                        channel_map(&[("r", r as f64), ("g", g as f64), ("b", b as f64)]),
                    );
                }
                Err(err) => {
                    tracing::warn!(name = %record.name, error = %err, "skipping named color with bad hex");
                }
            }
        }
        tracing::trace!(count = registry.names().len(), "loaded built-in named colors");
        STACK
            .write()
            .expect("named color stack lock poisoned")
            .push(registry);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_colors_loaded() {
        crate::init();
        let red = lookup("red", "rgb").unwrap();
        assert_eq!(red["r"], 255.0);
        assert_eq!(red["g"], 0.0);
        assert_eq!(red["b"], 0.0);
        let rebecca = lookup("rebeccapurple", "rgb").unwrap();
        assert_eq!(rebecca["r"], 102.0);
        assert_eq!(rebecca["g"], 51.0);
        assert_eq!(rebecca["b"], 153.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_space_scoped() {
        crate::init();
        assert!(lookup("RED", "rgb").is_ok());
        assert!(matches!(
            lookup("red", "hsl"),
            Err(ColorError::NamedColorNotFound { .. })
        ));
        assert!(matches!(
            lookup("not-a-color", "rgb"),
            Err(ColorError::NamedColorNotFound { .. })
        ));
    }

    #[test]
    fn test_first_registered_match_wins() {
        crate::init();
        let mut first = NamedColorRegistry::new();
        first.register(
            "test-stacked-red",
            "rgb",
            channel_map(&[("r", 200.0), ("g", 0.0), ("b", 0.0)]),
        );
        push_registry(first);
        assert_eq!(lookup("test-stacked-red", "rgb").unwrap()["r"], 200.0);

        let mut second = NamedColorRegistry::new();
        second.register(
            "test-stacked-red",
            "rgb",
            channel_map(&[("r", 100.0), ("g", 0.0), ("b", 0.0)]),
        );
        second.register(
            "test-stacked-extra",
            "rgb",
            channel_map(&[("r", 7.0), ("g", 0.0), ("b", 0.0)]),
        );
        push_registry(second);
        // scan order is registration order, so the earlier entry still wins
        assert_eq!(lookup("test-stacked-red", "rgb").unwrap()["r"], 200.0);
        // names only the later registry holds are still reachable
        assert_eq!(lookup("test-stacked-extra", "rgb").unwrap()["r"], 7.0);
        assert!(lookup("red", "rgb").is_ok());
    }

    #[test]
    fn test_named_color_wins_over_space_name() {
        crate::init();
        use crate::value::ColorValue;
        let mut overlay = NamedColorRegistry::new();
        overlay.register(
            "hsv",
            "rgb",
            channel_map(&[("r", 1.0), ("g", 2.0), ("b", 3.0)]),
        );
        push_registry(overlay);
        // "hsv" is also a registered space, but the named color takes precedence
        let color = ColorValue::parse("hsv").unwrap();
        assert_eq!(color.space_name(), "rgb");
        assert_eq!(color.get("r").unwrap(), 1.0);
    }
}
