//! The filter framework: three arity-specific traits, a name-keyed registry, and dispatch
//! functions that check arity at the boundary. A filter is anything that maps colors to a color:
//! unary takes one color, parameterized takes a color plus a [`FilterParam`], and binary takes
//! two colors. The built-in filters live in the [`filters`](crate::filters) module; this module only
//! knows how to store and dispatch them. Like the color space registry, the filter registry is
//! process-wide and bootstrapped explicitly by [`register_built_in`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ColorError, ColorResult};
use crate::filters;
use crate::filters::complement::ComplementMethod;
use crate::value::ColorValue;

/// The argument to a parameterized filter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FilterParam {
    /// A scalar amount, interpreted per filter (brightness reads it on the 0-255 scale).
    Amount(f64),
    /// A complement method selector.
    Method(ComplementMethod),
}

/// A filter taking a single color.
pub trait UnaryFilter: Send + Sync {
    /// The registry name of the filter.
    fn name(&self) -> &str;
    /// Applies the filter, returning a new color in the input's space.
    fn apply(&self, color: &ColorValue) -> ColorResult<ColorValue>;
}

/// A filter taking a single color and a parameter.
pub trait ParameterizedFilter: Send + Sync {
    /// The registry name of the filter.
    fn name(&self) -> &str;
    /// Applies the filter with the given parameter.
    fn apply(&self, color: &ColorValue, param: FilterParam) -> ColorResult<ColorValue>;
}

/// A filter combining two colors.
pub trait BinaryFilter: Send + Sync {
    /// The registry name of the filter.
    fn name(&self) -> &str;
    /// Combines the two colors into one.
    fn apply(&self, first: &ColorValue, second: &ColorValue) -> ColorResult<ColorValue>;
}

/// A registered filter, tagged by arity so dispatch can reject mismatched calls instead of
/// guessing.
#[derive(Clone)]
pub enum FilterEntry {
    /// A one-color filter.
    Unary(Arc<dyn UnaryFilter>),
    /// A one-color-plus-parameter filter.
    Parameterized(Arc<dyn ParameterizedFilter>),
    /// A two-color filter.
    Binary(Arc<dyn BinaryFilter>),
}

impl std::fmt::Debug for FilterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FilterEntry::Unary(filter) => write!(f, "Unary({:?})", filter.name()),
            FilterEntry::Parameterized(filter) => write!(f, "Parameterized({:?})", filter.name()),
            FilterEntry::Binary(filter) => write!(f, "Binary({:?})", filter.name()),
        }
    }
}

/// A name-to-filter lookup table. One process-wide instance backs the free functions below; the
/// type is public so tests and embedders can build isolated registries.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    filters: HashMap<String, FilterEntry>,
}

impl FilterRegistry {
    /// Creates an empty registry.
    pub fn new() -> FilterRegistry {
        FilterRegistry::default()
    }

    /// Inserts a filter under a name, silently overwriting any previous registration.
    pub fn register(&mut self, name: &str, entry: FilterEntry) {
        self.filters.insert(name.to_string(), entry);
    }

    /// Removes a filter by name, returning whether anything was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.filters.remove(name).is_some()
    }

    /// Looks a filter up by name.
    pub fn get(&self, name: &str) -> ColorResult<FilterEntry> {
        self.filters
            .get(name)
            .cloned()
            .ok_or_else(|| ColorError::FilterNotFound(name.to_string()))
    }

    /// Whether a filter with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// The registered filter names, sorted for deterministic output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.filters.keys().cloned().collect();
        names.sort();
        names
    }
}

lazy_static! {
    static ref REGISTRY: RwLock<FilterRegistry> = RwLock::new(FilterRegistry::new());
}

/// Registers a filter in the process-wide registry.
pub fn register(name: &str, entry: FilterEntry) {
    REGISTRY
        .write()
        .expect("filter registry lock poisoned")
        .register(name, entry);
}

/// Removes a filter from the process-wide registry, returning whether anything was removed.
pub fn unregister(name: &str) -> bool {
    REGISTRY
        .write()
        .expect("filter registry lock poisoned")
        .unregister(name)
}

/// Looks a filter up in the process-wide registry.
pub fn lookup(name: &str) -> ColorResult<FilterEntry> {
    REGISTRY
        .read()
        .expect("filter registry lock poisoned")
        .get(name)
}

/// Whether a filter name is registered process-wide.
pub fn is_registered(name: &str) -> bool {
    REGISTRY
        .read()
        .expect("filter registry lock poisoned")
        .has(name)
}

/// Applies a registered unary filter by name. Calling a filter of any other arity this way fails
/// with [`ColorError::InvalidArgument`].
pub fn apply(name: &str, color: &ColorValue) -> ColorResult<ColorValue> {
    match lookup(name)? {
        FilterEntry::Unary(filter) => filter.apply(color),
        other => Err(ColorError::InvalidArgument(format!(
            "filter {:?} is {:?}, not unary",
            name, other
        ))),
    }
}

/// Applies a registered parameterized filter by name.
pub fn apply_with(name: &str, color: &ColorValue, param: FilterParam) -> ColorResult<ColorValue> {
    match lookup(name)? {
        FilterEntry::Parameterized(filter) => filter.apply(color, param),
        other => Err(ColorError::InvalidArgument(format!(
            "filter {:?} is {:?}, not parameterized",
            name, other
        ))),
    }
}

/// Applies a registered binary filter by name to two colors.
pub fn combine(name: &str, first: &ColorValue, second: &ColorValue) -> ColorResult<ColorValue> {
    match lookup(name)? {
        FilterEntry::Binary(filter) => filter.apply(first, second),
        other => Err(ColorError::InvalidArgument(format!(
            "filter {:?} is {:?}, not binary",
            name, other
        ))),
    }
}

/// Registers the built-in filters: `blend` and `mix` (binary), `brightness` and `complement`
/// (parameterized), and `grayscale` (unary). The registered `mix` uses an even 0.5 weight;
/// callers wanting another weight construct [`Mix`](crate::filters::mix::Mix) directly.
/// Idempotent, like the color space bootstrap.
pub fn register_built_in() {
    let mut registry = REGISTRY.write().expect("filter registry lock poisoned");
    registry.register(
        "blend",
        FilterEntry::Binary(Arc::new(filters::blend::Blend)),
    );
    registry.register(
        "mix",
        FilterEntry::Binary(Arc::new(filters::mix::Mix::default())),
    );
    registry.register(
        "brightness",
        FilterEntry::Parameterized(Arc::new(filters::brightness::Brightness)),
    );
    registry.register(
        "complement",
        FilterEntry::Parameterized(Arc::new(filters::complement::Complement::default())),
    );
    registry.register(
        "grayscale",
        FilterEntry::Unary(Arc::new(filters::grayscale::Grayscale)),
    );
    tracing::trace!("registered built-in filters");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_bootstrap() {
        crate::init();
        for name in ["blend", "mix", "brightness", "complement", "grayscale"].iter() {
            assert!(is_registered(name), "{} should be registered", name);
        }
        assert!(!is_registered("posterize"));
        assert!(matches!(
            lookup("posterize"),
            Err(ColorError::FilterNotFound(_))
        ));
    }

    #[test]
    fn test_dispatch_by_name() {
        crate::init();
        let a = ColorValue::rgb(100.0, 0.0, 0.0).unwrap();
        let b = ColorValue::rgb(0.0, 200.0, 0.0).unwrap();
        let blended = combine("blend", &a, &b).unwrap();
        assert_eq!(blended.get("r").unwrap(), 50.0);
        assert_eq!(blended.get("g").unwrap(), 100.0);

        let brighter = apply_with("brightness", &a, FilterParam::Amount(55.0)).unwrap();
        assert_eq!(brighter.get("r").unwrap(), 155.0);

        let gray = apply("grayscale", &a).unwrap();
        assert_eq!(gray.get("r").unwrap(), gray.get("g").unwrap());
    }

    #[test]
    fn test_complement_method_selectable_by_name() {
        crate::init();
        let color = ColorValue::rgb(255.0, 100.0, 50.0).unwrap();
        let inverted = apply_with(
            "complement",
            &color,
            FilterParam::Method(ComplementMethod::DisplayAccurate),
        )
        .unwrap();
        assert_eq!(inverted.get("r").unwrap(), 0.0);
        assert_eq!(inverted.get("g").unwrap(), 155.0);
        // the method is a call-time parameter, not baked into the registration
        let artistic = apply_with(
            "complement",
            &color,
            FilterParam::Method(ComplementMethod::Artistic),
        )
        .unwrap();
        assert_ne!(artistic, inverted);
        assert!(matches!(
            apply_with("complement", &color, FilterParam::Amount(1.0)),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            apply("complement", &color),
            Err(ColorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        crate::init();
        let a = ColorValue::rgb(1.0, 2.0, 3.0).unwrap();
        let b = ColorValue::rgb(4.0, 5.0, 6.0).unwrap();
        assert!(matches!(
            apply("blend", &a),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            combine("grayscale", &a, &b),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            apply_with("blend", &a, FilterParam::Amount(1.0)),
            Err(ColorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unregister_in_isolated_registry() {
        crate::init();
        let mut registry = FilterRegistry::new();
        registry.register("blend", lookup("blend").unwrap());
        assert!(registry.has("blend"));
        assert!(registry.unregister("blend"));
        assert!(!registry.unregister("blend"));
        assert!(registry.get("blend").is_err());
    }
}
