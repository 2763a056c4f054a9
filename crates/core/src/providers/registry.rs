use super::mock::MockSeriesSource;
use super::traits::SeriesSource;

/// Ordered list of series sources.
///
/// The first registered source is preferred; later ones are fallbacks.
pub struct SeriesSourceRegistry {
    sources: Vec<Box<dyn SeriesSource>>,
}

impl SeriesSourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Registry holding only the mock generator.
    ///
    /// `seed` makes the generated series reproducible.
    pub fn new_with_defaults(seed: Option<u64>, base_price: f64) -> Self {
        let mut registry = Self::new();
        let mock = match seed {
            Some(seed) => MockSeriesSource::with_seed(seed),
            None => MockSeriesSource::new(),
        };
        registry.register(Box::new(mock.with_base_price(base_price)));
        registry
    }

    /// Register a source with lower priority than the existing ones.
    pub fn register(&mut self, source: Box<dyn SeriesSource>) {
        self.sources.push(source);
    }

    /// All sources in priority order.
    pub fn sources(&self) -> Vec<&dyn SeriesSource> {
        self.sources.iter().map(|s| s.as_ref()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }
}

impl Default for SeriesSourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
