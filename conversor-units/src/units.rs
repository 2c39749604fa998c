//! Unit registry - curated unit lists and symbol lookup

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Unit, Dimension, ConversionError};

/// Global unit registry, built once on first use and never mutated
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    by_dimension: HashMap<Dimension, Vec<Unit>>,
    symbols: HashMap<&'static str, Unit>,
    aliases: HashMap<&'static str, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            by_dimension: HashMap::new(),
            symbols: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Units of a dimension in display order (smallest metric first, then imperial)
    pub fn list_units(&self, dimension: Dimension) -> &[Unit] {
        self.by_dimension
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get a unit of `dimension` by symbol or alias
    pub fn get(&self, dimension: Dimension, text: &str) -> Result<Unit, ConversionError> {
        match self.find(text) {
            Some(unit) if unit.dimension() == dimension => Ok(unit),
            _ => Err(ConversionError::unknown_unit_in(text.trim(), dimension)),
        }
    }

    /// Get a unit of any dimension by symbol or alias
    pub fn lookup(&self, text: &str) -> Result<Unit, ConversionError> {
        self.find(text)
            .ok_or_else(|| ConversionError::unknown_unit(text.trim()))
    }

    /// Dimensions that have at least one registered unit
    pub fn dimensions(&self) -> Vec<Dimension> {
        let mut dims: Vec<Dimension> = self.by_dimension.keys().copied().collect();
        dims.sort();
        dims
    }

    /// Total number of registered units
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn find(&self, text: &str) -> Option<Unit> {
        let text = text.trim();
        // Symbols are case-sensitive ("mm" vs "Mm"), names are not
        if let Some(unit) = self.symbols.get(text) {
            return Some(*unit);
        }
        self.aliases.get(text.to_lowercase().as_str()).copied()
    }

    fn register(&mut self, unit: Unit) {
        debug_assert!(unit.scale_factor() > 0.0);
        let previous = self.symbols.insert(unit.symbol(), unit);
        debug_assert!(previous.is_none(), "duplicate symbol {}", unit.symbol());
        self.by_dimension.entry(unit.dimension()).or_default().push(unit);
        self.aliases.insert(unit.name(), unit);
    }

    fn alias(&mut self, alias: &'static str, unit: Unit) {
        self.aliases.insert(alias, unit);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
    }

    fn register_length_units(&mut self) {
        // Metric, smallest first
        self.register(Unit::Millimeter);
        self.register(Unit::Centimeter);
        self.register(Unit::Decimeter);
        self.register(Unit::Meter);
        self.register(Unit::Kilometer);

        // Imperial/US
        self.register(Unit::Inch);
        self.register(Unit::Foot);
        self.register(Unit::Yard);
        self.register(Unit::Mile);

        // Aliases
        self.alias("millimeter", Unit::Millimeter);
        self.alias("millimetre", Unit::Millimeter);
        self.alias("millimetres", Unit::Millimeter);
        self.alias("centimeter", Unit::Centimeter);
        self.alias("centimetre", Unit::Centimeter);
        self.alias("centimetres", Unit::Centimeter);
        self.alias("decimeter", Unit::Decimeter);
        self.alias("decimetre", Unit::Decimeter);
        self.alias("decimetres", Unit::Decimeter);
        self.alias("meter", Unit::Meter);
        self.alias("metre", Unit::Meter);
        self.alias("metres", Unit::Meter);
        self.alias("kilometer", Unit::Kilometer);
        self.alias("kilometre", Unit::Kilometer);
        self.alias("kilometres", Unit::Kilometer);
        self.alias("inch", Unit::Inch);
        self.alias("foot", Unit::Foot);
        self.alias("yard", Unit::Yard);
        self.alias("mile", Unit::Mile);
    }

    fn register_mass_units(&mut self) {
        // Metric, smallest first
        self.register(Unit::Milligram);
        self.register(Unit::Gram);
        self.register(Unit::Kilogram);
        self.register(Unit::MetricTon);

        // Imperial/US
        self.register(Unit::Ounce);
        self.register(Unit::Pound);
        self.register(Unit::Stone);

        // Aliases
        self.alias("milligram", Unit::Milligram);
        self.alias("gram", Unit::Gram);
        self.alias("kilogram", Unit::Kilogram);
        self.alias("metric ton", Unit::MetricTon);
        self.alias("tonne", Unit::MetricTon);
        self.alias("tonnes", Unit::MetricTon);
        self.alias("ounce", Unit::Ounce);
        self.alias("pound", Unit::Pound);
        self.alias("lbs", Unit::Pound);
        self.alias("stone", Unit::Stone);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
