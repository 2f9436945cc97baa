//! Registry mapping (year, day) to puzzle factories

use crate::error::{ParseError, PuzzleError, RegistrationError};
use crate::instance::{DynPuzzle, PuzzleInstance};
use std::collections::BTreeMap;

/// Factory function type for creating puzzle instances
pub type PuzzleFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this puzzle supports
    pub parts: u8,
}

struct RegistryEntry {
    factory: PuzzleFactory,
    parts: u8,
}

/// Builder for constructing a [`PuzzleRegistry`] with duplicate detection.
///
/// # Example
///
/// ```no_run
/// # use solver_core::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a puzzle factory for a specific year and day.
    ///
    /// Returns an error if a puzzle is already registered for the given
    /// year-day combination.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicatePuzzle(year, day));
        }
        self.entries.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register every puzzle submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the puzzle plugins matching a filter predicate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use solver_core::RegistryBuilder;
    /// // Only 2023 puzzles tagged "ranges"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|p| p.year == 2023 && p.tags.contains(&"ranges"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                self = plugin.puzzle.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and instantiating puzzles.
///
/// Maps (year, day) pairs to factory functions. Once built it cannot be
/// modified, only queried.
pub struct PuzzleRegistry {
    entries: BTreeMap<(u16, u8), RegistryEntry>,
}

impl PuzzleRegistry {
    /// Create a puzzle instance for a specific year and day.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynPuzzle>)` - Parsed and ready to solve
    /// * `Err(PuzzleError)` - Puzzle not found or parsing failed
    pub fn create<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, PuzzleError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(PuzzleError::NotFound(year, day))?;

        (entry.factory)(input).map_err(PuzzleError::ParseError)
    }

    /// Get metadata for a specific puzzle
    pub fn info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        self.entries.get(&(year, day)).map(|e| PuzzleInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Check if a puzzle is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Iterate over metadata for all registered puzzles, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().map(|(&(year, day), e)| PuzzleInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Get the number of registered puzzles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for puzzles that can register themselves with a registry builder.
///
/// Type-erased counterpart of [`crate::Puzzle`]: no associated types, so
/// different puzzle types can sit behind `&'static dyn RegisterablePuzzle`
/// references inside [`PuzzlePlugin`] entries. A blanket impl covers every
/// `Puzzle` type.
pub trait RegisterablePuzzle: Sync {
    /// Register this puzzle type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts this puzzle supports
    fn parts(&self) -> u8;
}

impl<P> RegisterablePuzzle for P
where
    P: crate::puzzle::Puzzle + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, P::PARTS, move |input: &str| {
            Ok(Box::new(PuzzleInstance::<P>::from_input(year, day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}

/// Plugin entry for automatic puzzle registration.
///
/// Submitted with `inventory::submit!`, usually via
/// `#[derive(AutoRegisterPuzzle)]`.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     PuzzlePlugin {
///         year: 2023,
///         day: 5,
///         puzzle: &Day5Solver,
///         tags: &["2023", "ranges"],
///     }
/// }
/// ```
pub struct PuzzlePlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle instance (type-erased)
    pub puzzle: &'static dyn RegisterablePuzzle,
    /// Optional tags for filtering (e.g., "2023", "ranges", "grid")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(PuzzlePlugin);
