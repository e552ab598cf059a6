//! Identifier-assigning catalog table
//!
//! A [`CatalogTable`] accepts rows carrying a *preferred* identifier and
//! stores them under a valid, globally unique catalog key. It does a few
//! things for us:
//! - translates the preferred identifier into a valid catalog key
//! - works around the code-generation limitations of catalog accessors
//! - renders its section of the catalog document
//!
//! The code-generation limitation is that one key cannot vary from another
//! solely by a separator and suffix. With, say, `junit` and `junit-bom` both
//! present, the accessor `libs.junit` could refer to either the dependency
//! or a prefix of `libs.junit.bom`, but not both. The table works around
//! this by adding a random suffix when it detects the conflict, yielding
//! e.g. `junita123` alongside a stable `junit-bom`.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A row that can live in a [`CatalogTable`].
///
/// Rows expose the preferred key they would like to be stored under and
/// render their own value text; the table owns key assignment and layout.
pub trait TableEntry {
    /// The preferred identifier before sanitization and collision handling.
    fn base_id(&self) -> &str;

    /// The catalog-format value for this row, e.g. `"1.2.3"` or
    /// `{ module = "org.junit:junit-bom" }`.
    fn render(&self) -> String;
}

/// Source of 16-bit suffixes for collision disambiguation.
///
/// Kept injectable so the assignment algorithm is deterministic under test;
/// the default draws from process randomness.
pub type SuffixSource = Box<dyn FnMut() -> u16>;

/// A named catalog section assigning collision-free keys to its rows.
pub struct CatalogTable<T> {
    name: String,
    rows: BTreeMap<String, T>,
    suffix_source: SuffixSource,
}

impl<T: TableEntry> CatalogTable<T> {
    /// Creates an empty table rendering under the given section name.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_suffix_source(name, || (uuid::Uuid::new_v4().as_u128() & 0xffff) as u16)
    }

    /// Creates a table with a caller-supplied suffix source.
    ///
    /// Tests use this with a fixed source; assertions must still accept any
    /// 4-hex-digit suffix, since production keys are random.
    pub fn with_suffix_source(
        name: impl Into<String>,
        suffix_source: impl FnMut() -> u16 + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            suffix_source: Box::new(suffix_source),
        }
    }

    /// Inserts every row, processing them in descending base-identifier
    /// order.
    ///
    /// The ordering is what makes prefix collisions deterministic: a longer
    /// sibling like `junit-bom` is inserted before the shorter `junit`, so
    /// the shorter key is the one detected as colliding and suffixed, and
    /// the longer key keeps its readable form.
    pub fn insert_all(&mut self, rows: Vec<T>) {
        let mut rows = rows;
        rows.sort_by(|a, b| b.base_id().cmp(a.base_id()));
        for row in rows {
            self.insert(row);
        }
    }

    /// Inserts one row, returning the key it was assigned.
    ///
    /// The preferred identifier is sanitized into a candidate key. A
    /// collision exists when the candidate is already taken, or when an
    /// existing key extends the candidate with a dash - catalog accessor
    /// generation cannot disambiguate the two. On collision a random
    /// 4-hex-digit suffix is appended with no separator. The suffixed key is
    /// not itself re-checked; the residual chance of a second collision in
    /// the 16-bit space is a known, accepted limitation.
    pub fn insert(&mut self, row: T) -> String {
        let candidate = sanitize_id(row.base_id());
        let dash_prefix = format!("{candidate}-");

        let collides = self.rows.contains_key(&candidate)
            || self.rows.keys().any(|key| key.starts_with(&dash_prefix));

        let key = if collides {
            format!("{candidate}{:04x}", (self.suffix_source)())
        } else {
            candidate
        };

        self.rows.insert(key.clone(), row);
        key
    }

    /// Iterates rows in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.rows.iter()
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the section: header line, one `key = value` line per row in
    /// lexicographic key order, then a blank separator line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[{}]", self.name);
        for (key, row) in &self.rows {
            let _ = writeln!(out, "{key} = {}", row.render());
        }
        out.push('\n');
        out
    }
}

/// Translates a preferred identifier into a candidate catalog key.
///
/// Every maximal run of characters outside `[A-Za-z0-9]` becomes a single
/// separator, leading and trailing runs are dropped, and a separator that
/// would precede a digit is dropped entirely so trailing version-like
/// suffixes bind to their neighbor (`log4j 2` becomes `log4j2`, not
/// `log4j-2`). Remaining separators render as dashes.
fn sanitize_id(base_id: &str) -> String {
    let mut id = String::with_capacity(base_id.len());
    let mut gap = false;

    for c in base_id.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !id.is_empty() && !c.is_ascii_digit() {
                id.push('-');
            }
            id.push(c);
            gap = false;
        } else {
            gap = true;
        }
    }

    id
}
