use std::fmt::{self, Debug, Write};

/// Append-only sink a matcher renders its descriptions into.
///
/// `text` appends literal text, `value` appends a value through the
/// standard printer (`Debug`, so strings come out quoted and numbers
/// plain). Both chain.
#[derive(Debug, Default)]
pub struct Description {
    buf: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Append a value rendered through `Debug`.
    pub fn value(&mut self, value: &impl Debug) -> &mut Self {
        // Writing into a String cannot fail
        let _ = write!(self.buf, "{value:?}");
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// A predicate over one record type, paired with a human-readable
/// rendering of what was expected.
///
/// The assertion facility calls `matches` first and, only on failure,
/// asks for descriptions: `describe` renders the expected shape and
/// `describe_mismatch` renders a field-level breakdown when the
/// matcher supports one.
///
/// Matchers hold only immutable captured values and never mutate the
/// actual record, so independent test threads can evaluate them
/// without coordination.
pub trait Matcher<V> {
    /// Whether `actual` equals the expected shape on every compared field.
    fn matches(&self, actual: &V) -> bool;

    /// Render the expected shape.
    fn describe(&self, out: &mut Description);

    /// Render a field-level breakdown of why `actual` did not match.
    ///
    /// Returns `false` when the matcher offers no breakdown; the
    /// caller then falls back to the actual value's own rendering.
    fn describe_mismatch(&self, actual: &V, out: &mut Description) -> bool {
        let _ = (actual, out);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_render_through_debug() {
        let mut out = Description::new();
        out.text("name=").value(&"elements").text(", update=").value(&5i64);
        assert_eq!(out.into_string(), "name=\"elements\", update=5");
    }

    #[test]
    fn display_matches_buffer() {
        let mut out = Description::new();
        assert!(out.is_empty());
        out.text("MetricUpdate{}");
        assert_eq!(out.to_string(), "MetricUpdate{}");
    }
}
