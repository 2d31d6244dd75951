//! Base plugin trait definition.

/// Base trait shared by every decoder capability.
///
/// Decoders are stored as `Arc<dyn Trait>` inside a
/// [`DecoderSet`](crate::plugins::DecoderSet), so they must be `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use doctext::plugins::Plugin;
///
/// struct UpperCasePdf;
///
/// impl Plugin for UpperCasePdf {
///     fn name(&self) -> &str {
///         "upper-case-pdf"
///     }
///
///     fn version(&self) -> String {
///         "1.0.0".to_string()
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Unique, lowercase, hyphenated identifier (e.g. `"pdf-extractor"`).
    fn name(&self) -> &str;

    /// Semantic version of the plugin.
    fn version(&self) -> String;

    /// Optional human-readable description.
    fn description(&self) -> &str {
        ""
    }
}
