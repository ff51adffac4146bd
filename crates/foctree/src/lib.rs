//! Foctree - a manager core for national focus trees.
//!
//! Parsing, layout, persistence, and script generation for the brace
//! script focus tree format. The model round-trips through a lossless
//! JSON store while exports render the canonical script and localisation
//! files.

pub mod config;
pub mod layout;
pub mod script;
pub mod store;

mod error;

pub use foctree_core::{collection::FocusTree, focus::Focus, identifier::FocusId};

pub use error::FoctreeError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use layout::TreeLayout;

/// Builder for processing focus trees.
///
/// Binds an [`AppConfig`] to the processing stages, so callers configure
/// once and then move trees between the script format, the JSON store,
/// and resolved layouts.
///
/// # Examples
///
/// ```
/// use foctree::{TreeBuilder, config::AppConfig};
///
/// let source = "focus = {\n\tid = GER_rearmament\n\tx = 2\n}";
///
/// let builder = TreeBuilder::new(AppConfig::default());
/// let tree = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&tree);
/// let script = builder.render_script(&tree);
/// # assert!(script.contains("GER_rearmament"));
/// ```
#[derive(Default)]
pub struct TreeBuilder {
    config: AppConfig,
}

impl TreeBuilder {
    /// Create a new tree builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse focus tree script text into a [`FocusTree`].
    ///
    /// # Errors
    ///
    /// Returns [`FoctreeError::Parse`] carrying the diagnostics and the
    /// original source, for rich error reporting.
    pub fn parse(&self, source: &str) -> Result<FocusTree, FoctreeError> {
        info!("Parsing focus tree script");

        let tree = foctree_parser::parse(source)
            .map_err(|err| FoctreeError::new_parse_error(err, source))?;

        debug!(focuses = tree.len(); "Script parsed successfully");
        Ok(tree)
    }

    /// Resolve absolute positions for every focus, using the configured
    /// cell size.
    pub fn layout(&self, tree: &FocusTree) -> TreeLayout {
        layout::resolve_layout(tree, self.config.layout().cell_size())
    }

    /// Render the canonical script for a tree.
    pub fn render_script(&self, tree: &FocusTree) -> String {
        script::render_script(tree)
    }

    /// Render the localisation file for a tree, using the configured
    /// language and key prefix.
    pub fn render_localisation(&self, tree: &FocusTree) -> String {
        let localisation = self.config.localisation();
        script::render_localisation(tree, localisation.language(), &localisation.key_prefix())
    }

    /// Save a tree to a JSON store file.
    ///
    /// # Errors
    ///
    /// Returns [`FoctreeError::Io`] or [`FoctreeError::Store`] when the
    /// file cannot be written or serialized.
    pub fn save(&self, tree: &FocusTree, path: impl AsRef<Path>) -> Result<(), FoctreeError> {
        store::save(tree, path)
    }

    /// Load a tree from a JSON store file.
    ///
    /// # Errors
    ///
    /// Returns [`FoctreeError::Io`] or [`FoctreeError::Store`] when the
    /// file cannot be read or is not a store object.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<FocusTree, FoctreeError> {
        store::load(path)
    }
}
