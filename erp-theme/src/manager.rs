use std::sync::{Arc, RwLock};

use crate::config::{ThemeConfig, ThemeMode, ThemeUpdate, ThemeVariant};
use crate::error::ThemeResult;
use crate::interpreter;
use crate::parameters;
use crate::request::ThemeUpdateRequest;
use crate::serde_color::to_hex;
use crate::style::StyleSpec;
use crate::theme;

/// Callback invoked after every configuration change.
///
/// Runs synchronously inside the update, while a [SharedThemeManager] caller
/// still holds the write lock. Use the arguments instead of locking the
/// shared manager again, which would deadlock.
pub type Subscriber = Box<dyn Fn(&ThemeConfig, &StyleSpec) + Send + Sync>;

/// Handle returned by [ThemeManager::subscribe].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Compose the style specification for a configuration.
///
/// A pure function of `config`: resolve the variant, then apply parameters.
pub fn compose(config: &ThemeConfig) -> StyleSpec {
    let base = theme::resolve(config.variant, config.mode);
    parameters::apply(base, Some(&config.parameters))
}

/// Holds the current theme configuration and its composed style specification.
///
/// Every update replaces the configuration with a new value, recomposes the
/// spec and then notifies subscribers, so observers never see a half-applied
/// state. Updates that fail validation change nothing and notify nobody.
pub struct ThemeManager {
    config: ThemeConfig,
    spec: StyleSpec,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeManager {
    /// Create a new theme manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ThemeConfig::new())
    }

    /// Create a new theme manager with a specific configuration.
    pub fn with_config(config: ThemeConfig) -> Self {
        let spec = compose(&config);
        Self {
            config,
            spec,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Get the current style specification.
    pub fn style_spec(&self) -> &StyleSpec {
        &self.spec
    }

    /// Merge a typed update into the current configuration.
    ///
    /// An empty update is a legal no-op that still recomposes and notifies.
    pub fn merge_config(&mut self, update: &ThemeUpdate) -> StyleSpec {
        let next = self.config.merged(update);
        if next != self.config {
            log::info!(
                "ThemeManager: configuration changed to {} / {}",
                next.mode,
                next.variant
            );
        }
        self.replace(next)
    }

    /// Validate and merge an untyped agent request.
    ///
    /// On validation failure the configuration is left untouched.
    pub fn apply_request(&mut self, request: &ThemeUpdateRequest) -> ThemeResult<StyleSpec> {
        let update = request.validate().inspect_err(|err| {
            log::warn!("ThemeManager: rejected update request: {}", err);
        })?;
        Ok(self.merge_config(&update))
    }

    /// Interpret free text and merge the resulting delta.
    pub fn apply_natural_language_command(&mut self, text: &str) -> StyleSpec {
        let update = interpreter::interpret(text);
        self.merge_config(&update)
    }

    /// Switch between light and dark. High contrast switches to light.
    pub fn toggle_mode(&mut self) -> StyleSpec {
        let mode = match self.config.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::HighContrast => ThemeMode::Light,
        };
        self.merge_config(&ThemeUpdate::new().with_mode(mode))
    }

    /// Switch to another variant.
    pub fn set_variant(&mut self, variant: ThemeVariant) -> StyleSpec {
        self.merge_config(&ThemeUpdate::new().with_variant(variant))
    }

    /// Summarize the current theme for an external agent.
    ///
    /// The format is fixed:
    ///
    /// ```text
    /// Aktuelles Theme:
    /// - Modus: Dunkelmodus
    /// - Primärfarbe: #9d9bc5
    /// - Sekundärfarbe: #f8c885
    /// - Schriftart: Roboto,...
    /// - Randradius: 4px
    /// - Standardabstand: 8px
    /// ```
    pub fn describe_for_agent(&self) -> String {
        let mode = match self.config.mode {
            ThemeMode::Light => "Hellmodus",
            ThemeMode::Dark => "Dunkelmodus",
            ThemeMode::HighContrast => "Hoher Kontrast",
        };
        let palette = &self.spec.palette;

        format!(
            "Aktuelles Theme:\n\
             - Modus: {}\n\
             - Primärfarbe: {}\n\
             - Sekundärfarbe: {}\n\
             - Schriftart: {}\n\
             - Randradius: {}px\n\
             - Standardabstand: {}px\n",
            mode,
            to_hex(palette.primary.main),
            to_hex(palette.secondary.main),
            self.spec.typography.font_family,
            self.spec.shape_radius,
            self.spec.spacing(1.0),
        )
    }

    /// Register a callback invoked after every update.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemeConfig, &StyleSpec) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn replace(&mut self, next: ThemeConfig) -> StyleSpec {
        let spec = compose(&next);
        self.config = next;
        self.spec = spec;
        log::debug!(
            "ThemeManager: recomposed style spec, notifying {} subscriber(s)",
            self.subscribers.len()
        );

        for (_, subscriber) in &self.subscribers {
            subscriber(&self.config, &self.spec);
        }

        self.spec.clone()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe theme manager that can be shared across threads.
///
/// The write lock provides the single-writer exclusivity merges need.
/// Subscribers are called under that lock and must not acquire it.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Create a new shared theme manager.
pub fn create_shared_theme_manager() -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::new()))
}

/// Create a shared theme manager with a specific configuration.
pub fn create_shared_theme_manager_with_config(config: ThemeConfig) -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::with_config(config)))
}
