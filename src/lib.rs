#![doc = include_str!("../README.md")]

//! # bevy-i18n-messages
//!
//! - **Nested dictionaries**: messages addressed by dotted paths (`menu.options.sound`)
//! - **Placeholders**: `{name}` tokens filled from [`Interpolations`]
//! - **Plurals**: `singular|plural` and `zero|one|multiple` variants
//! - **Case helpers**: capital, title, upper and lower shortcuts
//! - **Locale switching**: subscriber callbacks and a [`LocaleChanged`] message
//!   carrying a [`BoundResolver`] for the new locale
//! - **Graceful fallback**: a missing message renders as its path

use std::sync::{ Arc, PoisonError, RwLock, RwLockReadGuard };

use bevy::prelude::*;

pub mod case;
pub mod dictionary;
mod error;
pub mod interpolate;
pub mod message;
pub mod plural;

pub use case::TextCase;
pub use dictionary::Dictionary;
pub use error::I18nError;
pub use interpolate::Interpolations;
pub use message::Transformer;
pub use plural::{ Counter, Plural };

/// Configuration for the I18n plugin.
///
/// # Example
///
/// ```rust
/// use bevy_i18n_messages::I18nConfig;
///
/// let config = I18nConfig {
///     default_locale: Some("fr".to_string()),
///     log_missing_messages: true,
/// };
/// ```
#[derive(Debug, Clone, Default, Resource)]
pub struct I18nConfig {
    /// Locale selected when the plugin is built.
    /// Default: none, every lookup returns its path until a locale is set.
    pub default_locale: Option<String>,
    /// Report lookups that fall back to their path at debug level.
    /// Default: false
    pub log_missing_messages: bool,
}

// ---------- Bevy Plugin ----------

/// Main plugin for Bevy internationalization.
///
/// Inserts the [`I18n`] resource and forwards locale switches to
/// [`LocaleChanged`] messages during `PostUpdate`.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::*;
/// use bevy_i18n_messages::{ Dictionary, I18nConfig, I18nPlugin };
/// use serde_json::json;
///
/// let dictionary = Dictionary::from_tree(json!({ "en": { "hello": "Hello" } })).unwrap();
///
/// App::new().add_plugins(I18nPlugin::with_config(dictionary, I18nConfig {
///     default_locale: Some("en".to_string()),
///     ..Default::default()
/// }));
/// ```
#[derive(Default)]
pub struct I18nPlugin {
    /// Initial dictionary
    pub dictionary: Dictionary,
    /// Configuration for the plugin
    pub config: I18nConfig,
}

impl I18nPlugin {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary, config: I18nConfig::default() }
    }

    pub fn with_config(dictionary: Dictionary, config: I18nConfig) -> Self {
        Self { dictionary, config }
    }
}

impl Plugin for I18nPlugin {
    fn build(&self, app: &mut App) {
        let mut i18n = I18n::with_config(self.dictionary.clone(), &self.config);
        i18n.queue_messages = true;

        if let Some(locale) = &self.config.default_locale {
            // An unknown default is already reported by `set_locale`.
            let _ = i18n.set_locale(locale);
        }

        app.insert_resource(self.config.clone())
            .insert_resource(i18n)
            .add_message::<LocaleChanged>()
            .add_systems(PostUpdate, publish_locale_changes);
    }
}

/// Published after every successful locale switch.
#[derive(Message, Debug, Clone)]
pub struct LocaleChanged {
    /// The locale that is now current
    pub locale: String,
    /// Lookups pre-wired to `locale`
    pub resolver: BoundResolver,
}

fn publish_locale_changes(mut i18n: ResMut<I18n>, mut messages: MessageWriter<LocaleChanged>) {
    if i18n.pending.is_empty() {
        return;
    }
    for change in i18n.pending.drain(..) {
        messages.write(change);
    }
}

// ---------- API ----------

/// Extension trait for `App` to manage the locale and dictionary.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::*;
/// use bevy_i18n_messages::{ Dictionary, I18n, I18nPlugin, LanguageAppExt };
/// use serde_json::json;
///
/// let dictionary = Dictionary::from_tree(json!({ "en": {}, "fr": {} })).unwrap();
/// let mut app = App::new();
/// app.add_plugins(I18nPlugin::new(dictionary));
/// app.set_locale("fr");
///
/// assert_eq!(app.world().resource::<I18n>().current_locale(), Some("fr"));
/// ```
pub trait LanguageAppExt {
    /// Switches the current locale.
    ///
    /// Warns and does nothing if the locale is not in the dictionary.
    fn set_locale(&mut self, locale: &str);
    /// Deep-merges more messages into the dictionary.
    fn extend_dictionary(&mut self, partial: Dictionary);
}

impl LanguageAppExt for App {
    fn set_locale(&mut self, locale: &str) {
        if let Some(mut i18n) = self.world_mut().get_resource_mut::<I18n>() {
            let _ = i18n.set_locale(locale);
        }
    }

    fn extend_dictionary(&mut self, partial: Dictionary) {
        if let Some(mut i18n) = self.world_mut().get_resource_mut::<I18n>() {
            i18n.extend_dictionary([partial]);
        }
    }
}

/// Handle returned by [`I18n::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&LocaleChanged) + Send + Sync>;

/// Holds the dictionary and the current locale.
///
/// Usable as a Bevy resource through [`I18nPlugin`], or standalone as a
/// plain context object.
///
/// # Example
///
/// ```rust
/// use bevy_i18n_messages::{ Dictionary, I18n, Interpolations };
/// use serde_json::json;
///
/// let mut i18n = I18n::new(Dictionary::from_tree(json!({
///     "en": { "inbox": { "title": "Hello {name}", "count": "{n} message|{n} messages" } }
/// })).unwrap());
///
/// let t = i18n.set_locale("en").unwrap();
/// let values = Interpolations::new().with("name", "Ada").with("n", 2);
///
/// assert_eq!(t.resolve("inbox.title", Some(&values)), "Hello Ada");
/// assert_eq!(t.plural("inbox.count", 2, Some(&values)), "2 messages");
/// assert_eq!(t.upper("inbox.title", Some(&values)), "HELLO ADA");
/// assert_eq!(t.t("inbox.missing"), "inbox.missing");
/// ```
#[derive(Resource)]
pub struct I18n {
    /// Shared with every resolver handed out
    dictionary: Arc<RwLock<Dictionary>>,
    /// Currently active locale
    current_locale: Option<String>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    /// Changes not yet written as `LocaleChanged` messages
    pending: Vec<LocaleChanged>,
    queue_messages: bool,
    log_missing: bool,
}

impl I18n {
    /// Creates a manager with no locale selected.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, &I18nConfig::default())
    }

    /// Creates a manager using the logging settings of `config`.
    ///
    /// `default_locale` is left for the caller to apply with [`I18n::set_locale`].
    pub fn with_config(dictionary: Dictionary, config: &I18nConfig) -> Self {
        Self {
            dictionary: Arc::new(RwLock::new(dictionary)),
            current_locale: None,
            subscribers: Vec::new(),
            next_subscription: 0,
            pending: Vec::new(),
            queue_messages: false,
            log_missing: config.log_missing_messages,
        }
    }

    /// Sets the current locale and notifies subscribers.
    ///
    /// Subscribers run synchronously, before this returns. Unknown locales
    /// are reported with a warning and leave every piece of state as it was.
    pub fn set_locale(&mut self, locale: &str) -> Result<BoundResolver, I18nError> {
        if !self.contains_locale(locale) {
            warn!("Couldn't find the \"{}\" locale", locale);
            return Err(I18nError::UnknownLocale(locale.to_string()));
        }

        self.current_locale = Some(locale.to_string());
        let resolver = self.bind(locale);
        let change = LocaleChanged { locale: locale.to_string(), resolver: resolver.clone() };

        for (_, subscriber) in &self.subscribers {
            subscriber(&change);
        }
        if self.queue_messages {
            self.pending.push(change);
        }

        Ok(resolver)
    }

    /// Gets the current locale, if one has been set.
    pub fn current_locale(&self) -> Option<&str> {
        self.current_locale.as_deref()
    }

    /// Deep-merges each partial dictionary, in order.
    ///
    /// The current locale is untouched. Resolvers already handed out see
    /// the new messages on their next lookup.
    pub fn extend_dictionary<I>(&mut self, partials: I) where I: IntoIterator<Item = Dictionary> {
        let mut dictionary = self.dictionary.write().unwrap_or_else(PoisonError::into_inner);
        for partial in partials {
            dictionary.merge(partial);
        }
    }

    /// Registers a callback run on every successful locale switch.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
        where F: Fn(&LocaleChanged) + Send + Sync + 'static
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.read_dictionary().contains_locale(locale)
    }

    /// Gets a sorted list of all available locales.
    pub fn available_locales(&self) -> Vec<String> {
        self.read_dictionary().locales()
    }

    /// A resolver bound to the current locale, if one is set.
    pub fn resolver(&self) -> Option<BoundResolver> {
        self.current_locale.as_deref().map(|locale| self.bind(locale))
    }

    /// Runs the full resolution pipeline.
    ///
    /// `locale` defaults to the current locale. Transformers run in order on
    /// the raw message before interpolation.
    pub fn resolve_message(
        &self,
        path: &str,
        interpolations: Option<&Interpolations>,
        locale: Option<&str>,
        transformers: &[&dyn Transformer]
    ) -> String {
        let locale = locale.or(self.current_locale.as_deref());
        message::resolve_message(
            &self.read_dictionary(),
            locale,
            path,
            interpolations,
            transformers,
            self.log_missing
        )
    }

    /// Shorthand for a plain lookup in the current locale.
    pub fn t(&self, path: &str) -> String {
        self.resolve_message(path, None, None, &[])
    }

    fn bind(&self, locale: &str) -> BoundResolver {
        BoundResolver {
            dictionary: Arc::clone(&self.dictionary),
            locale: locale.to_string(),
            log_missing: self.log_missing,
        }
    }

    fn read_dictionary(&self) -> RwLockReadGuard<'_, Dictionary> {
        read_shared(&self.dictionary)
    }
}

fn read_shared(dictionary: &RwLock<Dictionary>) -> RwLockReadGuard<'_, Dictionary> {
    dictionary.read().unwrap_or_else(PoisonError::into_inner)
}

// ---------- Bound resolver ----------

/// Lookups pre-wired to one locale.
///
/// Cheap to clone and safe to send across threads. It shares the manager's
/// dictionary, so later [`I18n::extend_dictionary`] calls are visible, but
/// its locale never changes.
#[derive(Debug, Clone)]
pub struct BoundResolver {
    dictionary: Arc<RwLock<Dictionary>>,
    locale: String,
    log_missing: bool,
}

impl BoundResolver {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolves and renders the message at `path`.
    ///
    /// Returns `path` itself when no message exists.
    pub fn resolve(&self, path: &str, interpolations: Option<&Interpolations>) -> String {
        self.resolve_with(path, interpolations, &[])
    }

    /// Like [`BoundResolver::resolve`], with transformers run on the raw message.
    pub fn resolve_with(
        &self,
        path: &str,
        interpolations: Option<&Interpolations>,
        transformers: &[&dyn Transformer]
    ) -> String {
        message::resolve_message(
            &read_shared(&self.dictionary),
            Some(&self.locale),
            path,
            interpolations,
            transformers,
            self.log_missing
        )
    }

    /// Plain lookup without interpolation.
    pub fn t(&self, path: &str) -> String {
        self.resolve(path, None)
    }

    /// Resolves the message and applies `case` to the rendered text.
    pub fn with_case(
        &self,
        case: TextCase,
        path: &str,
        interpolations: Option<&Interpolations>
    ) -> String {
        case.apply(&self.resolve(path, interpolations))
    }

    pub fn capital(&self, path: &str, interpolations: Option<&Interpolations>) -> String {
        self.with_case(TextCase::Capital, path, interpolations)
    }

    pub fn title(&self, path: &str, interpolations: Option<&Interpolations>) -> String {
        self.with_case(TextCase::Title, path, interpolations)
    }

    pub fn upper(&self, path: &str, interpolations: Option<&Interpolations>) -> String {
        self.with_case(TextCase::Upper, path, interpolations)
    }

    pub fn lower(&self, path: &str, interpolations: Option<&Interpolations>) -> String {
        self.with_case(TextCase::Lower, path, interpolations)
    }

    /// Resolves a `|`-separated plural message and picks the variant for `counter`.
    pub fn plural(
        &self,
        path: &str,
        counter: impl Into<Counter>,
        interpolations: Option<&Interpolations>
    ) -> String {
        let plural = Plural(counter.into());
        self.resolve_with(path, interpolations, &[&plural])
    }
}
