use bevy::prelude::*;
use bevy_i18n_messages::{
    Dictionary,
    I18n,
    I18nConfig,
    I18nPlugin,
    Interpolations,
    LanguageAppExt,
    LocaleChanged,
};
use serde_json::json;

#[derive(Resource, Default)]
struct Received(Vec<(String, String)>);

fn collect_changes(mut messages: MessageReader<LocaleChanged>, mut received: ResMut<Received>) {
    for change in messages.read() {
        let title = change.resolver.resolve("menu.title", None);
        received.0.push((change.locale.clone(), title));
    }
}

fn app_with(config: I18nConfig) -> App {
    let dictionary = Dictionary::from_trees([
        json!({ "en": { "menu": { "title": "Main menu" } } }),
        json!({ "fr": { "menu": { "title": "Menu principal" } } }),
    ]).unwrap();

    let mut app = App::new();
    app.add_plugins(I18nPlugin::with_config(dictionary, config))
        .init_resource::<Received>()
        .add_systems(Last, collect_changes);
    app
}

#[test]
fn default_locale_is_published_on_first_update() {
    let mut app = app_with(I18nConfig {
        default_locale: Some("en".to_string()),
        ..Default::default()
    });
    app.update();

    assert_eq!(app.world().resource::<I18n>().current_locale(), Some("en"));
    assert_eq!(app.world().resource::<Received>().0, vec![
        ("en".to_string(), "Main menu".to_string()),
    ]);
}

#[test]
fn unknown_default_locale_leaves_no_locale() {
    let mut app = app_with(I18nConfig {
        default_locale: Some("xx".to_string()),
        ..Default::default()
    });
    app.update();

    assert_eq!(app.world().resource::<I18n>().current_locale(), None);
    assert!(app.world().resource::<Received>().0.is_empty());
}

#[test]
fn app_locale_switch_publishes_message() {
    let mut app = app_with(I18nConfig::default());
    app.update();

    app.set_locale("fr");
    app.set_locale("de");
    app.update();

    assert_eq!(app.world().resource::<I18n>().current_locale(), Some("fr"));
    assert_eq!(app.world().resource::<Received>().0, vec![
        ("fr".to_string(), "Menu principal".to_string()),
    ]);
}

#[test]
fn systems_can_switch_locale_through_the_resource() {
    fn switch_to_french(mut i18n: ResMut<I18n>) {
        if i18n.current_locale() != Some("fr") {
            let _ = i18n.set_locale("fr");
        }
    }

    let mut app = app_with(I18nConfig::default());
    app.add_systems(Update, switch_to_french);
    app.update();
    app.update();

    assert_eq!(app.world().resource::<Received>().0, vec![
        ("fr".to_string(), "Menu principal".to_string()),
    ]);
}

#[test]
fn extended_dictionary_is_visible_to_published_resolvers() {
    let mut app = app_with(I18nConfig {
        default_locale: Some("en".to_string()),
        ..Default::default()
    });
    app.update();

    app.extend_dictionary(
        Dictionary::from_tree(json!({ "en": { "hud": { "score": "Score: {points}" } } })).unwrap()
    );

    let resolver = app.world().resource::<I18n>().resolver().unwrap();
    let values = Interpolations::new().with("points", 120);
    assert_eq!(resolver.resolve("hud.score", Some(&values)), "Score: 120");
    assert_eq!(resolver.t("menu.title"), "Main menu");
    assert_eq!(app.world().resource::<I18n>().current_locale(), Some("en"));
}
