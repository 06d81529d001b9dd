use disastersafe::{
    set_theme_detector, FileStore, Frontend, OutputMode, PageId, PreferenceStore, ThemeMode,
    ViewController, THEME_KEY,
};
use proptest::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Text that only the given page renders.
fn marker(page: PageId) -> &'static str {
    match page {
        PageId::Welcome => "Enter Platform",
        PageId::Home => "Ready to Make Your School Safer?",
        PageId::Modules => "Region-specific disaster preparedness",
        PageId::Drills => "Security Lockdown Drill",
        PageId::Dashboard => "Monitor school-wide disaster",
        PageId::Alerts => "Disaster warnings and emergency",
        PageId::About => "About DisasterSafe Education",
        PageId::Login => "Welcome Back",
    }
}

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("prefs.json"))
}

fn frontend() -> Frontend {
    Frontend::new(OutputMode::Text, 78).unwrap()
}

#[test]
fn fresh_profile_in_dark_os_starts_dark_on_welcome() {
    let dir = TempDir::new().unwrap();
    let controller = ViewController::with_detector(store_in(&dir), || ThemeMode::Dark);

    assert_eq!(controller.state().active_page, PageId::Welcome);
    assert_eq!(controller.state().theme_mode, ThemeMode::Dark);

    let frame = frontend().render(controller.state()).unwrap();
    assert!(frame.contains(marker(PageId::Welcome)));
    assert!(!frame.contains("Live Alerts"));
}

#[test]
fn toggle_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let mut first = ViewController::with_detector(store_in(&dir), || ThemeMode::Dark);
    first.navigate(PageId::Dashboard);
    assert_eq!(first.toggle_theme(), ThemeMode::Light);
    assert_eq!(first.state().active_page, PageId::Dashboard);
    drop(first);

    let second = ViewController::with_detector(store_in(&dir), || ThemeMode::Dark);
    assert_eq!(second.state().theme_mode, ThemeMode::Light);
    assert_eq!(second.state().active_page, PageId::Welcome);
}

#[test]
fn navigation_bar_follows_the_page() {
    let dir = TempDir::new().unwrap();
    let mut controller = ViewController::with_detector(store_in(&dir), || ThemeMode::Light);
    let frontend = frontend();

    controller.navigate(PageId::Alerts);
    let frame = frontend.render(controller.state()).unwrap();
    assert!(frame.contains("Live Alerts"));
    assert!(frame.contains("Switch to dark mode"));

    controller.navigate(PageId::Login);
    let frame = frontend.render(controller.state()).unwrap();
    assert!(!frame.contains("Live Alerts"));
    assert!(frame.contains(marker(PageId::Login)));
}

#[test]
fn unreadable_preference_file_falls_back_and_is_repaired() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut controller = ViewController::with_detector(FileStore::new(&path), || ThemeMode::Dark);
    assert_eq!(controller.state().theme_mode, ThemeMode::Dark);
    controller.toggle_theme();

    let reread = FileStore::new(&path);
    assert_eq!(reread.load(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn unknown_persisted_value_reads_as_light() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(THEME_KEY, "sepia").unwrap();

    let controller = ViewController::with_detector(store, || ThemeMode::Dark);
    assert_eq!(controller.state().theme_mode, ThemeMode::Light);
}

#[test]
#[serial]
fn process_detector_is_used_by_default() {
    set_theme_detector(|| ThemeMode::Dark);
    let dir = TempDir::new().unwrap();
    let controller = ViewController::new(store_in(&dir));
    assert_eq!(controller.state().theme_mode, ThemeMode::Dark);

    set_theme_detector(|| ThemeMode::Light);
    let fresh = TempDir::new().unwrap();
    let controller = ViewController::new(store_in(&fresh));
    assert_eq!(controller.state().theme_mode, ThemeMode::Light);
}

proptest! {
    #[test]
    fn every_page_renders_its_own_view(index in 0..PageId::ALL.len(), dark in any::<bool>()) {
        let page = PageId::ALL[index];
        let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
        let dir = TempDir::new().unwrap();
        let mut controller = ViewController::with_detector(store_in(&dir), || mode);
        controller.navigate(page);

        let frame = frontend().render(controller.state()).unwrap();
        prop_assert!(frame.contains(marker(page)));
        prop_assert_eq!(frame.contains("Live Alerts"), page.shows_navigation());
    }

    #[test]
    fn unknown_ids_land_on_welcome(id in "[a-z_]{1,12}") {
        prop_assume!(PageId::parse(&id).is_none());
        let dir = TempDir::new().unwrap();
        let mut controller = ViewController::with_detector(store_in(&dir), || ThemeMode::Light);
        controller.navigate(PageId::Drills);
        controller.navigate_to(&id);
        prop_assert_eq!(controller.state().active_page, PageId::Welcome);
    }

    #[test]
    fn each_toggle_is_persisted(toggles in 1usize..8) {
        let dir = TempDir::new().unwrap();
        let mut controller = ViewController::with_detector(store_in(&dir), || ThemeMode::Light);
        for _ in 0..toggles {
            let mode = controller.toggle_theme();
            let saved = controller.store().load(THEME_KEY).unwrap();
            prop_assert_eq!(saved.as_deref(), Some(mode.as_str()));
        }
        let expected = if toggles % 2 == 1 { ThemeMode::Dark } else { ThemeMode::Light };
        prop_assert_eq!(controller.state().theme_mode, expected);
    }
}
