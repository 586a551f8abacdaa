use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::CookieError;
use crate::filters::{FilterModel, GridFilter, SchoolFilter};
use crate::gui::{CellModal, GridAction, SortDirection, SortState, SpellGrid, SpellGridApp};
use crate::models::{build_rows, CodeOrText, Column, SpellRecord, Theme};
use crate::utils::{
    parse_spell_dataset, CookieStore, MemoryCookieStore, Preferences, COLUMNS_COOKIE, THEME_COOKIE,
    USE_COOKIES_COOKIE,
};

fn spell(name: &str, school: i64) -> SpellRecord {
    SpellRecord {
        name: name.to_string(),
        level: school,
        school,
        casting_time: 0,
        duration: None,
        range: None,
        area: None,
        attack: None,
        save: None,
        damage_and_effect: None,
        ritual: None,
        concentration: None,
        verbal: None,
        somatic: None,
        material: None,
        source: 0,
        details: None,
        link: None,
    }
}

fn three_spells() -> Vec<SpellRecord> {
    vec![spell("Alarm", 0), spell("Grease", 1), spell("Augury", 2)]
}

fn visible_names(grid: &mut SpellGrid) -> Vec<String> {
    let visible = grid.visible_rows().to_vec();
    visible.iter().map(|index| grid.rows()[*index].name.clone()).collect()
}

/// Cookie store that fails every call, like a browser with cookies blocked.
struct FailingCookieStore;

impl CookieStore for FailingCookieStore {
    fn get(&self, _name: &str) -> Result<Option<String>, CookieError> {
        Err(CookieError::Unavailable)
    }

    fn set(&mut self, _name: &str, _value: &str) -> Result<(), CookieError> {
        Err(CookieError::Unavailable)
    }

    fn remove(&mut self, _name: &str) -> Result<(), CookieError> {
        Err(CookieError::Unavailable)
    }

    fn names(&self) -> Result<Vec<String>, CookieError> {
        Err(CookieError::Unavailable)
    }
}

#[test]
fn test_school_filter_selects_subset_and_back() {
    let mut grid = SpellGrid::new(build_rows(&three_spells()));
    assert_eq!(visible_names(&mut grid), vec!["Alarm", "Grease", "Augury"]);

    let filter = grid.filter_mut(Column::School).expect("school column has a filter");
    filter.select_none();
    filter.toggle(1);
    assert_eq!(visible_names(&mut grid), vec!["Grease"]);
    assert!(grid.is_any_filter_active());

    let filter = grid.filter_mut(Column::School).unwrap();
    filter.toggle(0);
    filter.toggle(2);
    // Still active: five of the eight schools remain unchecked.
    assert_eq!(visible_names(&mut grid), vec!["Alarm", "Grease", "Augury"]);
    assert!(grid.is_any_filter_active());

    grid.filter_mut(Column::School).unwrap().select_all();
    assert_eq!(visible_names(&mut grid), vec!["Alarm", "Grease", "Augury"]);
    assert!(!grid.filter(Column::School).unwrap().is_filter_active());
    assert!(grid.filter(Column::School).unwrap().get_model().is_none());
}

#[test]
fn test_three_school_dimension_end_to_end() {
    // A school filter restricted to a three-code universe behaves exactly
    // like the grid-level scenario above with a complete option set.
    use crate::filters::number_filter::{is_active, passes, toggle, Selection};

    let full: Selection = [0, 1, 2].into_iter().collect();
    let rows = build_rows(&three_spells());

    let only_one: Selection = [1].into_iter().collect();
    let kept: Vec<_> = rows.iter().filter(|row| passes(Some(row.school.code), &only_one, 3)).collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "Grease");

    let again = toggle(&toggle(&only_one, 0), 2);
    assert_eq!(again, full);
    assert!(!is_active(&again, 3));
    assert_eq!(rows.iter().filter(|row| passes(Some(row.school.code), &again, 3)).count(), 3);
}

#[test]
fn test_filter_changes_are_picked_up_before_next_read() {
    let mut grid = SpellGrid::new(build_rows(&three_spells()));
    assert_eq!(grid.visible_rows().len(), 3);

    grid.filter_mut(Column::Level).unwrap().toggle(2);
    assert_eq!(visible_names(&mut grid), vec!["Alarm", "Grease"]);
}

#[test]
fn test_filter_models_round_trip_through_grid() {
    let mut grid = SpellGrid::new(build_rows(&three_spells()));
    grid.filter_mut(Column::School).unwrap().select_none();
    grid.filter_mut(Column::School).unwrap().toggle(2);

    let models = grid.filter_models();
    assert_eq!(models.get(&Column::School), Some(&FilterModel { value: vec![2] }));
    assert_eq!(models.len(), 1);

    let json = serde_json::to_string(&models[&Column::School]).unwrap();
    assert_eq!(json, r#"{"value":[2]}"#);

    let mut restored = SpellGrid::new(build_rows(&three_spells()));
    restored.set_filter_models(models);
    assert_eq!(visible_names(&mut restored), vec!["Augury"]);

    restored.set_filter_models(BTreeMap::new());
    assert_eq!(restored.visible_rows().len(), 3);
}

#[test]
fn test_standalone_filter_reports_changes() {
    let changes = Rc::new(Cell::new(0u32));
    let seen = changes.clone();
    let mut filter = SchoolFilter::new();
    filter.set_filter_changed_callback(Box::new(move || seen.set(seen.get() + 1)));

    filter.set_model(Some(FilterModel { value: vec![0] }));
    filter.set_model(Some(FilterModel { value: vec![0] }));
    filter.set_model(None);
    assert_eq!(changes.get(), 2);
}

#[test]
fn test_area_sort_and_cycle() {
    let mut spells = three_spells();
    spells[0].area = Some("30-foot cone".to_string());
    spells[1].area = Some("Self".to_string());
    spells[2].area = Some("10-foot radius".to_string());
    spells.push(spell("Shield", 0));

    let mut grid = SpellGrid::new(build_rows(&spells));
    grid.cycle_sort(Column::Area);
    assert_eq!(grid.sort(), Some(SortState { column: Column::Area, direction: SortDirection::Ascending }));
    assert_eq!(visible_names(&mut grid), vec!["Augury", "Alarm", "Grease", "Shield"]);

    grid.cycle_sort(Column::Area);
    assert_eq!(visible_names(&mut grid), vec!["Shield", "Grease", "Alarm", "Augury"]);

    grid.cycle_sort(Column::Area);
    assert_eq!(grid.sort(), None);
    assert_eq!(visible_names(&mut grid), vec!["Alarm", "Grease", "Augury", "Shield"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let spells = vec![spell("B", 0), spell("A", 0), spell("C", 1)];
    let mut grid = SpellGrid::new(build_rows(&spells));
    grid.set_sort(Some(SortState { column: Column::School, direction: SortDirection::Ascending }));
    assert_eq!(visible_names(&mut grid), vec!["B", "A", "C"]);
}

#[test]
fn test_range_sorts_codes_before_text() {
    let mut spells = three_spells();
    spells[0].range = Some(CodeOrText::Text("Special".to_string()));
    spells[1].range = Some(CodeOrText::Code(11));
    spells[2].range = Some(CodeOrText::Code(0));
    let mut grid = SpellGrid::new(build_rows(&spells));
    grid.cycle_sort(Column::Range);
    assert_eq!(visible_names(&mut grid), vec!["Augury", "Grease", "Alarm"]);
}

#[test]
fn test_casting_time_sorts_by_code_not_name() {
    let mut spells = three_spells();
    spells[0].casting_time = 5; // 1 Hour
    spells[1].casting_time = 3; // 1 Minute
    spells[2].casting_time = 4; // 10 Minutes
    let mut grid = SpellGrid::new(build_rows(&spells));
    grid.cycle_sort(Column::CastingTime);
    assert_eq!(visible_names(&mut grid), vec!["Grease", "Augury", "Alarm"]);

    grid.cycle_sort(Column::CastingTime);
    assert_eq!(visible_names(&mut grid), vec!["Alarm", "Augury", "Grease"]);
}

#[test]
fn test_modal_only_for_long_text_with_content() {
    let mut spells = three_spells();
    spells[0].material = Some("A tiny bell and a piece of fine silver wire".to_string());
    spells[1].details = Some(String::new());
    let grid = SpellGrid::new(build_rows(&spells));

    assert_eq!(
        grid.modal_for_cell(0, Column::Material),
        Some(CellModal {
            title: "Material".to_string(),
            text: "A tiny bell and a piece of fine silver wire".to_string(),
        })
    );
    assert_eq!(grid.modal_for_cell(1, Column::Details), None);
    assert_eq!(grid.modal_for_cell(0, Column::Name), None);
    assert_eq!(grid.modal_for_cell(42, Column::Material), None);
}

#[test]
fn test_app_actions_drive_grid() {
    let preferences = Preferences::load(MemoryCookieStore::new());
    let mut app = SpellGridApp::new(&three_spells(), preferences);

    app.apply_action(GridAction::SelectNone(Column::School));
    app.apply_action(GridAction::ToggleFilter(Column::School, 0));
    assert_eq!(visible_names(&mut app.grid), vec!["Alarm"]);

    app.apply_action(GridAction::SelectAll(Column::School));
    app.apply_action(GridAction::ToggleRow(1));
    app.apply_action(GridAction::ToggleRow(7));
    assert!(app.grid.is_row_selected(1));
    assert_eq!(app.grid.selected_rows().len(), 1);

    app.apply_action(GridAction::OpenModal(0, Column::Details));
    assert!(app.modal.is_none());
}

#[test]
fn test_cookie_opt_out_removes_theme_cookie() {
    let mut preferences = Preferences::load(MemoryCookieStore::new());
    preferences.enable_cookies();
    preferences.set_theme(Theme::Dark);
    assert_eq!(preferences.store().get(THEME_COOKIE).unwrap(), Some("1".to_string()));

    preferences.disable_cookies();
    assert_eq!(preferences.store().get(THEME_COOKIE).unwrap(), None);
    assert_eq!(preferences.store().get(USE_COOKIES_COOKIE).unwrap(), None);
    assert!(preferences.store().is_empty());
    assert_eq!(preferences.theme(), Theme::Dark);

    preferences.set_theme(Theme::Light);
    assert!(preferences.store().is_empty());
}

#[test]
fn test_preferences_survive_restart_only_with_opt_in() {
    let mut preferences = Preferences::load(MemoryCookieStore::new());
    preferences.set_theme(Theme::Dark);
    preferences.toggle_column(Column::Details);
    let store = preferences.into_store();
    assert!(store.is_empty());

    let mut preferences = Preferences::load(store);
    assert_eq!(preferences.theme(), Theme::Light);
    preferences.enable_cookies();
    preferences.set_theme(Theme::Dark);
    preferences.toggle_column(Column::Details);

    let restored = Preferences::load(preferences.into_store());
    assert!(restored.use_cookies());
    assert_eq!(restored.theme(), Theme::Dark);
    assert!(!restored.columns().is_shown(Column::Details));
    assert!(restored.columns().is_shown(Column::Name));
}

#[test]
fn test_garbage_cookies_fall_back_to_defaults() {
    let mut store = MemoryCookieStore::new();
    store.set(USE_COOKIES_COOKIE, "true").unwrap();
    store.set(THEME_COOKIE, "purple").unwrap();
    store.set(COLUMNS_COOKIE, "0,,abc,1").unwrap();

    let preferences = Preferences::load(store);
    assert_eq!(preferences.theme(), Theme::Light);
    assert_eq!(preferences.columns().shown(), vec![Column::Name, Column::Level]);
}

#[test]
fn test_unavailable_cookies_keep_session_in_memory() {
    let mut preferences = Preferences::load(FailingCookieStore);
    assert!(!preferences.cookies_available());

    preferences.enable_cookies();
    preferences.set_theme(Theme::Dark);
    preferences.toggle_column(Column::Area);
    assert_eq!(preferences.theme(), Theme::Dark);
    assert!(!preferences.columns().is_shown(Column::Area));

    preferences.disable_cookies();
    assert!(!preferences.use_cookies());
}

#[test]
fn test_dataset_rows_resolve_names() {
    let json = r#"{"spells":[{"name":"Fireball","level":3,"school":4,"castingTime":0,"source":1,"range":16,"area":"20-foot radius"}]}"#;
    let dataset = parse_spell_dataset(json).unwrap();
    let rows = build_rows(&dataset.spells);
    assert_eq!(rows[0].school.name, "Evocation");
    assert_eq!(rows[0].source.name, "Xanathar's Guide to Everything");
    assert_eq!(crate::gui::cell_text(&rows[0], Column::Range), "150 ft");
    assert_eq!(crate::gui::cell_text(&rows[0], Column::Ritual), "");
}
