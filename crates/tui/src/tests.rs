use carte_types::{Course, DraftField, Modal, ViewMode};
use carte_util::AppConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::editor::EditorFocus;
use crate::ui::main_component::MainView;
use crate::ui::runtime::{process_effects, render};
use crate::ui::theme::{LoadedTheme, catalog};

fn test_app(config: AppConfig) -> (App, MainView) {
    let app = App::new(config, LoadedTheme::from_definition(catalog::default_truecolor()));
    let view = MainView::new(&app);
    (app, view)
}

fn press(app: &mut App, view: &mut MainView, key: KeyEvent) {
    let effects = view.handle_key_events(app, key);
    process_effects(app, view, effects);
}

fn press_code(app: &mut App, view: &mut MainView, code: KeyCode) {
    press(app, view, KeyEvent::from(code));
}

fn ctrl(app: &mut App, view: &mut MainView, c: char) {
    press(app, view, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, view: &mut MainView, text: &str) {
    for c in text.chars() {
        press_code(app, view, KeyCode::Char(c));
    }
}

fn screen(app: &mut App, view: &mut MainView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("terminal");
    render(&mut terminal, app, view).expect("render");
    terminal.backend().to_string()
}

/// Top-left cell of the first occurrence of `label`, scanning rows top down.
fn find_label(buffer: &Buffer, label: &str) -> Option<(u16, u16)> {
    let width = label.chars().count();
    let area = buffer.area;
    (area.top()..area.bottom()).find_map(|y| {
        let row: Vec<&str> = (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect();
        (0..=row.len().saturating_sub(width))
            .find(|&x| row[x..x + width].concat() == label)
            .map(|x| (area.left() + x as u16, y))
    })
}

/// Render, then left-click the first cell of `label`.
fn click(app: &mut App, view: &mut MainView, label: &str) {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).expect("terminal");
    render(&mut terminal, app, view).expect("render");
    let Some((column, row)) = find_label(terminal.backend().buffer(), label) else {
        panic!("{label:?} not on screen\n{}", terminal.backend());
    };
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    let effects = view.handle_mouse_events(app, mouse);
    process_effects(app, view, effects);
}

/// Fill the form from the first field and submit, dismissing the success modal.
fn add_dish(app: &mut App, view: &mut MainView, name: &str, course_key: char, price: &str) {
    assert_eq!(app.editor.focus, EditorFocus::DishName);
    type_text(app, view, name);
    press_code(app, view, KeyCode::Tab);
    type_text(app, view, "Chef's special");
    press_code(app, view, KeyCode::Tab);
    press_code(app, view, KeyCode::Char(course_key));
    press_code(app, view, KeyCode::Tab);
    type_text(app, view, price);
    ctrl(app, view, 's');
    assert_eq!(app.notification.current().map(|n| n.message.as_str()), Some("Menu item added!"));
    press_code(app, view, KeyCode::Enter);
    assert_eq!(app.open_modal, None);
}

#[test]
fn editor_shows_form_and_summary() {
    let (mut app, mut view) = test_app(AppConfig::default());
    let screen = screen(&mut app, &mut view);

    for expected in [
        "A Taste With Christoffel",
        "Select your preferred course/meal",
        "Add New Menu Item",
        "Dish Name:",
        "Enter your preferred dish name",
        "Price (R):",
        "Starters",
        "Mains",
        "Dessert",
        "Add to Menu",
        "Chef's Menu",
        "View Menu",
    ] {
        assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
    }
}

#[test]
fn submitting_a_complete_form_adds_the_dish() {
    let (mut app, mut view) = test_app(AppConfig::default());

    type_text(&mut app, &mut view, "Bobotie");
    press_code(&mut app, &mut view, KeyCode::Enter);
    type_text(&mut app, &mut view, "Traditional baked dish");
    press_code(&mut app, &mut view, KeyCode::Tab);
    press_code(&mut app, &mut view, KeyCode::Char('2'));
    press_code(&mut app, &mut view, KeyCode::Tab);
    type_text(&mut app, &mut view, "120.50");
    assert_eq!(app.menu.draft().course(), Some(Course::Mains));
    assert_eq!(app.menu.draft().price(), "120.50");

    press_code(&mut app, &mut view, KeyCode::Tab);
    press_code(&mut app, &mut view, KeyCode::Enter);

    assert_eq!(app.open_modal, Some(Modal::Notification));
    let with_modal = screen(&mut app, &mut view);
    assert!(with_modal.contains("Menu item added!"));
    assert!(with_modal.contains("Success"));

    press_code(&mut app, &mut view, KeyCode::Enter);
    assert_eq!(app.open_modal, None);
    assert_eq!(app.menu.entry_count(), 1);
    assert_eq!(app.editor.input(DraftField::DishName).input(), "");
    assert_eq!(app.editor.input(DraftField::Price).input(), "");

    let after = screen(&mut app, &mut view);
    assert!(!after.contains("Menu item added!"));
    assert!(after.contains("1 dish on the menu"));
    assert!(after.contains("Enter your preferred dish name"));
}

#[test]
fn validation_errors_block_input_until_dismissed() {
    let (mut app, mut view) = test_app(AppConfig::default());

    ctrl(&mut app, &mut view, 's');
    assert!(screen(&mut app, &mut view).contains("Please enter a dish name"));

    // Keys go to the modal, not the form underneath.
    type_text(&mut app, &mut view, "x");
    assert_eq!(app.menu.draft().dish_name(), "");

    press_code(&mut app, &mut view, KeyCode::Esc);
    assert_eq!(app.open_modal, None);
    assert!(!screen(&mut app, &mut view).contains("Please enter a dish name"));

    type_text(&mut app, &mut view, "Malva pudding");
    ctrl(&mut app, &mut view, 's');
    assert!(screen(&mut app, &mut view).contains("Please enter a description"));
    assert_eq!(app.menu.draft().dish_name(), "Malva pudding");
    assert!(app.menu.catalog().is_empty());
}

#[test]
fn bad_price_keeps_the_draft() {
    let (mut app, mut view) = test_app(AppConfig::default());
    type_text(&mut app, &mut view, "Koeksisters");
    press_code(&mut app, &mut view, KeyCode::Tab);
    type_text(&mut app, &mut view, "Syrupy plait");
    press_code(&mut app, &mut view, KeyCode::Tab);
    press_code(&mut app, &mut view, KeyCode::Right);
    press_code(&mut app, &mut view, KeyCode::Tab);
    type_text(&mut app, &mut view, "cheap");
    ctrl(&mut app, &mut view, 's');

    assert!(screen(&mut app, &mut view).contains("Please enter a valid price"));
    assert_eq!(app.menu.draft().course(), Some(Course::Starters));
    assert_eq!(app.editor.input(DraftField::Price).input(), "cheap");
}

#[test]
fn catalog_lists_and_deletes_entries() {
    let (mut app, mut view) = test_app(AppConfig::default());
    add_dish(&mut app, &mut view, "Samoosas", '1', "45");
    add_dish(&mut app, &mut view, "Bunny chow", '2', "89.9");

    ctrl(&mut app, &mut view, 'v');
    assert_eq!(app.menu.view_mode(), ViewMode::Catalog);
    let listing = screen(&mut app, &mut view);
    for expected in ["Chef's Menu", "Back", "Samoosas", "R45.00", "Course: Starters", "Bunny chow", "R89.90", "Course: Mains", "[Delete]"] {
        assert!(listing.contains(expected), "missing {expected:?} in\n{listing}");
    }

    press_code(&mut app, &mut view, KeyCode::Char('d'));
    let listing = screen(&mut app, &mut view);
    assert!(!listing.contains("Samoosas"));
    assert!(listing.contains("Bunny chow"));

    press_code(&mut app, &mut view, KeyCode::Delete);
    assert!(app.menu.catalog().is_empty());
    assert!(screen(&mut app, &mut view).contains("No menu items added yet."));

    press_code(&mut app, &mut view, KeyCode::Char('b'));
    assert_eq!(app.menu.view_mode(), ViewMode::Editor);
    assert!(screen(&mut app, &mut view).contains("Add New Menu Item"));
}

#[test]
fn view_menu_works_with_an_empty_catalog() {
    let (mut app, mut view) = test_app(AppConfig::default());
    for _ in 0..5 {
        press_code(&mut app, &mut view, KeyCode::Tab);
    }
    press_code(&mut app, &mut view, KeyCode::Enter);
    assert_eq!(app.menu.view_mode(), ViewMode::Catalog);

    // Delete on an empty catalog does nothing.
    press_code(&mut app, &mut view, KeyCode::Char('d'));
    assert!(screen(&mut app, &mut view).contains("No menu items added yet."));

    press_code(&mut app, &mut view, KeyCode::Tab);
    press_code(&mut app, &mut view, KeyCode::Enter);
    assert_eq!(app.menu.view_mode(), ViewMode::Editor);
}

#[test]
fn configured_currency_is_used_for_labels_and_prices() {
    let config = AppConfig {
        currency_symbol: "$".to_string(),
        ..AppConfig::default()
    };
    let (mut app, mut view) = test_app(config);
    assert!(screen(&mut app, &mut view).contains("Price ($):"));

    add_dish(&mut app, &mut view, "Pap en vleis", '2', "7.5");
    ctrl(&mut app, &mut view, 'v');
    assert!(screen(&mut app, &mut view).contains("$7.50"));
}

#[test]
fn ctrl_q_requests_quit_even_with_a_modal_open() {
    let (mut app, mut view) = test_app(AppConfig::default());
    ctrl(&mut app, &mut view, 's');
    assert_eq!(app.open_modal, Some(Modal::Notification));

    ctrl(&mut app, &mut view, 'q');
    assert!(app.should_quit);
}

#[test]
fn mouse_drives_the_whole_flow() {
    let (mut app, mut view) = test_app(AppConfig::default());
    type_text(&mut app, &mut view, "Melktert");
    press_code(&mut app, &mut view, KeyCode::Tab);
    type_text(&mut app, &mut view, "Cinnamon custard tart");

    click(&mut app, &mut view, "Dessert");
    assert_eq!(app.menu.draft().course(), Some(Course::Dessert));
    assert_eq!(app.editor.focus, EditorFocus::Course);

    press_code(&mut app, &mut view, KeyCode::Tab);
    type_text(&mut app, &mut view, "35");

    click(&mut app, &mut view, "Add to Menu");
    assert_eq!(app.menu.entry_count(), 1);
    assert_eq!(app.open_modal, Some(Modal::Notification));

    click(&mut app, &mut view, "OK");
    assert_eq!(app.open_modal, None);

    click(&mut app, &mut view, "View Menu");
    assert_eq!(app.menu.view_mode(), ViewMode::Catalog);

    click(&mut app, &mut view, "[Delete]");
    assert!(app.menu.catalog().is_empty());

    click(&mut app, &mut view, "Back");
    assert_eq!(app.menu.view_mode(), ViewMode::Editor);
}

#[test]
fn clicking_a_card_selects_it() {
    let (mut app, mut view) = test_app(AppConfig::default());
    add_dish(&mut app, &mut view, "Samoosas", '1', "45");
    add_dish(&mut app, &mut view, "Bunny chow", '2', "89.9");
    ctrl(&mut app, &mut view, 'v');

    click(&mut app, &mut view, "Bunny chow");
    assert_eq!(app.catalog.selected(), 1);

    press_code(&mut app, &mut view, KeyCode::Char('d'));
    let names: Vec<&str> = app.menu.catalog().iter().map(|entry| entry.dish_name.as_str()).collect();
    assert_eq!(names, ["Samoosas"]);
}

#[test]
fn delete_keys_are_ignored_while_back_has_focus() {
    let (mut app, mut view) = test_app(AppConfig::default());
    add_dish(&mut app, &mut view, "Samoosas", '1', "45");
    ctrl(&mut app, &mut view, 'v');

    press_code(&mut app, &mut view, KeyCode::Tab);
    press_code(&mut app, &mut view, KeyCode::Char('d'));
    press_code(&mut app, &mut view, KeyCode::Delete);
    assert_eq!(app.menu.entry_count(), 1);

    press_code(&mut app, &mut view, KeyCode::Tab);
    press_code(&mut app, &mut view, KeyCode::Char('d'));
    assert!(app.menu.catalog().is_empty());
}
