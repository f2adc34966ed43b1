use eframe::egui;

/// Names of keys pressed this frame, in the form the game's key map expects:
/// letters are lowercase unless Shift is held.
pub fn pressed_key_names(ctx: &egui::Context) -> Vec<String> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key { key, pressed: true, modifiers, .. } => {
                    Some(key_name(*key, *modifiers))
                }
                _ => None,
            })
            .collect()
    })
}

fn key_name(key: egui::Key, modifiers: egui::Modifiers) -> String {
    let name = key.name();
    if name.chars().count() == 1 && !modifiers.shift {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}
