pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type a message…")
                .desired_width(ui.available_width() - 64.0),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    // Blank input stays in the box, as the controller would ignore it anyway.
    if send && !input_text.trim().is_empty() {
        let message = input_text.clone();
        input_text.clear();
        return Some(message);
    }

    None
}
