use crate::controllers::interview_room::SessionView;

/// Returns true when the user asked to leave the session.
pub fn render(ctx: &egui::Context, session: &SessionView) -> bool {
    let mut close = false;

    egui::Window::new("Interview session")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(&session.meta).strong());
            ui.separator();
            ui.label(&session.role);
            ui.label(&session.company);
            ui.label(&session.scheduled);
            ui.label(&session.status);
            ui.label(egui::RichText::new(&session.identity).weak());
            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Elapsed:");
                ui.monospace(&session.elapsed);
            });
            ui.add_space(8.0);
            if ui.button("Leave session").clicked() {
                close = true;
            }
        });

    close
}
