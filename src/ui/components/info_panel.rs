use crate::controllers::messaging::DetailView;

pub fn render(ui: &mut egui::Ui, detail: &DetailView) {
    ui.heading("Details");
    ui.separator();

    ui.label(egui::RichText::new(&detail.info_name).strong());
    if !detail.info_role.is_empty() {
        ui.label(&detail.info_role);
    }
    if !detail.info_company.is_empty() {
        ui.label(egui::RichText::new(&detail.info_company).weak());
    }

    ui.separator();
    ui.label("Next steps:");
    if detail.next_steps.is_empty() {
        ui.label(egui::RichText::new("Select a conversation to view suggestions.").weak());
        return;
    }
    for step in &detail.next_steps {
        ui.label(format!("• {step}"));
    }
}
