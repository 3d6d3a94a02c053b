use crate::common::Severity;
use crate::ui::state::Toast;

fn fill(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Info => egui::Color32::from_rgb(45, 90, 150),
        Severity::Success => egui::Color32::from_rgb(40, 130, 70),
        Severity::Error => egui::Color32::from_rgb(170, 50, 50),
    }
}

pub fn render(ctx: &egui::Context, toasts: &[Toast]) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.iter().rev() {
                egui::Frame::new()
                    .fill(fill(toast.notification.severity))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.colored_label(egui::Color32::WHITE, &toast.notification.message);
                    });
                ui.add_space(6.0);
            }
        });
}
