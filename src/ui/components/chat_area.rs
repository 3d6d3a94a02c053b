use crate::controllers::messaging::{BubbleSide, DetailView};

pub fn render(ui: &mut egui::Ui, detail: &DetailView, typing_visible: bool) {
    ui.heading(&detail.title);
    if !detail.subtitle.is_empty() {
        ui.label(egui::RichText::new(&detail.subtitle).weak());
    }
    ui.label(egui::RichText::new(&detail.identity).small());
    ui.separator();

    let height = (ui.available_height() - 56.0).max(120.0);
    egui::ScrollArea::vertical()
        .max_height(height)
        .auto_shrink([false, false])
        .stick_to_bottom(detail.scroll_to_bottom)
        .show(ui, |ui| {
            if let Some(hint) = &detail.empty_hint {
                ui.label(egui::RichText::new(hint).weak());
                return;
            }

            for bubble in &detail.bubbles {
                let layout = match bubble.side {
                    BubbleSide::Right => egui::Layout::right_to_left(egui::Align::TOP),
                    BubbleSide::Left => egui::Layout::left_to_right(egui::Align::TOP),
                };
                let fill = match bubble.side {
                    BubbleSide::Right => ui.visuals().selection.bg_fill,
                    BubbleSide::Left => ui.visuals().faint_bg_color,
                };
                ui.with_layout(layout, |ui| {
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(8))
                        .show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.label(&bubble.text);
                                ui.label(egui::RichText::new(&bubble.time).small().weak());
                            });
                        });
                });
                ui.add_space(4.0);
            }
        });

    if typing_visible {
        ui.label(egui::RichText::new("typing…").italics().weak());
    }
}
