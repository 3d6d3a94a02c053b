use crate::common::InterviewStatus;
use crate::controllers::countdown::CountdownStyle;
use crate::controllers::interview_room::{InterviewRoomSnapshot, StatusFilter};
use crate::ui::state::FilterInputs;

#[derive(Default)]
pub struct InterviewTableActions {
    pub filters_changed: bool,
    pub join: Option<u32>,
}

fn status_text(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "All statuses",
        StatusFilter::Only(status) => status.label(),
    }
}

fn countdown_color(ui: &egui::Ui, style: CountdownStyle) -> egui::Color32 {
    match style {
        CountdownStyle::Normal => ui.visuals().text_color(),
        CountdownStyle::Soon => egui::Color32::from_rgb(230, 160, 40),
        CountdownStyle::Late => egui::Color32::from_rgb(200, 70, 70),
    }
}

pub fn render(
    ui: &mut egui::Ui,
    snapshot: &InterviewRoomSnapshot,
    inputs: &mut FilterInputs,
) -> InterviewTableActions {
    let mut actions = InterviewTableActions::default();

    ui.horizontal(|ui| {
        ui.heading("Interview Room");
        ui.label(egui::RichText::new(&snapshot.view_pill).weak());
    });
    ui.label(&snapshot.next_label);
    ui.separator();

    ui.horizontal(|ui| {
        let text = ui.add(
            egui::TextEdit::singleline(&mut inputs.text)
                .hint_text("Search role or company")
                .desired_width(200.0),
        );
        actions.filters_changed |= text.changed();

        let before = inputs.status;
        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(status_text(inputs.status))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut inputs.status, StatusFilter::All, "All statuses");
                for status in InterviewStatus::ALL {
                    ui.selectable_value(
                        &mut inputs.status,
                        StatusFilter::Only(status),
                        status.label(),
                    );
                }
            });
        actions.filters_changed |= before != inputs.status;

        let date = ui.add(
            egui::TextEdit::singleline(&mut inputs.date)
                .hint_text("YYYY-MM-DD")
                .desired_width(100.0),
        );
        actions.filters_changed |= date.changed();
        if inputs.date_is_invalid() {
            ui.colored_label(egui::Color32::from_rgb(200, 70, 70), "Invalid date");
        }

        ui.label(egui::RichText::new(&snapshot.count_label).weak());
    });
    ui.separator();

    if snapshot.rows.is_empty() {
        ui.label("No interviews match the current filters.");
        return actions;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("interview_rows")
            .striped(true)
            .num_columns(6)
            .show(ui, |ui| {
                ui.strong("Role");
                ui.strong("Company");
                ui.strong("Scheduled");
                ui.strong("Status");
                ui.strong("Starts in");
                ui.label("");
                ui.end_row();

                for row in &snapshot.rows {
                    ui.label(&row.role_title);
                    ui.label(&row.company);
                    ui.label(&row.scheduled_label);
                    ui.label(row.status.label());
                    ui.colored_label(countdown_color(ui, row.countdown.style), &row.countdown.label);
                    if ui.button("Join").clicked() {
                        actions.join = Some(row.id);
                    }
                    ui.end_row();
                }
            });
    });

    actions
}
