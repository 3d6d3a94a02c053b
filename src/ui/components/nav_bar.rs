use crate::common::{Location, Page, Theme, ViewRole};

#[derive(Default)]
pub struct NavBarActions {
    pub navigate: Option<Location>,
    pub toggle_theme: bool,
}

pub fn render(ui: &mut egui::Ui, location: Location, theme: Theme) -> NavBarActions {
    let mut actions = NavBarActions::default();

    ui.horizontal(|ui| {
        ui.strong("TalentTrack");
        ui.separator();

        for page in Page::ALL {
            if ui.selectable_label(location.page == page, page.title()).clicked()
                && location.page != page
            {
                actions.navigate = Some(Location {
                    page,
                    view: location.view,
                });
            }
        }

        ui.separator();
        let mut view = location.view;
        egui::ComboBox::from_id_salt("view_role")
            .selected_text(format!("View: {}", view.title()))
            .show_ui(ui, |ui| {
                for role in ViewRole::ALL {
                    ui.selectable_value(&mut view, role, role.title());
                }
            });
        if view != location.view {
            actions.navigate = Some(Location {
                page: location.page,
                view,
            });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = match theme {
                Theme::Dark => "☀ Light",
                Theme::Light => "🌙 Dark",
            };
            if ui.button(label).clicked() {
                actions.toggle_theme = true;
            }
            ui.label(egui::RichText::new(location.to_href()).weak().small());
        });
    });

    actions
}
