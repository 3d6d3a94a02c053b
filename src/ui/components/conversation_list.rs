use crate::controllers::messaging::MessagingSnapshot;

#[derive(Default)]
pub struct ConversationListActions {
    pub search: Option<String>,
    pub select: Option<String>,
}

pub fn render(
    ui: &mut egui::Ui,
    snapshot: &MessagingSnapshot,
    current_search: &str,
) -> ConversationListActions {
    let mut actions = ConversationListActions::default();

    ui.heading("Conversations");
    ui.label(egui::RichText::new(&snapshot.view_pill).weak());
    ui.separator();

    let mut search = current_search.to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut search).hint_text("Search chats"));
    if response.changed() {
        actions.search = Some(search);
    }
    ui.label(egui::RichText::new(&snapshot.count_label).small().weak());
    ui.separator();

    if snapshot.items.is_empty() {
        ui.label("No conversations match your search");
        return actions;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for item in &snapshot.items {
            let clicked = ui
                .horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, format!("({})", item.initials));
                    ui.vertical(|ui| {
                        let mut clicked = false;
                        ui.horizontal(|ui| {
                            clicked = ui.selectable_label(item.active, &item.name).clicked();
                            ui.label(egui::RichText::new(&item.last_time).weak().small());
                            if let Some(unread) = item.unread {
                                ui.colored_label(egui::Color32::GREEN, format!("● {unread}"));
                            }
                        });
                        ui.label(egui::RichText::new(&item.preview).weak());
                        clicked
                    })
                    .inner
                })
                .inner;

            if clicked {
                actions.select = Some(item.id.clone());
            }
            ui.add_space(4.0);
        }
    });

    actions
}
