use crate::common::{ApplicationRecord, UserRole};
use crate::controllers::job_board::{JobDraft, Listing, applied_label};
use crate::ui::state::SignInInputs;

/// Credits granted by the dashboard top-up button.
pub const CREDIT_TOP_UP: u64 = 10;

/// What the jobs page shows, read from the board once per frame.
pub struct JobsView {
    pub listings: Vec<Listing>,
    pub applications: Vec<ApplicationRecord>,
    pub role: Option<UserRole>,
    pub user_name: String,
    pub company_name: Option<String>,
    pub xp: u64,
    pub company_credits: u64,
}

#[derive(Default)]
pub struct JobsActions {
    pub apply: Option<Listing>,
    pub post: bool,
    pub sign_in: bool,
    pub sign_out: bool,
    pub top_up: bool,
}

pub fn render(
    ui: &mut egui::Ui,
    view: &JobsView,
    sign_in: &mut SignInInputs,
    draft: &mut JobDraft,
) -> JobsActions {
    let mut actions = JobsActions::default();

    ui.columns(2, |columns| {
        render_listings(&mut columns[0], view, &mut actions);
        render_dashboard(&mut columns[1], view, sign_in, draft, &mut actions);
    });

    actions
}

fn render_listings(ui: &mut egui::Ui, view: &JobsView, actions: &mut JobsActions) {
    ui.heading("Open positions");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("job_listings")
        .show(ui, |ui| {
            for listing in &view.listings {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.strong(listing.title());
                        ui.label(egui::RichText::new(listing.tag()).small().weak());
                    });
                    ui.label(listing.meta());
                    if let Some(posted) = listing.posted_label() {
                        ui.label(egui::RichText::new(posted).small().weak());
                    }
                    if ui.button("Apply").clicked() {
                        actions.apply = Some(listing.clone());
                    }
                });
                ui.add_space(6.0);
            }
        });
}

fn render_dashboard(
    ui: &mut egui::Ui,
    view: &JobsView,
    sign_in: &mut SignInInputs,
    draft: &mut JobDraft,
    actions: &mut JobsActions,
) {
    ui.heading("Dashboard");
    ui.separator();

    let Some(role) = view.role else {
        ui.label("Sign in to apply for jobs.");
        egui::Grid::new("sign_in_form").num_columns(2).show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut sign_in.name);
            ui.end_row();

            ui.label("Role");
            egui::ComboBox::from_id_salt("sign_in_role")
                .selected_text(sign_in.role.as_str())
                .show_ui(ui, |ui| {
                    for option in UserRole::ALL {
                        ui.selectable_value(&mut sign_in.role, option, option.as_str());
                    }
                });
            ui.end_row();

            if sign_in.role.can_post_jobs() {
                ui.label("Company");
                ui.text_edit_singleline(&mut sign_in.company);
                ui.end_row();
            }
        });
        if ui.button("Sign in").clicked() {
            actions.sign_in = true;
        }
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!("Signed in as {} ({})", view.user_name, role.as_str()));
        if ui.button("Sign out").clicked() {
            actions.sign_out = true;
        }
    });
    if let Some(company) = &view.company_name {
        ui.label(egui::RichText::new(company).weak());
    }
    ui.label(format!("XP: {}", view.xp));

    if role.can_post_jobs() {
        ui.horizontal(|ui| {
            ui.label(format!("Company credits: {}", view.company_credits));
            if ui.small_button(format!("+{CREDIT_TOP_UP}")).clicked() {
                actions.top_up = true;
            }
        });

        ui.separator();
        ui.strong("Post a job");
        egui::Grid::new("post_job_form").num_columns(2).show(ui, |ui| {
            ui.label("Title");
            ui.text_edit_singleline(&mut draft.title);
            ui.end_row();
            ui.label("Location");
            ui.text_edit_singleline(&mut draft.location);
            ui.end_row();
            ui.label("Type");
            ui.text_edit_singleline(&mut draft.job_type);
            ui.end_row();
        });
        if ui.button("Post").clicked() {
            actions.post = true;
        }
    }

    ui.separator();
    ui.strong("Applications");
    if view.applications.is_empty() {
        ui.label(egui::RichText::new("No applications yet.").weak());
        return;
    }
    egui::ScrollArea::vertical()
        .id_salt("applications")
        .show(ui, |ui| {
            for record in &view.applications {
                ui.label(&record.title);
                ui.label(egui::RichText::new(applied_label(record)).small().weak());
                ui.add_space(4.0);
            }
        });
}
